//! Page-scoped dialog registry
//!
//! Tracks every live dialog by its identifier: populated on open, pruned on
//! close. The registry is also the single dispatch point for Escape,
//! outside clicks and timer ticks, so no per-dialog global listeners are
//! ever left dangling after a dialog dies.

use ratatui::layout::Rect;
use std::time::Instant;
use tracing::debug;

use super::types::DialogId;
use super::widget::Dialog;
use crate::tui::themes::Theme;
use crate::tui::Frame;

/// Registry of live dialogs, kept in insertion (document) order
#[derive(Default)]
pub struct DialogRegistry {
    entries: Vec<Dialog>,
}

impl DialogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructed dialog and hand back its identifier
    pub fn open(&mut self, dialog: Dialog) -> DialogId {
        let id = dialog.id().clone();
        debug!("Registering dialog {}", id);
        self.entries.push(dialog);
        id
    }

    pub fn get(&self, id: &DialogId) -> Option<&Dialog> {
        self.entries.iter().find(|d| d.id() == id)
    }

    pub fn get_mut(&mut self, id: &DialogId) -> Option<&mut Dialog> {
        self.entries.iter_mut().find(|d| d.id() == id)
    }

    /// Close a dialog by id and prune it once destroyed
    pub fn close(&mut self, id: &DialogId) {
        if let Some(dialog) = self.get_mut(id) {
            dialog.close();
        }
        self.prune();
    }

    /// Close every open dialog.
    ///
    /// Independent `close()` calls in insertion order; not atomic, no
    /// rollback. Hidden-but-created dialogs are untouched because their
    /// close is a visibility-guarded no-op.
    pub fn close_all_open(&mut self) {
        for dialog in &mut self.entries {
            dialog.close();
        }
        self.prune();
    }

    /// Single process-wide Escape dispatcher.
    ///
    /// Routes one Escape press to every currently visible dialog; `editing`
    /// reports whether focus sits inside a text input, which suppresses the
    /// close.
    pub fn handle_escape(&mut self, editing: bool) {
        for dialog in &mut self.entries {
            dialog.handle_escape(editing);
        }
        self.prune();
    }

    /// Route a click to the topmost visible dialog
    pub fn handle_click(&mut self, x: u16, y: u16) {
        if let Some(dialog) = self.entries.iter_mut().rev().find(|d| d.is_visible()) {
            dialog.handle_click(x, y);
        }
        self.prune();
    }

    /// Advance auto-close deadlines
    pub fn tick(&mut self, now: Instant) {
        for dialog in &mut self.entries {
            dialog.tick(now);
        }
        self.prune();
    }

    /// Recompute all layouts after a terminal resize
    pub fn relayout_all(&mut self, viewport: Rect) {
        for dialog in &mut self.entries {
            dialog.relayout(viewport);
        }
    }

    /// Render dialogs in insertion order (later entries on top)
    pub fn render(&self, frame: &mut Frame, theme: &Theme) {
        for dialog in &self.entries {
            dialog.render(frame, theme);
        }
    }

    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|d| d.is_visible()).count()
    }

    pub fn has_visible(&self) -> bool {
        self.entries.iter().any(|d| d.is_visible())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop destroyed entries; the registry only ever holds live dialogs
    fn prune(&mut self) {
        self.entries.retain(|d| d.is_created());
    }
}
