//! The dialog instance
//!
//! Lifecycle: constructed (hidden) -> shown -> closed. A closed dialog is
//! inert: `show` and `close` degrade to no-ops, so a late auto-close timer
//! or a second close call can never fail.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Text;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use std::time::{Duration, Instant};
use tracing::debug;

use super::types::{DialogHook, DialogId, DialogLayout, DialogOptions};
use crate::tui::themes::Theme;
use crate::tui::Frame;

/// One modal dialog overlay.
///
/// Owns exactly two rectangles: the backdrop spanning the viewport and the
/// content box holding the body. Both are torn down together on close.
pub struct Dialog {
    id: DialogId,
    body: Text<'static>,
    options: DialogOptions,
    layout: DialogLayout,
    visible: bool,
    created: bool,
    auto_close_at: Option<Instant>,
}

impl Dialog {
    /// Construct a dialog and attach it to the given viewport.
    ///
    /// Merges the options over defaults (the builder already did that),
    /// resolves the layout, arms the auto-close deadline and, when
    /// `auto_show` is set, immediately shows the dialog.
    pub fn new(body: impl Into<Text<'static>>, options: DialogOptions, viewport: Rect) -> Self {
        let body = body.into();
        let layout = DialogLayout::calculate(&options, Self::measure(&body), viewport);
        let auto_close_at = options
            .auto_close
            .map(|secs| Instant::now() + Duration::from_secs(secs));

        let mut dialog = Self {
            id: DialogId::generate(),
            body,
            options,
            layout,
            visible: false,
            created: true,
            auto_close_at,
        };
        debug!("Created dialog {}", dialog.id);

        if dialog.options.auto_show {
            dialog.show();
        }
        dialog
    }

    /// Measured box of the rendered body, including border chrome.
    fn measure(body: &Text<'_>) -> (u16, u16) {
        if body.width() == 0 && body.height() == 0 {
            // Zero-size content degrades to a zero-size placement
            return (0, 0);
        }
        (
            u16::try_from(body.width()).unwrap_or(u16::MAX).saturating_add(2),
            u16::try_from(body.height()).unwrap_or(u16::MAX).saturating_add(2),
        )
    }

    pub fn id(&self) -> &DialogId {
        &self.id
    }

    /// The content box the body (or an embedded component) renders into
    pub fn content_area(&self) -> Rect {
        let c = self.layout.content;
        // Inside the border
        Rect {
            x: c.x.saturating_add(1),
            y: c.y.saturating_add(1),
            width: c.width.saturating_sub(2),
            height: c.height.saturating_sub(2),
        }
    }

    /// The full content rect including the border
    pub fn content_rect(&self) -> Rect {
        self.layout.content
    }

    /// True iff the backdrop still exists with visibility turned on
    pub fn is_visible(&self) -> bool {
        self.created && self.visible
    }

    /// True iff the dialog has not been closed/destroyed
    pub fn is_created(&self) -> bool {
        self.created
    }

    /// Whether a point falls inside the content box (border included).
    ///
    /// The hit-test used to tell a click on the dialog from a click on the
    /// backdrop around it.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        Self::is_within(x, y, self.layout.content)
    }

    /// Point-in-rect helper shared with the registry
    pub fn is_within(x: u16, y: u16, rect: Rect) -> bool {
        x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
    }

    /// Show the dialog.
    ///
    /// Fires `on_before_show`, turns visibility on, fires `on_show`. Hooks
    /// re-fire on repeated calls while already visible. No-op once closed.
    pub fn show(&mut self) {
        if !self.created {
            return;
        }

        fire(&mut self.options.hooks.on_before_show);
        self.visible = true;
        fire(&mut self.options.hooks.on_show);
        debug!("Dialog {} shown", self.id);
    }

    /// Close the dialog, effective only while visible.
    ///
    /// Fires `on_close` exactly once, then detaches both rectangles and
    /// marks the instance destroyed. Further calls are no-ops.
    pub fn close(&mut self) {
        if !self.is_visible() {
            return;
        }

        fire(&mut self.options.hooks.on_close);
        self.visible = false;
        self.created = false;
        debug!("Dialog {} closed", self.id);
    }

    /// Dispatch a click at viewport coordinates.
    ///
    /// A click on the backdrop outside the content box closes the dialog
    /// when `close_on_outside_click` is enabled; a click inside the content
    /// box never closes it.
    pub fn handle_click(&mut self, x: u16, y: u16) {
        if !self.is_visible() || !self.options.close_on_outside_click {
            return;
        }
        if !self.contains(x, y) && Self::is_within(x, y, self.layout.backdrop) {
            self.close();
        }
    }

    /// Dispatch an Escape press.
    ///
    /// Closes when enabled and visible, unless focus currently sits inside
    /// a text-input-like widget (`editing`).
    pub fn handle_escape(&mut self, editing: bool) {
        if editing || !self.options.close_on_esc {
            return;
        }
        if self.is_visible() {
            self.close();
        }
    }

    /// Fire the auto-close deadline if it has passed.
    ///
    /// The deadline is never cancelled; firing against an already-closed
    /// dialog is a guarded no-op.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.auto_close_at {
            if now >= deadline {
                self.close();
            }
        }
    }

    /// Recompute the layout after a viewport change
    pub fn relayout(&mut self, viewport: Rect) {
        self.layout = DialogLayout::calculate(&self.options, Self::measure(&self.body), viewport);
    }

    /// Replace the body content.
    ///
    /// Dialogs without an explicit size are re-measured against the current
    /// viewport.
    pub fn set_body(&mut self, body: impl Into<Text<'static>>) {
        self.body = body.into();
        if self.options.size.is_none() {
            self.relayout(self.layout.backdrop);
        }
    }

    /// Render backdrop and content box
    pub fn render(&self, frame: &mut Frame, theme: &Theme) {
        if !self.is_visible() {
            return;
        }

        let backdrop_style = self
            .options
            .backdrop_style
            .unwrap_or_else(|| Style::default().bg(theme.bg_overlay));
        frame.render_widget(Clear, self.layout.backdrop);
        frame.render_widget(Block::default().style(backdrop_style), self.layout.backdrop);

        let content_style = self
            .options
            .content_style
            .unwrap_or_else(|| Style::default().fg(theme.text).bg(theme.surface));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(content_style);

        frame.render_widget(Clear, self.layout.content);
        frame.render_widget(block, self.layout.content);

        let body_area = self.content_area();
        if body_area.width > 0 && body_area.height > 0 {
            let paragraph = Paragraph::new(self.body.clone()).wrap(Wrap { trim: false });
            frame.render_widget(paragraph, body_area);
        }
    }
}

fn fire(hook: &mut Option<DialogHook>) {
    if let Some(hook) = hook {
        hook();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::dialog::types::{DialogHooks, Extent};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn viewport() -> Rect {
        Rect::new(0, 0, 100, 40)
    }

    fn counter_hook(counter: &Arc<AtomicUsize>) -> impl FnMut() + Send + 'static {
        let counter = Arc::clone(counter);
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_auto_show_default() {
        let dialog = Dialog::new("hello", DialogOptions::default(), viewport());
        assert!(dialog.is_created());
        assert!(dialog.is_visible());
    }

    #[test]
    fn test_hidden_until_shown_without_auto_show() {
        let mut dialog = Dialog::new("hello", DialogOptions::new().auto_show(false), viewport());
        assert!(dialog.is_created());
        assert!(!dialog.is_visible());

        dialog.show();
        assert!(dialog.is_visible());
    }

    #[test]
    fn test_show_refires_hooks_when_already_visible() {
        let before = Arc::new(AtomicUsize::new(0));
        let shown = Arc::new(AtomicUsize::new(0));
        let hooks = DialogHooks::default()
            .on_before_show(counter_hook(&before))
            .on_show(counter_hook(&shown));

        let mut dialog = Dialog::new("hello", DialogOptions::new().hooks(hooks), viewport());
        assert_eq!(before.load(Ordering::SeqCst), 1);
        assert_eq!(shown.load(Ordering::SeqCst), 1);

        dialog.show();
        assert_eq!(before.load(Ordering::SeqCst), 2);
        assert_eq!(shown.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_close_is_idempotent() {
        let closed = Arc::new(AtomicUsize::new(0));
        let hooks = DialogHooks::default().on_close(counter_hook(&closed));

        let mut dialog = Dialog::new("hello", DialogOptions::new().hooks(hooks), viewport());
        dialog.close();
        dialog.close();

        assert_eq!(closed.load(Ordering::SeqCst), 1);
        assert!(!dialog.is_visible());
        assert!(!dialog.is_created());
    }

    #[test]
    fn test_closed_dialog_is_inert() {
        let mut dialog = Dialog::new("hello", DialogOptions::default(), viewport());
        dialog.close();

        dialog.show();
        assert!(!dialog.is_visible());
        assert!(!dialog.is_created());
    }

    #[test]
    fn test_close_on_hidden_dialog_is_noop() {
        let closed = Arc::new(AtomicUsize::new(0));
        let hooks = DialogHooks::default().on_close(counter_hook(&closed));

        let mut dialog = Dialog::new(
            "hello",
            DialogOptions::new().auto_show(false).hooks(hooks),
            viewport(),
        );
        dialog.close();
        assert_eq!(closed.load(Ordering::SeqCst), 0);
        assert!(dialog.is_created());
    }

    #[test]
    fn test_outside_click_closes() {
        let options = DialogOptions::new().size(Extent::Cells(20), Extent::Cells(10));
        let mut dialog = Dialog::new("hello", options, viewport());
        let content = dialog.content_rect();

        // Click on the backdrop, outside the content box
        dialog.handle_click(content.x.saturating_sub(2), content.y);
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_inside_click_never_closes() {
        let options = DialogOptions::new().size(Extent::Cells(20), Extent::Cells(10));
        let mut dialog = Dialog::new("hello", options, viewport());
        let content = dialog.content_rect();

        dialog.handle_click(content.x + 1, content.y + 1);
        assert!(dialog.is_visible());
    }

    #[test]
    fn test_outside_click_disabled() {
        let options = DialogOptions::new()
            .size(Extent::Cells(20), Extent::Cells(10))
            .close_on_outside_click(false);
        let mut dialog = Dialog::new("hello", options, viewport());

        dialog.handle_click(0, 0);
        assert!(dialog.is_visible());
    }

    #[test]
    fn test_escape_closes_unless_editing() {
        let mut dialog = Dialog::new("hello", DialogOptions::default(), viewport());

        // Focus inside a text input: Escape must not close
        dialog.handle_escape(true);
        assert!(dialog.is_visible());

        dialog.handle_escape(false);
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_escape_disabled() {
        let mut dialog = Dialog::new("hello", DialogOptions::new().close_on_esc(false), viewport());
        dialog.handle_escape(false);
        assert!(dialog.is_visible());
    }

    #[test]
    fn test_auto_close_fires_once_deadline_passes() {
        let mut dialog = Dialog::new("hello", DialogOptions::new().auto_close(1), viewport());

        dialog.tick(Instant::now());
        assert!(dialog.is_visible());

        dialog.tick(Instant::now() + Duration::from_secs(2));
        assert!(!dialog.is_visible());

        // Late timer fire against the closed instance stays a no-op
        dialog.tick(Instant::now() + Duration::from_secs(3));
        assert!(!dialog.is_created());
    }

    #[test]
    fn test_measured_size_includes_border() {
        let dialog = Dialog::new("hello world", DialogOptions::new(), viewport());
        let content = dialog.content_rect();
        assert_eq!(content.width, 11 + 2);
        assert_eq!(content.height, 1 + 2);
    }

    #[test]
    fn test_set_body_remeasures_unsized_dialog() {
        let mut dialog = Dialog::new("hi", DialogOptions::new(), viewport());
        assert_eq!(dialog.content_rect().width, 2 + 2);

        dialog.set_body("a much longer body line");
        assert_eq!(dialog.content_rect().width, 23 + 2);
    }
}
