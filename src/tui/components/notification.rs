//! Notification toast renderer
//!
//! Toasts carry a message, a severity level, an optional auto-hide delay
//! and a floating flag. Floating toasts stack upward from the bottom-left
//! corner, one slot per live toast; a non-floating toast replaces whatever
//! non-floating toast is already in the container.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;
use crate::tui::Frame;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Error,
    Info,
    Success,
    Warning,
}

impl NotificationLevel {
    fn color(self, theme: &Theme) -> Color {
        match self {
            Self::Error => theme.error,
            Self::Info => theme.info,
            Self::Success => theme.success,
            Self::Warning => theme.warning,
        }
    }
}

/// One live toast
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub floating: bool,
    expires_at: Option<Instant>,
}

/// Stack of live toasts
#[derive(Debug, Default)]
pub struct NotificationStack {
    items: Vec<Notification>,
}

impl NotificationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a toast.
    ///
    /// `auto_hide` is in seconds; zero means the toast stays until
    /// replaced. Non-floating toasts replace any existing non-floating
    /// toast, floating toasts stack.
    pub fn push(
        &mut self,
        message: impl Into<String>,
        level: NotificationLevel,
        auto_hide: u64,
        floating: bool,
    ) {
        if !floating {
            self.items.retain(|n| n.floating);
        }

        self.items.push(Notification {
            message: message.into(),
            level,
            floating,
            expires_at: (auto_hide > 0).then(|| Instant::now() + Duration::from_secs(auto_hide)),
        });
    }

    /// Drop expired toasts
    pub fn tick(&mut self, now: Instant) {
        self.items
            .retain(|n| n.expires_at.map_or(true, |deadline| now < deadline));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Render all live toasts.
    ///
    /// Floating toasts stack upward from the bottom-left corner of `area`;
    /// non-floating toasts render inside `container`, the caller-designated
    /// slot in the page layout.
    pub fn render(&self, frame: &mut Frame, area: Rect, container: Rect, theme: &Theme) {
        let mut floating_slot = 0u16;

        for toast in &self.items {
            let style = Style::default()
                .fg(toast.level.color(theme))
                .add_modifier(Modifier::BOLD);

            if toast.floating {
                let width = (toast.message.width() as u16 + 4)
                    .min(area.width.saturating_sub(2))
                    .max(10);
                let height = 3u16;
                let y = area
                    .bottom()
                    .saturating_sub(1 + height + floating_slot * height);
                let rect = Rect {
                    x: area.x + 1,
                    y,
                    width,
                    height,
                };
                floating_slot += 1;
                if !rect.intersects(area) {
                    continue;
                }
                let rect = rect.intersection(area);
                if rect.width == 0 || rect.height == 0 {
                    continue;
                }

                frame.render_widget(Clear, rect);
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(toast.level.color(theme)))
                    .style(Style::default().bg(theme.bg_overlay));
                frame.render_widget(
                    Paragraph::new(toast.message.clone()).style(style).block(block),
                    rect,
                );
            } else {
                let rect = Rect {
                    height: 1.min(container.height),
                    ..container
                };
                if !rect.intersects(area) {
                    continue;
                }
                let rect = rect.intersection(area);
                if rect.width == 0 || rect.height == 0 {
                    continue;
                }
                frame.render_widget(Clear, rect);
                frame.render_widget(Paragraph::new(toast.message.clone()).style(style), rect);
            }
        }
    }
}
