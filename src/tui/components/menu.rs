//! Slide-menu component
//!
//! The compact-layout navigation: opened as a dialog pinned to the
//! top-left corner, full height, listing the landing-page sections. A
//! selection emits a navigation event and the app closes the menu dialog.

use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tokio::sync::mpsc;

use super::{Component, ComponentState};
use crate::tui::events::Event;
use crate::tui::themes::Theme;
use crate::tui::Frame;

/// Menu entries, in display order
pub const MENU_SECTIONS: [&str; 5] = ["about", "schedule", "challenges", "register", "contact"];

fn entry_label(section: &str) -> String {
    let mut chars = section.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Slide-menu state
pub struct SlideMenu {
    state: ComponentState,
    selected: usize,
    event_sender: Option<mpsc::UnboundedSender<Event>>,
}

impl SlideMenu {
    pub fn new() -> Self {
        Self {
            state: ComponentState::new(),
            selected: 0,
            event_sender: None,
        }
    }

    pub fn set_event_sender(&mut self, sender: mpsc::UnboundedSender<Event>) {
        self.event_sender = Some(sender);
    }

    pub fn selected_section(&self) -> &'static str {
        MENU_SECTIONS[self.selected]
    }

    fn send(&self, event: Event) {
        if let Some(sender) = &self.event_sender {
            let _ = sender.send(event);
        }
    }
}

impl Default for SlideMenu {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Component for SlideMenu {
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        match event.code {
            KeyCode::Up | KeyCode::BackTab => {
                self.selected = (self.selected + MENU_SECTIONS.len() - 1) % MENU_SECTIONS.len();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.selected = (self.selected + 1) % MENU_SECTIONS.len();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.send(Event::Navigate(self.selected_section().to_string()));
            }
            _ => {}
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.state.size = area;

        let mut lines = vec![
            Line::from(Span::styled("Menu", theme.title_style())),
            Line::default(),
        ];

        for (idx, section) in MENU_SECTIONS.iter().enumerate() {
            let style = if idx == self.selected {
                theme.focused_style()
            } else {
                theme.text_style()
            };
            lines.push(Line::from(Span::styled(
                format!("  {}  ", entry_label(section)),
                style,
            )));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "↑↓ move · Enter open · Esc close",
            theme.muted_style(),
        )));

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn has_focus(&self) -> bool {
        self.state.has_focus
    }

    fn set_focus(&mut self, focus: bool) {
        self.state.has_focus = focus;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_selection_wraps() {
        let mut menu = SlideMenu::new();
        menu.handle_key_event(key(KeyCode::Up)).await.unwrap();
        assert_eq!(menu.selected_section(), "contact");

        menu.handle_key_event(key(KeyCode::Down)).await.unwrap();
        assert_eq!(menu.selected_section(), "about");
    }

    #[tokio::test]
    async fn test_enter_emits_navigation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut menu = SlideMenu::new();
        menu.set_event_sender(tx);

        menu.handle_key_event(key(KeyCode::Down)).await.unwrap();
        menu.handle_key_event(key(KeyCode::Enter)).await.unwrap();

        match rx.try_recv().unwrap() {
            Event::Navigate(section) => assert_eq!(section, "schedule"),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
