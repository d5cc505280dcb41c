//! Hackathon landing page
//!
//! Header with the event name, one section at a time below it, and a key
//! hint bar. Sections map to the slide-menu entries and to route deep
//! links.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::components::menu::MENU_SECTIONS;
use crate::tui::themes::Theme;
use crate::tui::Frame;

/// Landing page state
pub struct HomePage {
    event_name: String,
    section: String,
}

impl HomePage {
    pub fn new(event_name: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            section: "about".to_string(),
        }
    }

    /// Jump to a section if it exists; unknown ids keep the current one
    pub fn set_section(&mut self, section: &str) {
        if MENU_SECTIONS.contains(&section) {
            self.section = section.to_string();
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    fn section_body(&self) -> Vec<Line<'static>> {
        let text: &[&str] = match self.section.as_str() {
            "schedule" => &[
                "Friday   18:00  Doors open, team matchmaking",
                "Friday   20:00  Challenges announced, hacking starts",
                "Saturday 13:00  Mentor checkpoints",
                "Sunday   12:00  Code freeze",
                "Sunday   14:00  Demos and awards",
            ],
            "challenges" => &[
                "Challenge #1  Smart city services",
                "Challenge #2  AI for accessibility",
                "Challenge #3  Open data mashups",
                "",
                "Pick exactly one challenge on the registration form.",
            ],
            "register" => &[
                "Registration is free and open to individuals and teams",
                "of up to six members.",
                "",
                "Press r to open the registration form.",
            ],
            "contact" => &[
                "Questions? Reach the organizers:",
                "  hello@hackathon.is",
            ],
            _ => &[
                "48 hours of building, learning and shipping together",
                "with mentors from the local tech community.",
                "",
                "Browse the sections with the menu (m) and register",
                "with r when you are ready.",
            ],
        };

        text.iter().map(|l| Line::from(*l)).collect()
    }

    /// Render the page; `dimmed` mutes everything while a modal is open
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, dimmed: bool, menu_hint: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(1),    // section
                Constraint::Length(1), // hint bar
            ])
            .split(area);

        let base = if dimmed {
            theme.muted_style().add_modifier(Modifier::DIM)
        } else {
            theme.text_style()
        };

        let mut header_spans = vec![Span::styled(
            format!(" {} ", self.event_name),
            if dimmed { base } else { theme.title_style() },
        )];
        if menu_hint {
            header_spans.push(Span::styled("· [m] menu · [r] register", theme.muted_style()));
        }
        let header = Paragraph::new(Line::from(header_spans)).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
        frame.render_widget(header, chunks[0]);

        let mut lines = vec![
            Line::from(Span::styled(
                self.section.to_uppercase(),
                if dimmed { base } else { theme.title_style() },
            )),
            Line::default(),
        ];
        lines.extend(self.section_body());

        let body = Paragraph::new(lines).style(base).wrap(Wrap { trim: false });
        frame.render_widget(body, chunks[1]);

        let hint = Paragraph::new("q quit · m menu · r register").style(theme.muted_style());
        frame.render_widget(hint, chunks[2]);
    }
}
