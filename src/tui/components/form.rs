//! Registration form component
//!
//! Rendered inside the registration dialog. Collects contact details,
//! individual/team choice with dynamic team-member rows, a challenge pick
//! and the terms agreement, validates on submit and hands a valid
//! registration to the app for the API call.

use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tokio::sync::mpsc;
use tracing::debug;

use super::notification::NotificationLevel;
use super::{Component, ComponentState};
use crate::registration::{Registration, RegistrationKind, TeamMember};
use crate::tui::events::Event;
use crate::tui::themes::Theme;
use crate::tui::Frame;

/// Focusable form fields, rebuilt whenever the registration type or the
/// member rows change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Kind,
    FirstName,
    LastName,
    Email,
    Phone,
    JoinTeam,
    TeamName,
    MemberName(usize),
    MemberEmail(usize),
    AddMember,
    Challenge,
    Terms,
    Submit,
}

impl Field {
    /// Text-input-like fields; while one of these is focused, Escape must
    /// not close the surrounding dialog
    fn is_text_input(self) -> bool {
        matches!(
            self,
            Self::FirstName
                | Self::LastName
                | Self::Email
                | Self::Phone
                | Self::TeamName
                | Self::MemberName(_)
                | Self::MemberEmail(_)
        )
    }
}

/// Interactive registration form
pub struct RegistrationForm {
    state: ComponentState,
    registration: Registration,
    focus: usize,
    max_members: usize,
    event_sender: Option<mpsc::UnboundedSender<Event>>,
    /// Set once the API accepted the registration; the form goes inert
    completed: bool,
}

impl RegistrationForm {
    pub fn new(max_members: usize) -> Self {
        Self {
            state: ComponentState::new(),
            registration: Registration::default(),
            focus: 0,
            max_members,
            event_sender: None,
            completed: false,
        }
    }

    pub fn set_event_sender(&mut self, sender: mpsc::UnboundedSender<Event>) {
        self.event_sender = Some(sender);
    }

    /// Whether focus currently sits inside a text input
    pub fn is_editing(&self) -> bool {
        self.focused_field().map_or(false, Field::is_text_input)
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    /// Current field list for the active registration type
    fn fields(&self) -> Vec<Field> {
        let mut fields = vec![
            Field::Kind,
            Field::FirstName,
            Field::LastName,
            Field::Email,
            Field::Phone,
        ];

        match self.registration.kind {
            RegistrationKind::Individual => fields.push(Field::JoinTeam),
            RegistrationKind::Team => {
                fields.push(Field::TeamName);
                for i in 0..self.registration.members.len() {
                    fields.push(Field::MemberName(i));
                    fields.push(Field::MemberEmail(i));
                }
                fields.push(Field::AddMember);
            }
        }

        fields.push(Field::Challenge);
        fields.push(Field::Terms);
        fields.push(Field::Submit);
        fields
    }

    fn focused_field(&self) -> Option<Field> {
        self.fields().get(self.focus).copied()
    }

    fn clamp_focus(&mut self) {
        let len = self.fields().len();
        if self.focus >= len {
            self.focus = len.saturating_sub(1);
        }
    }

    fn focus_next(&mut self) {
        let len = self.fields().len();
        self.focus = (self.focus + 1) % len;
    }

    fn focus_prev(&mut self) {
        let len = self.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    fn text_value_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FirstName => Some(&mut self.registration.first_name),
            Field::LastName => Some(&mut self.registration.last_name),
            Field::Email => Some(&mut self.registration.email),
            Field::Phone => Some(&mut self.registration.phone),
            Field::TeamName => Some(&mut self.registration.team_name),
            Field::MemberName(i) => self.registration.members.get_mut(i).map(|m| &mut m.name),
            Field::MemberEmail(i) => self.registration.members.get_mut(i).map(|m| &mut m.email),
            _ => None,
        }
    }

    fn toggle_kind(&mut self) {
        self.registration.kind = match self.registration.kind {
            RegistrationKind::Individual => RegistrationKind::Team,
            RegistrationKind::Team => RegistrationKind::Individual,
        };
        self.clamp_focus();
    }

    fn add_member(&mut self) {
        if self.registration.members.len() < self.max_members {
            self.registration.members.push(TeamMember::default());
            debug!(
                "Added team member row ({} of {})",
                self.registration.members.len(),
                self.max_members
            );
        }
    }

    fn remove_member(&mut self, index: usize) {
        if index < self.registration.members.len() {
            self.registration.members.remove(index);
            self.clamp_focus();
        }
    }

    fn cycle_challenge(&mut self, forward: bool) {
        self.registration.challenge = Some(match (self.registration.challenge, forward) {
            (None, _) => 1,
            (Some(c), true) => {
                if c >= 3 {
                    1
                } else {
                    c + 1
                }
            }
            (Some(c), false) => {
                if c <= 1 {
                    3
                } else {
                    c - 1
                }
            }
        });
    }

    fn send(&self, event: Event) {
        if let Some(sender) = &self.event_sender {
            let _ = sender.send(event);
        }
    }

    /// Validate and hand off the registration; validation failures become
    /// floating error toasts
    fn submit(&mut self) {
        match self.registration.validate() {
            Ok(()) => {
                debug!("Registration validated, submitting");
                self.send(Event::SubmitRegistration(Box::new(self.registration.clone())));
            }
            Err(e) => {
                self.send(Event::Notify {
                    message: e.to_string(),
                    level: NotificationLevel::Error,
                });
            }
        }
    }

    fn activate(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        match field {
            Field::Kind => self.toggle_kind(),
            Field::JoinTeam => self.registration.join_team = !self.registration.join_team,
            Field::AddMember => self.add_member(),
            Field::Challenge => self.cycle_challenge(true),
            Field::Terms => self.registration.terms_accepted = !self.registration.terms_accepted,
            Field::Submit => self.submit(),
            _ => {}
        }
    }

    fn checkbox(checked: bool) -> &'static str {
        if checked {
            "[x]"
        } else {
            "[ ]"
        }
    }

    fn field_line<'a>(&self, field: Field, focused: bool, theme: &Theme) -> Line<'a> {
        let reg = &self.registration;
        let text = match field {
            Field::Kind => format!(
                "Registration type: {}",
                match reg.kind {
                    RegistrationKind::Individual => "( Individual )  Team",
                    RegistrationKind::Team => "  Individual  ( Team )",
                }
            ),
            Field::FirstName => format!("First name:  {}", reg.first_name),
            Field::LastName => format!("Last name:   {}", reg.last_name),
            Field::Email => format!("E-mail:      {}", reg.email),
            Field::Phone => format!("Phone:       {}", reg.phone),
            Field::JoinTeam => format!(
                "{} I agree to be placed in a team on site",
                Self::checkbox(reg.join_team)
            ),
            Field::TeamName => format!("Team name:   {}", reg.team_name),
            Field::MemberName(i) => format!(
                "  Member {} name:   {}",
                i + 1,
                reg.members.get(i).map(|m| m.name.as_str()).unwrap_or("")
            ),
            Field::MemberEmail(i) => format!(
                "  Member {} e-mail: {}",
                i + 1,
                reg.members.get(i).map(|m| m.email.as_str()).unwrap_or("")
            ),
            Field::AddMember => format!(
                "[+] Add team member ({} of {})",
                reg.members.len(),
                self.max_members
            ),
            Field::Challenge => format!(
                "Challenge: {}",
                match reg.challenge {
                    Some(c) => format!("#{c} of 3"),
                    None => "none selected".to_string(),
                }
            ),
            Field::Terms => format!(
                "{} I agree with the Terms and Conditions",
                Self::checkbox(reg.terms_accepted)
            ),
            Field::Submit => "[ Submit registration ]".to_string(),
        };

        let mut style = theme.text_style();
        if focused {
            style = theme.focused_style();
        }

        // Trailing cursor marker on the focused text input
        if focused && field.is_text_input() {
            return Line::from(vec![Span::styled(text, style), Span::styled("_", style)]);
        }
        Line::from(Span::styled(text, style))
    }
}

#[async_trait]
impl Component for RegistrationForm {
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        if self.completed {
            return Ok(());
        }

        let focused = self.focused_field();
        match event.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),

            KeyCode::Left | KeyCode::Right => match focused {
                Some(Field::Kind) => self.toggle_kind(),
                Some(Field::Challenge) => self.cycle_challenge(event.code == KeyCode::Right),
                _ => {}
            },

            KeyCode::Enter | KeyCode::Char(' ')
                if !matches!(focused, Some(f) if f.is_text_input()) =>
            {
                self.activate();
            }

            KeyCode::Delete => match focused {
                Some(Field::MemberName(i)) | Some(Field::MemberEmail(i)) => self.remove_member(i),
                _ => {}
            },

            KeyCode::Backspace => {
                if let Some(field) = focused {
                    if let Some(value) = self.text_value_mut(field) {
                        value.pop();
                    }
                }
            }

            KeyCode::Char(c) => match focused {
                Some(Field::Challenge) if ('1'..='3').contains(&c) => {
                    self.registration.challenge = Some(c as u8 - b'0');
                }
                Some(field) if field.is_text_input() => {
                    if let Some(value) = self.text_value_mut(field) {
                        value.push(c);
                    }
                }
                _ => {}
            },

            _ => {}
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.state.size = area;

        let fields = self.fields();
        let mut lines: Vec<Line> = Vec::new();
        let mut focused_line = 0usize;

        lines.push(Line::from(Span::styled(
            "Event registration",
            theme.title_style(),
        )));
        lines.push(Line::default());

        for (idx, field) in fields.iter().enumerate() {
            let focused = idx == self.focus;
            if focused {
                focused_line = lines.len();
            }
            lines.push(self.field_line(*field, focused, theme));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Tab/↑↓ move · Space/Enter toggle · Del remove member · Esc close",
            theme.muted_style(),
        )));

        // Keep the focused line inside the visible window
        let visible = area.height as usize;
        let scroll = focused_line.saturating_sub(visible.saturating_sub(2)) as u16;

        frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
    }

    fn has_focus(&self) -> bool {
        self.state.has_focus
    }

    fn set_focus(&mut self, focus: bool) {
        self.state.has_focus = focus;
    }
}
