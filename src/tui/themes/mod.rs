//! Theming for the hackreg TUI
//!
//! A single semantic palette shared by every component. Colors carry the
//! role (text, border, status) rather than a concrete hue, so swapping the
//! palette restyles the whole page.

use ratatui::style::{Color, Modifier, Style};

/// Theme represents a complete visual style configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Primary brand colors
    pub primary: Color,
    pub secondary: Color,

    // Background colors
    pub bg_base: Color,
    pub bg_overlay: Color,
    pub surface: Color,

    // Foreground colors
    pub text: Color,
    pub text_muted: Color,

    // Border colors
    pub border: Color,
    pub border_focus: Color,

    // Status colors
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Default dark palette
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            primary: Color::Rgb(0x7c, 0x3a, 0xed),
            secondary: Color::Rgb(0x06, 0xb6, 0xd4),
            bg_base: Color::Rgb(0x12, 0x12, 0x18),
            bg_overlay: Color::Rgb(0x1c, 0x1c, 0x26),
            surface: Color::Rgb(0x26, 0x26, 0x33),
            text: Color::Rgb(0xe6, 0xe6, 0xf0),
            text_muted: Color::Rgb(0x8a, 0x8a, 0x9e),
            border: Color::Rgb(0x3f, 0x3f, 0x52),
            border_focus: Color::Rgb(0x7c, 0x3a, 0xed),
            success: Color::Rgb(0x28, 0xa7, 0x45),
            error: Color::Rgb(0xdc, 0x35, 0x45),
            warning: Color::Rgb(0xff, 0xc1, 0x07),
            info: Color::Rgb(0x17, 0xa2, 0xb8),
        }
    }

    /// Style for regular body text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for secondary/help text
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for a focused interactive element
    pub fn focused_style(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for section titles
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }
}
