//! src/view/theme.rs
//! ============================================================================
//! # Catppuccin Mocha Theme Color Palette
//!
//! Color constants from the official Catppuccin theme specification:
//! https://github.com/catppuccin/catppuccin

use ratatui::style::{Color, Modifier, Style};

use toastr::ToastLevel;

pub const BACKGROUND: Color = Color::Rgb(30, 30, 46); // Base
pub const CURRENT_LINE: Color = Color::Rgb(69, 71, 90); // Surface1
pub const FOREGROUND: Color = Color::Rgb(205, 214, 244); // Text
pub const COMMENT: Color = Color::Rgb(127, 132, 156); // Overlay1
pub const CYAN: Color = Color::Rgb(137, 220, 235); // Sky
pub const GREEN: Color = Color::Rgb(166, 227, 161); // Green
pub const ORANGE: Color = Color::Rgb(250, 179, 135); // Peach
pub const PURPLE: Color = Color::Rgb(203, 166, 247); // Mauve
pub const RED: Color = Color::Rgb(243, 139, 168); // Red
pub const YELLOW: Color = Color::Rgb(249, 226, 175); // Yellow

pub fn panel_style() -> Style {
    Style::default().bg(BACKGROUND).fg(FOREGROUND)
}

pub fn panel_border_style() -> Style {
    Style::default().fg(PURPLE)
}

/// Mid-transition panels render dimmed; hidden ones as a faint outline.
pub fn panel_transition_style() -> Style {
    Style::default().fg(COMMENT).add_modifier(Modifier::DIM)
}

pub fn panel_hidden_style() -> Style {
    Style::default().fg(CURRENT_LINE)
}

pub fn status_bar_style() -> Style {
    Style::default().bg(CURRENT_LINE).fg(FOREGROUND)
}

pub fn status_hint_style() -> Style {
    Style::default().fg(COMMENT)
}

pub fn dispatch_known_style() -> Style {
    Style::default().fg(GREEN)
}

pub fn dispatch_fallback_style() -> Style {
    Style::default().fg(ORANGE)
}

pub fn toast_border_style(level: ToastLevel) -> Style {
    let color = match level {
        ToastLevel::Info => CYAN,
        ToastLevel::Success => GREEN,
        ToastLevel::Warning => YELLOW,
        ToastLevel::Error => RED,
    };

    Style::default().fg(color)
}

pub fn toast_body_style() -> Style {
    Style::default().bg(BACKGROUND).fg(FOREGROUND)
}

pub const fn toast_icon(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Info => "ℹ",
        ToastLevel::Success => "✓",
        ToastLevel::Warning => "⚠",
        ToastLevel::Error => "✗",
    }
}
