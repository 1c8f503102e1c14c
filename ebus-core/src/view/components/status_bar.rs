//! src/view/components/status_bar.rs
//!
//! Route, registry size and key hints on one line.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
};

use crate::view::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, route: &str, handler_count: usize, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(24), Constraint::Min(10)])
            .split(area);

        let left = format!(" route {route} | handlers {handler_count}");
        frame.render_widget(
            Paragraph::new(Line::raw(left)).style(theme::status_bar_style()),
            chunks[0],
        );

        let hints = "b button  f form  c card  1-3 toggle  n navigate  x unknown  r reset  q quit ";
        frame.render_widget(
            Paragraph::new(Line::raw(hints))
                .style(theme::status_hint_style())
                .right_aligned(),
            chunks[1],
        );
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
