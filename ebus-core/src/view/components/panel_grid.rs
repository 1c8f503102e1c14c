//! src/view/components/panel_grid.rs
//!
//! Renders the scene's panels side by side with their live presentation
//! state, so transitions are observable while they run.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::scene::ScenePanel;
use crate::view::theme;

pub struct PanelGrid;

impl PanelGrid {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, panels: &[ScenePanel], area: Rect) {
        if panels.is_empty() {
            let empty = Paragraph::new("no panels on stage")
                .style(theme::panel_hidden_style())
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let constraints: Vec<Constraint> = panels
            .iter()
            .map(|_| Constraint::Ratio(1, panels.len() as u32))
            .collect();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (panel, chunk) in panels.iter().zip(chunks.iter()) {
            self.render_panel(frame, panel, *chunk);
        }
    }

    fn render_panel(&self, frame: &mut Frame<'_>, panel: &ScenePanel, area: Rect) {
        let presentation = panel.presentation;

        let (state, style) = if !presentation.display {
            ("hidden", theme::panel_hidden_style())
        } else if presentation.opacity < 1.0 {
            ("in transition", theme::panel_transition_style())
        } else {
            ("visible", theme::panel_style())
        };

        let body = format!(
            "{state}\nopacity {:.1}  scale {:.1}\n[{}]",
            presentation.opacity, presentation.scale, panel.id
        );

        let block = Block::default()
            .title(panel.label.as_str())
            .borders(Borders::ALL)
            .border_style(theme::panel_border_style());

        let paragraph = Paragraph::new(body)
            .style(style)
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(paragraph, area);
    }
}

impl Default for PanelGrid {
    fn default() -> Self {
        Self::new()
    }
}
