//! src/view/ui.rs
//!
//! Frame layout: panel grid on top, dispatch log beneath, status line at
//! the bottom, toasts overlaid in the top-right corner.

use std::collections::VecDeque;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use toastr::Toast;

use crate::model::scene::ScenePanel;
use crate::view::components::{
    dispatch_log::{DispatchLog, DispatchRecord},
    panel_grid::PanelGrid,
    status_bar::StatusBar,
    toast_overlay::ToastOverlay,
};

pub struct UIRenderer {
    panel_grid: PanelGrid,
    dispatch_log: DispatchLog,
    status_bar: StatusBar,
    toast_overlay: ToastOverlay,
}

impl UIRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            panel_grid: PanelGrid::new(),
            dispatch_log: DispatchLog::new(),
            status_bar: StatusBar::new(),
            toast_overlay: ToastOverlay::new(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        panels: &[ScenePanel],
        toasts: &[Toast],
        records: &VecDeque<DispatchRecord>,
        route: &str,
        handler_count: usize,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(10),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.panel_grid.render(frame, panels, chunks[0]);
        self.dispatch_log.render(frame, records, chunks[1]);
        self.status_bar
            .render(frame, route, handler_count, chunks[2]);

        // Toasts float over the whole frame.
        self.toast_overlay.render(frame, toasts, frame.area());
    }
}

impl Default for UIRenderer {
    fn default() -> Self {
        Self::new()
    }
}
