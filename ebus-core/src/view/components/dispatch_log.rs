//! src/view/components/dispatch_log.rs
//!
//! Scrolling record of the events the demo page has raised, flagging which
//! ones fell through to the fallback path.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use compact_str::CompactString;
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, List, ListItem},
};

use crate::controller::payload::EventPayload;
use crate::view::theme;

/// One raised event, as the page saw it.
#[derive(Debug, Clone)]
pub struct DispatchRecord {
    pub at: DateTime<Utc>,
    pub name: CompactString,
    pub payload: EventPayload,
    pub known: bool,
}

pub struct DispatchLog;

impl DispatchLog {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, records: &VecDeque<DispatchRecord>, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;

        let items: Vec<ListItem<'_>> = records
            .iter()
            .rev()
            .take(visible)
            .map(|record| {
                let style = if record.known {
                    theme::dispatch_known_style()
                } else {
                    theme::dispatch_fallback_style()
                };

                let marker = if record.known { " " } else { "?" };
                let line = format!(
                    "{} {marker} {}  {}",
                    record.at.format("%H:%M:%S"),
                    record.name,
                    record.payload,
                );

                ListItem::new(Line::styled(line, style))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" dispatched events ")
                .borders(Borders::ALL)
                .border_style(theme::panel_border_style()),
        );

        frame.render_widget(list, area);
    }
}

impl Default for DispatchLog {
    fn default() -> Self {
        Self::new()
    }
}
