//! src/view/components/toast_overlay.rs
//!
//! Stacks live toasts in the top-right corner, newest at the bottom,
//! clipped to the available height.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use toastr::Toast;

use crate::view::theme;

const TOAST_WIDTH: u16 = 36;
const TOAST_HEIGHT: u16 = 4;

pub struct ToastOverlay;

impl ToastOverlay {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, toasts: &[Toast], area: Rect) {
        if toasts.is_empty() {
            return;
        }

        let width = TOAST_WIDTH.min(area.width);
        let x = area.right().saturating_sub(width + 1);
        let mut y = area.top() + 1;

        for toast in toasts {
            if y + TOAST_HEIGHT > area.bottom() {
                break;
            }

            let slot = Rect::new(x, y, width, TOAST_HEIGHT);
            self.render_toast(frame, toast, slot);
            y += TOAST_HEIGHT;
        }
    }

    fn render_toast(&self, frame: &mut Frame<'_>, toast: &Toast, area: Rect) {
        let title = format!(
            " {} {} ",
            theme::toast_icon(toast.level),
            toast.title.as_str()
        );

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(theme::toast_border_style(toast.level));

        let body = Paragraph::new(toast.body.as_str())
            .style(theme::toast_body_style())
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(Clear, area);
        frame.render_widget(body, area);
    }
}

impl Default for ToastOverlay {
    fn default() -> Self {
        Self::new()
    }
}
