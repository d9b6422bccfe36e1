//! Notification overlay, bottom right.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::theme::{severity_color, COLOR_TOAST_BG};
use crate::notifications::Toast;

const MAX_WIDTH: u16 = 48;

/// Where the toast lands inside `area`.
pub fn toast_area(area: Rect, message: &str) -> Rect {
    let width = (message.width() as u16 + 4).clamp(12, MAX_WIDTH).min(area.width);
    let inner = width.saturating_sub(4).max(1) as usize;
    let rows = message.width().div_ceil(inner).max(1) as u16;
    let height = (rows + 2).min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    }
}

pub fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let color = severity_color(toast.severity);
    let rect = toast_area(area, &toast.message);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(COLOR_TOAST_BG));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Span::styled(toast.message.clone(), Style::default().fg(color)))
            .block(block)
            .wrap(Wrap { trim: true }),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_sits_in_the_corner() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = toast_area(area, "FAQ removida.");
        assert_eq!(rect.x + rect.width, 80);
        assert_eq!(rect.y + rect.height, 24);
        assert_eq!(rect.height, 3);
    }

    #[test]
    fn test_long_message_wraps() {
        let area = Rect::new(0, 0, 80, 24);
        let message = "x".repeat(100);
        let rect = toast_area(area, &message);
        assert_eq!(rect.width, MAX_WIDTH);
        assert!(rect.height > 3);
    }

    #[test]
    fn test_tiny_terminal() {
        let area = Rect::new(0, 0, 8, 2);
        let rect = toast_area(area, "Corretor removido.");
        assert!(rect.width <= 8);
        assert!(rect.height <= 2);
    }
}
