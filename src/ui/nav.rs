//! Top navigation bar.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{control_style, focused};
use super::theme::{COLOR_BORDER, COLOR_DIM};
use crate::view::{NavBar, UiAction, ViewDocument};

pub fn render_nav_bar(frame: &mut Frame, area: Rect, document: &ViewDocument, nav: &NavBar) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    frame.render_widget(Paragraph::new(nav_line(document, nav)).block(block), area);
}

fn nav_line(document: &ViewDocument, nav: &NavBar) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(" {} ", nav.title),
        control_style(focused(document, &UiAction::GoHome)),
    )];

    if nav.show_management {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            " Gerenciar Corretores ",
            control_style(focused(document, &UiAction::OpenManagement)),
        ));
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        nav.greeting.clone(),
        Style::default().fg(COLOR_DIM),
    ));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        " Sair ",
        control_style(focused(document, &UiAction::Logout)),
    ));

    Line::from(spans)
}
