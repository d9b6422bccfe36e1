use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::helpers::{button, centered_rect, focused, input_line};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::state::FormField;
use crate::view::{LoginView, UiAction, ViewDocument};

const DIALOG_WIDTH: u16 = 56;
const DIALOG_HEIGHT: u16 = 13;

pub fn render_login_screen(frame: &mut Frame, area: Rect, document: &ViewDocument, login: &LoginView) {
    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer_block, area);

    let dialog_area = centered_rect(area.inner(Margin::new(1, 1)), DIALOG_WIDTH, DIALOG_HEIGHT);
    let dialog_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Line::from(format!(" {} ", login.title)).centered());

    let lines = vec![
        Line::from(Span::styled(
            login.title.clone(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            login.subtitle.clone(),
            Style::default().fg(COLOR_DIM),
        ))
        .centered(),
        Line::default(),
        input_line(
            FormField::LoginEmail,
            &login.email,
            focused(document, &UiAction::Edit(FormField::LoginEmail)),
        ),
        input_line(
            FormField::LoginSenha,
            &login.senha,
            focused(document, &UiAction::Edit(FormField::LoginSenha)),
        ),
        Line::default(),
        button("Entrar", focused(document, &UiAction::SubmitLogin)),
        Line::default(),
        Line::from(Span::styled(
            login.hint.clone(),
            Style::default().fg(COLOR_DIM),
        )),
    ];

    let para = Paragraph::new(lines)
        .block(dialog_block)
        .wrap(Wrap { trim: false });
    frame.render_widget(para, dialog_area);
}
