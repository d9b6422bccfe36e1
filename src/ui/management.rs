//! Broker account manager.

use ratatui::prelude::*;

use super::helpers::{button, focused, input_line, marker, Body};
use super::theme::{COLOR_DANGER, COLOR_DIM, COLOR_HEADER};
use crate::state::FormField;
use crate::view::{ManagementView, UiAction, ViewDocument};

pub fn management_body(document: &ViewDocument, manager: &ManagementView) -> Body {
    let mut body = Body::new();
    let heading = Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD);

    body.push(Line::from(Span::styled("Gerenciamento de Corretores", heading)));
    body.blank();
    body.push(Line::from(Span::styled("Cadastrar Novo Corretor", heading)));

    let form = &manager.form;
    for (field, value) in [
        (FormField::NewNome, &form.nome),
        (FormField::NewEmail, &form.email),
        (FormField::NewSenha, &form.senha),
    ] {
        let is_focused = focused(document, &UiAction::Edit(field));
        body.push_control(input_line(field, value, is_focused), is_focused);
    }
    let submit = focused(document, &UiAction::CreateAccount);
    body.push_control(button("Cadastrar", submit), submit);
    body.blank();

    body.push(Line::from(Span::styled(
        format!("Corretores Cadastrados ({})", manager.corretores.len()),
        heading,
    )));
    if manager.corretores.is_empty() {
        body.push(Line::from(Span::styled(
            "Nenhum corretor cadastrado ainda.",
            Style::default().fg(COLOR_DIM),
        )));
    }
    for row in &manager.corretores {
        let is_focused = focused(
            document,
            &UiAction::DeleteAccount {
                email: row.email.clone(),
            },
        );
        let mut remove = Style::default().fg(COLOR_DANGER);
        if is_focused {
            remove = remove.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        body.push_control(
            Line::from(vec![
                marker(is_focused),
                Span::styled(row.nome.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(row.email.clone(), Style::default().fg(COLOR_DIM)),
                Span::raw("  "),
                Span::styled("Remover", remove),
            ]),
            is_focused,
        );
    }

    body
}
