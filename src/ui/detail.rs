//! Operator detail: FAQs, support materials and, for administrators, the
//! forms that add to them.

use ratatui::prelude::*;

use super::helpers::{button, focused, input_line, marker, nth_focused, truncate_to_width, Body};
use super::home::push_hero;
use super::theme::{COLOR_ACCENT, COLOR_DANGER, COLOR_DIM, COLOR_HEADER};
use crate::state::FormField;
use crate::view::{DetailView, UiAction, ViewDocument};

const LINK_PREVIEW_WIDTH: usize = 48;

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

fn remove_button(focused: bool) -> Line<'static> {
    let mut style = Style::default().fg(COLOR_DANGER);
    if focused {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    Line::from(vec![marker(focused), Span::styled("Remover", style)])
}

fn push_input(body: &mut Body, document: &ViewDocument, field: FormField, value: &str) {
    let is_focused = focused(document, &UiAction::Edit(field));
    body.push_control(input_line(field, value, is_focused), is_focused);
}

fn push_button(body: &mut Body, label: &str, is_focused: bool) {
    body.push_control(button(label, is_focused), is_focused);
}

pub fn detail_body(document: &ViewDocument, detail: &DetailView) -> Body {
    let mut body = Body::new();
    let op = detail.operator.as_str();
    push_hero(&mut body, document, &detail.hero);

    push_button(
        &mut body,
        "← Voltar para a lista",
        focused(document, &UiAction::BackToList),
    );
    body.blank();
    body.push(Line::from(Span::styled(
        format!("{} - Detalhes", op),
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    )));
    body.blank();

    // FAQs
    body.push(section("Perguntas Frequentes (FAQs)"));
    if detail.faqs.is_empty() {
        body.push(Line::from(Span::styled(
            format!("Nenhuma FAQ cadastrada para {}.", op),
            Style::default().fg(COLOR_DIM),
        )));
    }
    for (index, faq) in detail.faqs.iter().enumerate() {
        body.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                faq.pergunta.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        body.push(Line::from(vec![Span::raw("  "), Span::raw(faq.resposta.clone())]));
        if detail.can_edit {
            let remove = UiAction::RemoveFaq {
                operator: op.to_string(),
                index,
            };
            let is_focused = focused(document, &remove);
            body.push_control(remove_button(is_focused), is_focused);
        }
    }
    if let Some(form) = &detail.faq_form {
        body.blank();
        body.push(Line::from(Span::styled(
            "Adicionar Novo FAQ",
            Style::default().fg(COLOR_DIM),
        )));
        push_input(&mut body, document, FormField::FaqPergunta, &form.pergunta);
        push_input(&mut body, document, FormField::FaqResposta, &form.resposta);
        push_button(
            &mut body,
            "Adicionar FAQ",
            focused(
                document,
                &UiAction::AddFaq {
                    operator: op.to_string(),
                },
            ),
        );
    }
    body.blank();

    // Materials
    body.push(section("Materiais de Apoio"));
    if detail.materiais.is_empty() {
        body.push(Line::from(Span::styled(
            format!("Nenhum material de apoio cadastrado para {}.", op),
            Style::default().fg(COLOR_DIM),
        )));
    }
    for (index, material) in detail.materiais.iter().enumerate() {
        let link_focused = nth_focused(
            document,
            |a| matches!(a, UiAction::OpenLink { .. }),
            index,
        );
        let mut style = Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::UNDERLINED);
        if link_focused {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        body.push_control(
            Line::from(vec![
                marker(link_focused),
                Span::styled(material.description.clone(), style),
                Span::raw("  "),
                Span::styled(
                    truncate_to_width(&material.link, LINK_PREVIEW_WIDTH),
                    Style::default().fg(COLOR_DIM),
                ),
            ]),
            link_focused,
        );
        if detail.can_edit {
            let remove = UiAction::RemoveMaterial {
                operator: op.to_string(),
                index,
            };
            let is_focused = focused(document, &remove);
            body.push_control(remove_button(is_focused), is_focused);
        }
    }
    if let Some(form) = &detail.material_form {
        body.blank();
        body.push(Line::from(Span::styled(
            "Adicionar Novo Material",
            Style::default().fg(COLOR_DIM),
        )));
        push_input(
            &mut body,
            document,
            FormField::MaterialDescription,
            &form.description,
        );
        push_input(&mut body, document, FormField::MaterialLink, &form.link);
        push_button(
            &mut body,
            "Adicionar Material",
            focused(
                document,
                &UiAction::AddMaterial {
                    operator: op.to_string(),
                },
            ),
        );
    }

    body
}
