//! Search header and operator grid.

use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

use super::helpers::{button, focused, input_line, marker, Body};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_WARNING};
use crate::state::FormField;
use crate::view::{HeroView, HomeView, UiAction, ViewDocument};

/// Title, subtitle, search input and the clear button.
pub fn push_hero(body: &mut Body, document: &ViewDocument, hero: &HeroView) {
    body.push(Line::from(Span::styled(
        hero.title.clone(),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )));
    body.push(Line::from(Span::styled(
        hero.subtitle.clone(),
        Style::default().fg(COLOR_DIM),
    )));
    body.blank();
    let query_focused = focused(document, &UiAction::Edit(FormField::Query));
    body.push_control(
        input_line(FormField::Query, &hero.query, query_focused),
        query_focused,
    );
    let clear_focused = focused(document, &UiAction::ClearSearch);
    body.push_control(button("Limpar", clear_focused), clear_focused);
    body.blank();
}

pub fn home_body(document: &ViewDocument, home: &HomeView) -> Body {
    let mut body = Body::new();
    push_hero(&mut body, document, &home.hero);

    let name_width = home
        .cards
        .iter()
        .map(|c| c.name.width())
        .max()
        .unwrap_or(0);

    for card in &home.cards {
        let card_focused = focused(document, &UiAction::SelectOperator(card.name.clone()));
        let mut name_style = Style::default().fg(COLOR_ACCENT);
        if card_focused {
            name_style = name_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        let padding = " ".repeat(name_width.saturating_sub(card.name.width()) + 2);
        body.push_control(
            Line::from(vec![
                marker(card_focused),
                Span::styled(card.name.clone(), name_style),
                Span::raw(padding),
                Span::styled(card.summary(), Style::default().fg(COLOR_DIM)),
            ]),
            card_focused,
        );
    }

    if let Some(message) = &home.empty_message {
        body.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(COLOR_WARNING),
        )));
    }

    body
}
