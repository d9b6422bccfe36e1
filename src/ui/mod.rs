//! Terminal rendering of a [`ViewDocument`].
//!
//! The UI draws only what the document says: no state is read here, so a
//! frame is a pure function of (document, visible toast). Layout:
//!
//! - login: a centered dialog
//! - everything else: nav bar, scrolling body, key hints
//! - a toast, when one is live, overlays the bottom right corner

mod detail;
mod helpers;
mod home;
mod login;
mod management;
mod nav;
mod theme;
mod toast;

pub use helpers::{mask, truncate_to_width, Body};
pub use theme::severity_color;
pub use toast::toast_area;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::notifications::Toast;
use crate::view::{Screen, ViewDocument};
use theme::{COLOR_BORDER, COLOR_DIM};

const NAV_HEIGHT: u16 = 3;
const HINTS: &str = "Tab/↑↓ navegar  Enter ativar  Esc voltar  Ctrl+R recarregar  Ctrl+C sair";

/// Draw one frame.
pub fn render(frame: &mut Frame, document: &ViewDocument, toast: Option<&Toast>) {
    let area = frame.area();

    match &document.screen {
        Screen::Login(view) => login::render_login_screen(frame, area, document, view),
        screen => {
            let [nav_area, body_area, hints_area] = Layout::vertical([
                Constraint::Length(NAV_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .areas(area);

            if let Some(nav) = &document.nav {
                nav::render_nav_bar(frame, nav_area, document, nav);
            }

            let (title, body) = match screen {
                Screen::Home(view) => ("Operadoras", home::home_body(document, view)),
                Screen::OperadoraDetail(view) => {
                    (view.operator.as_str(), detail::detail_body(document, view))
                }
                Screen::Management(view) => (
                    "Gerenciar Corretores",
                    management::management_body(document, view),
                ),
                Screen::Login(_) => ("", Body::new()),
            };
            render_body(frame, body_area, title, body);

            frame.render_widget(
                Paragraph::new(Span::styled(HINTS, Style::default().fg(COLOR_DIM))),
                hints_area,
            );
        }
    }

    if let Some(toast) = toast {
        toast::render_toast(frame, area, toast);
    }
}

fn render_body(frame: &mut Frame, area: Rect, title: &str, body: Body) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" {} ", title));
    let scroll = body.scroll_for(block.inner(area).height);
    frame.render_widget(
        Paragraph::new(body.lines)
            .block(block)
            .scroll((scroll, 0)),
        area,
    );
}
