//! View projection.
//!
//! [`project`] is a pure function from [`AppState`] to a [`ViewDocument`].
//! It is re-run after every state change; nothing is patched incrementally.
//!
//! Rules, in priority order:
//! 1. No signed-in account: only the login screen.
//! 2. An operator is selected: hero + detail view, whatever `current_view` says.
//! 3. `Home`: hero + operator grid filtered by the query.
//! 4. `GerenciamentoCorretores`: the account manager, administrators only.

mod document;

pub use document::{
    AccountForm, AccountRow, Control, DetailView, FaqForm, HeroView, HomeView, LoginView,
    ManagementView, MaterialForm, NavBar, OperatorCard, Screen, UiAction, ViewDocument,
};

use crate::models::{filter_operators, Account, Role, OPERADORAS};
use crate::state::{AppState, CurrentView, FormField};

pub const PANEL_TITLE: &str = "Painel Affinity";

/// Project the state using the built-in operator list.
pub fn project(state: &AppState) -> ViewDocument {
    project_with(state, OPERADORAS)
}

/// Project the state against an explicit operator list.
pub fn project_with(state: &AppState, operators: &[&str]) -> ViewDocument {
    let mut controls = Vec::new();

    let (nav, screen) = match &state.current_user {
        None => (None, Screen::Login(login_view(state, &mut controls))),
        Some(user) => {
            let nav = nav_bar(user, &mut controls);
            let screen = if state.current_view == CurrentView::Home || state.selected.is_some() {
                let hero = hero_view(state, &mut controls);
                match &state.selected {
                    Some(operator) => Screen::OperadoraDetail(detail_view(
                        state,
                        user,
                        operator,
                        hero,
                        &mut controls,
                    )),
                    None => Screen::Home(home_view(state, operators, hero, &mut controls)),
                }
            } else if state.current_view == CurrentView::GerenciamentoCorretores && user.is_admin()
            {
                Screen::Management(management_view(state, &mut controls))
            } else {
                // Detail without a selection, or a manager view for a
                // non-administrator: fall back to the grid.
                let hero = hero_view(state, &mut controls);
                Screen::Home(home_view(state, operators, hero, &mut controls))
            };
            (Some(nav), screen)
        }
    };

    let focus = if controls.is_empty() {
        None
    } else {
        Some(state.focus.min(controls.len() - 1))
    };

    ViewDocument {
        nav,
        screen,
        controls,
        focus,
    }
}

fn login_view(state: &AppState, controls: &mut Vec<Control>) -> LoginView {
    controls.push(Control::input(FormField::LoginEmail));
    controls.push(Control::input(FormField::LoginSenha));
    controls.push(Control::new("Entrar", UiAction::SubmitLogin));

    LoginView {
        title: "Painel Affinity ABC".to_string(),
        subtitle: "Acesso para Corretores e Assistentes".to_string(),
        email: state.login_email.clone(),
        senha: state.login_senha.clone(),
        hint: "Utilize seu email e senha cadastrados para acessar.".to_string(),
    }
}

fn nav_bar(user: &Account, controls: &mut Vec<Control>) -> NavBar {
    controls.push(Control::new(PANEL_TITLE, UiAction::GoHome));
    let show_management = user.role == Role::Assistente;
    if show_management {
        controls.push(Control::new("Gerenciar Corretores", UiAction::OpenManagement));
    }
    controls.push(Control::new("Sair", UiAction::Logout));

    NavBar {
        title: PANEL_TITLE.to_string(),
        greeting: format!("Olá, {} ({})", user.first_name(), user.role),
        show_management,
    }
}

fn hero_view(state: &AppState, controls: &mut Vec<Control>) -> HeroView {
    controls.push(Control::input(FormField::Query));
    controls.push(Control::new("Limpar", UiAction::ClearSearch));

    HeroView {
        title: "Materiais e FAQs".to_string(),
        subtitle: "Consulte materiais de apoio e respostas rápidas por operadora.".to_string(),
        query: state.query.clone(),
    }
}

fn home_view(
    state: &AppState,
    operators: &[&str],
    hero: HeroView,
    controls: &mut Vec<Control>,
) -> HomeView {
    let cards: Vec<OperatorCard> = filter_operators(operators, &state.query)
        .into_iter()
        .map(|name| OperatorCard {
            name: name.to_string(),
            faq_count: state.faqs.get(name).map(Vec::len).unwrap_or(0),
            material_count: state.materiais.get(name).map(Vec::len).unwrap_or(0),
        })
        .collect();

    for card in &cards {
        controls.push(Control::new(
            card.name.clone(),
            UiAction::SelectOperator(card.name.clone()),
        ));
    }

    let empty_message = if cards.is_empty() && !state.query.is_empty() {
        Some(format!(
            "Nenhuma operadora encontrada com o termo \"{}\".",
            state.query
        ))
    } else {
        None
    };

    HomeView {
        hero,
        cards,
        empty_message,
    }
}

fn detail_view(
    state: &AppState,
    user: &Account,
    operator: &str,
    hero: HeroView,
    controls: &mut Vec<Control>,
) -> DetailView {
    let faqs = state.faqs.get(operator).cloned().unwrap_or_default();
    let materiais = state.materiais.get(operator).cloned().unwrap_or_default();
    let can_edit = user.is_admin();

    controls.push(Control::new("Voltar para a lista", UiAction::BackToList));

    if can_edit {
        for index in 0..faqs.len() {
            controls.push(Control::new(
                "Remover",
                UiAction::RemoveFaq {
                    operator: operator.to_string(),
                    index,
                },
            ));
        }
        controls.push(Control::input(FormField::FaqPergunta));
        controls.push(Control::input(FormField::FaqResposta));
        controls.push(Control::new(
            "Adicionar FAQ",
            UiAction::AddFaq {
                operator: operator.to_string(),
            },
        ));
    }

    for (index, material) in materiais.iter().enumerate() {
        controls.push(Control::new(
            material.description.clone(),
            UiAction::OpenLink {
                url: material.link.clone(),
            },
        ));
        if can_edit {
            controls.push(Control::new(
                "Remover",
                UiAction::RemoveMaterial {
                    operator: operator.to_string(),
                    index,
                },
            ));
        }
    }

    if can_edit {
        controls.push(Control::input(FormField::MaterialDescription));
        controls.push(Control::input(FormField::MaterialLink));
        controls.push(Control::new(
            "Adicionar Material",
            UiAction::AddMaterial {
                operator: operator.to_string(),
            },
        ));
    }

    DetailView {
        hero,
        operator: operator.to_string(),
        faqs,
        materiais,
        can_edit,
        faq_form: can_edit.then(|| FaqForm {
            pergunta: state.new_faq_pergunta.clone(),
            resposta: state.new_faq_resposta.clone(),
        }),
        material_form: can_edit.then(|| MaterialForm {
            description: state.new_material_description.clone(),
            link: state.new_material_link.clone(),
        }),
    }
}

fn management_view(state: &AppState, controls: &mut Vec<Control>) -> ManagementView {
    controls.push(Control::input(FormField::NewNome));
    controls.push(Control::input(FormField::NewEmail));
    controls.push(Control::input(FormField::NewSenha));
    controls.push(Control::new("Cadastrar", UiAction::CreateAccount));

    let corretores: Vec<AccountRow> = state
        .accounts
        .iter()
        .filter(|a| a.role == Role::Corretor)
        .map(|a| AccountRow {
            nome: a.nome.clone(),
            email: a.email.clone(),
        })
        .collect();

    for row in &corretores {
        controls.push(Control::new(
            "Remover",
            UiAction::DeleteAccount {
                email: row.email.clone(),
            },
        ));
    }

    ManagementView {
        form: AccountForm {
            nome: state.new_nome.clone(),
            email: state.new_email.clone(),
            senha: state.new_senha.clone(),
        },
        corretores,
    }
}
