//! Shared fixtures for the integration tests.
//!
//! ```ignore
//! mod common;
//! use common::TestPanel;
//!
//! let t = TestPanel::with_admin().await;
//! t.panel.select_operator("Amil");
//! ```

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use ratatui::{backend::TestBackend, Terminal};

use painel::adapters::InMemoryBackend;
use painel::app::Panel;
use painel::models::{Account, NewAccount, Role, PROTECTED_ACCOUNT_EMAIL};
use painel::notifications::{RecordingSink, Toast};
use painel::state::{AppState, StateContainer};
use painel::traits::RecordingRenderer;
use painel::ui;
use painel::view::{project, ViewDocument};

pub const ADMIN_PASSWORD: &str = "admin123";

pub fn admin_account() -> NewAccount {
    NewAccount {
        nome: "Assistente Principal".to_string(),
        email: PROTECTED_ACCOUNT_EMAIL.to_string(),
        senha: ADMIN_PASSWORD.to_string(),
        role: Role::Assistente,
    }
}

pub fn broker_account(nome: &str, email: &str) -> NewAccount {
    NewAccount::corretor(nome, email, "corretor123")
}

/// A panel over an in-memory backend with every collaborator observable.
pub struct TestPanel {
    pub panel: Panel,
    pub backend: InMemoryBackend,
    pub sink: Arc<RecordingSink>,
    pub renderer: Arc<RecordingRenderer>,
    pub opened: Arc<Mutex<Vec<String>>>,
}

impl TestPanel {
    pub fn new(backend: InMemoryBackend) -> Self {
        let sink = Arc::new(RecordingSink::new());
        let renderer = Arc::new(RecordingRenderer::new());
        let opened = Arc::new(Mutex::new(Vec::new()));
        let store = Arc::new(StateContainer::new(renderer.clone()));
        let log = opened.clone();
        let panel = Panel::new(store, Arc::new(backend.clone()), sink.clone()).with_link_opener(
            Arc::new(move |url: &str| {
                log.lock().unwrap().push(url.to_string());
                Ok(())
            }),
        );
        Self {
            panel,
            backend,
            sink,
            renderer,
            opened,
        }
    }

    /// Signed in as the administrator, with the sink and call log cleared.
    pub async fn with_admin() -> Self {
        Self::signed_in(admin_account()).await
    }

    /// Signed in as a broker.
    pub async fn with_broker() -> Self {
        Self::signed_in(broker_account("Carla Souza", "carla@x.com")).await
    }

    async fn signed_in(account: NewAccount) -> Self {
        let backend = InMemoryBackend::new();
        let (email, senha) = (account.email.clone(), account.senha.clone());
        if account.role == Role::Corretor {
            backend.seed_account(admin_account());
        }
        backend.seed_account(account);
        let t = Self::new(backend);
        t.panel.login(&email, &senha).await.expect("login");
        t.sink.clear();
        t.backend.clear_calls();
        t
    }

    pub fn user(&self) -> Option<Account> {
        self.panel.state().current_user
    }

    pub fn last_message(&self) -> Option<String> {
        self.sink.last_message()
    }
}

/// Project `state` and draw it on a `width` x `height` test terminal.
pub fn draw_state(state: &AppState, width: u16, height: u16) -> String {
    draw_document(&project(state), None, width, height)
}

/// Draw `document` and return the screen as text, one row per line.
pub fn draw_document(
    document: &ViewDocument,
    toast: Option<&Toast>,
    width: u16,
    height: u16,
) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| ui::render(frame, document, toast))
        .unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
