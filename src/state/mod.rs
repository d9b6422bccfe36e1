//! Application state.
//!
//! - [`AppState`] - the session's single source of truth
//! - [`StatePatch`] - a partial update merged by whole-field replacement
//! - [`StateContainer`] - owns the state; every change re-projects and re-renders

mod container;
mod patch;

pub use container::StateContainer;
pub use patch::StatePatch;

use crate::models::{Account, FaqMap, MaterialMap};

/// Navigation target.
///
/// `OperadoraDetail` is entered by selecting an operator; a non-empty
/// `selected` wins over the current view when projecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrentView {
    #[default]
    Home,
    OperadoraDetail,
    GerenciamentoCorretores,
}

/// Text inputs whose raw contents live in the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    LoginEmail,
    LoginSenha,
    Query,
    NewNome,
    NewEmail,
    NewSenha,
    FaqPergunta,
    FaqResposta,
    MaterialDescription,
    MaterialLink,
}

impl FormField {
    /// Placeholder shown while the field is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::LoginEmail => "Email",
            FormField::LoginSenha => "Senha",
            FormField::Query => "Buscar por operadora...",
            FormField::NewNome => "Nome Completo",
            FormField::NewEmail => "Email",
            FormField::NewSenha => "Senha",
            FormField::FaqPergunta => "Pergunta",
            FormField::FaqResposta => "Resposta",
            FormField::MaterialDescription => "Descrição (ex: Tabela de Vidas Junho)",
            FormField::MaterialLink => "Link (ex: drive.google.com/doc/abc...)",
        }
    }

    /// Password fields are masked when drawn.
    pub fn is_secret(&self) -> bool {
        matches!(self, FormField::LoginSenha | FormField::NewSenha)
    }

    /// A patch that sets this field to `value`.
    pub fn patch(&self, value: impl Into<String>) -> StatePatch {
        let value = value.into();
        let patch = StatePatch::new();
        match self {
            FormField::LoginEmail => patch.login_email(value),
            FormField::LoginSenha => patch.login_senha(value),
            FormField::Query => patch.query(value),
            FormField::NewNome => patch.new_nome(value),
            FormField::NewEmail => patch.new_email(value),
            FormField::NewSenha => patch.new_senha(value),
            FormField::FaqPergunta => patch.new_faq_pergunta(value),
            FormField::FaqResposta => patch.new_faq_resposta(value),
            FormField::MaterialDescription => patch.new_material_description(value),
            FormField::MaterialLink => patch.new_material_link(value),
        }
    }
}

/// Everything the panel knows during a session. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Last loaded account documents
    pub accounts: Vec<Account>,
    /// Signed-in account
    pub current_user: Option<Account>,
    pub current_view: CurrentView,
    /// Operator shown in the detail view
    pub selected: Option<String>,
    /// Home search text
    pub query: String,
    /// Last loaded FAQs
    pub faqs: FaqMap,
    /// Last loaded materials
    pub materiais: MaterialMap,
    /// Whether a reload has completed since sign-in
    pub data_loaded: bool,

    // Form echoes
    pub login_email: String,
    pub login_senha: String,
    pub new_nome: String,
    pub new_email: String,
    pub new_senha: String,
    pub new_faq_pergunta: String,
    pub new_faq_resposta: String,
    pub new_material_description: String,
    pub new_material_link: String,

    /// Index of the focused control in the current view document
    pub focus: usize,
}

impl AppState {
    /// Current text of a form field.
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::LoginEmail => &self.login_email,
            FormField::LoginSenha => &self.login_senha,
            FormField::Query => &self.query,
            FormField::NewNome => &self.new_nome,
            FormField::NewEmail => &self.new_email,
            FormField::NewSenha => &self.new_senha,
            FormField::FaqPergunta => &self.new_faq_pergunta,
            FormField::FaqResposta => &self.new_faq_resposta,
            FormField::MaterialDescription => &self.new_material_description,
            FormField::MaterialLink => &self.new_material_link,
        }
    }

    /// Whether the signed-in account has the administrative role.
    pub fn is_admin(&self) -> bool {
        self.current_user
            .as_ref()
            .map(|u| u.is_admin())
            .unwrap_or(false)
    }

    pub fn is_signed_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// Loaded account with this email.
    pub fn account_by_email(&self, email: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.email == email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewAccount, Role};

    #[test]
    fn test_default_state_is_anonymous_home() {
        let state = AppState::default();
        assert!(state.current_user.is_none());
        assert_eq!(state.current_view, CurrentView::Home);
        assert!(state.selected.is_none());
        assert!(!state.data_loaded);
        assert!(!state.is_admin());
    }

    #[test]
    fn test_field_patch_round_trip() {
        let fields = [
            FormField::LoginEmail,
            FormField::LoginSenha,
            FormField::Query,
            FormField::NewNome,
            FormField::NewEmail,
            FormField::NewSenha,
            FormField::FaqPergunta,
            FormField::FaqResposta,
            FormField::MaterialDescription,
            FormField::MaterialLink,
        ];
        for field in fields {
            let mut state = AppState::default();
            field.patch("abc").apply(&mut state);
            assert_eq!(state.field(field), "abc", "{:?}", field);
        }
    }

    #[test]
    fn test_is_admin_follows_role() {
        let mut state = AppState::default();
        let mut account = NewAccount::corretor("Ana", "ana@x.com", "pw").with_id("1");
        state.current_user = Some(account.clone());
        assert!(!state.is_admin());

        account.role = Role::Assistente;
        state.current_user = Some(account);
        assert!(state.is_admin());
    }

    #[test]
    fn test_secret_fields() {
        assert!(FormField::LoginSenha.is_secret());
        assert!(FormField::NewSenha.is_secret());
        assert!(!FormField::LoginEmail.is_secret());
    }
}
