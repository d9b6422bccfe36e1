//! Declarative view description.
//!
//! A `ViewDocument` is everything a front end needs to draw one frame and
//! to bind input: the screen data plus the ordered list of [`Control`]s.
//! Nothing in it refers to a concrete terminal or widget.

use crate::models::{FaqEntry, MaterialEntry};
use crate::state::FormField;

/// What activating a control does.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UiAction {
    /// Text input bound to a state field
    Edit(FormField),
    SubmitLogin,
    Logout,
    GoHome,
    OpenManagement,
    SelectOperator(String),
    BackToList,
    ClearSearch,
    AddFaq { operator: String },
    RemoveFaq { operator: String, index: usize },
    AddMaterial { operator: String },
    RemoveMaterial { operator: String, index: usize },
    OpenLink { url: String },
    CreateAccount,
    DeleteAccount { email: String },
}

impl UiAction {
    /// Controls that only the administrative role is offered.
    pub fn is_admin_only(&self) -> bool {
        matches!(
            self,
            UiAction::OpenManagement
                | UiAction::AddFaq { .. }
                | UiAction::RemoveFaq { .. }
                | UiAction::AddMaterial { .. }
                | UiAction::RemoveMaterial { .. }
                | UiAction::CreateAccount
                | UiAction::DeleteAccount { .. }
                | UiAction::Edit(FormField::FaqPergunta)
                | UiAction::Edit(FormField::FaqResposta)
                | UiAction::Edit(FormField::MaterialDescription)
                | UiAction::Edit(FormField::MaterialLink)
                | UiAction::Edit(FormField::NewNome)
                | UiAction::Edit(FormField::NewEmail)
                | UiAction::Edit(FormField::NewSenha)
        )
    }

    /// The form field this control edits, if it is a text input.
    pub fn edited_field(&self) -> Option<FormField> {
        match self {
            UiAction::Edit(field) => Some(*field),
            _ => None,
        }
    }
}

/// An interactive element of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub label: String,
    pub action: UiAction,
}

impl Control {
    pub fn new(label: impl Into<String>, action: UiAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }

    /// A text input labelled by its placeholder.
    pub fn input(field: FormField) -> Self {
        Self::new(field.placeholder(), UiAction::Edit(field))
    }
}

/// Top navigation bar, present whenever someone is signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    pub title: String,
    /// "Olá, {first name} ({role})"
    pub greeting: String,
    /// Whether the "Gerenciar Corretores" entry is offered
    pub show_management: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginView {
    pub title: String,
    pub subtitle: String,
    pub email: String,
    pub senha: String,
    pub hint: String,
}

/// Search header shown above the home grid and the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorCard {
    pub name: String,
    pub faq_count: usize,
    pub material_count: usize,
}

impl OperatorCard {
    /// "{n} FAQs | {m} Materiais"
    pub fn summary(&self) -> String {
        format!("{} FAQs | {} Materiais", self.faq_count, self.material_count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub hero: HeroView,
    pub cards: Vec<OperatorCard>,
    /// Present when a non-empty query matched nothing
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqForm {
    pub pergunta: String,
    pub resposta: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialForm {
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub hero: HeroView,
    pub operator: String,
    pub faqs: Vec<FaqEntry>,
    pub materiais: Vec<MaterialEntry>,
    /// Whether remove buttons and add forms are shown
    pub can_edit: bool,
    pub faq_form: Option<FaqForm>,
    pub material_form: Option<MaterialForm>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRow {
    pub nome: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountForm {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagementView {
    pub form: AccountForm,
    /// Broker accounts only
    pub corretores: Vec<AccountRow>,
}

/// Which screen the document shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login(LoginView),
    Home(HomeView),
    OperadoraDetail(DetailView),
    Management(ManagementView),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Login(_) => "login",
            Screen::Home(_) => "home",
            Screen::OperadoraDetail(_) => "operadora_detail",
            Screen::Management(_) => "gerenciamento_corretores",
        }
    }
}

/// One complete frame of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDocument {
    pub nav: Option<NavBar>,
    pub screen: Screen,
    /// Event producers in focus order
    pub controls: Vec<Control>,
    /// Index into `controls`, clamped to the current list
    pub focus: Option<usize>,
}

impl ViewDocument {
    /// The focused control, if any.
    pub fn focused(&self) -> Option<&Control> {
        self.focus.and_then(|i| self.controls.get(i))
    }

    /// Whether the focused control performs `action`.
    pub fn is_focused(&self, action: &UiAction) -> bool {
        self.focused().map(|c| &c.action == action).unwrap_or(false)
    }

    /// Whether any control performs `action`.
    pub fn has_action(&self, action: &UiAction) -> bool {
        self.controls.iter().any(|c| &c.action == action)
    }

    /// Whether any control matches `predicate`.
    pub fn any_action(&self, predicate: impl Fn(&UiAction) -> bool) -> bool {
        self.controls.iter().any(|c| predicate(&c.action))
    }

    /// Position of the first control performing `action`.
    pub fn position_of(&self, action: &UiAction) -> Option<usize> {
        self.controls.iter().position(|c| &c.action == action)
    }

    /// Names of the operator cards on the home screen.
    pub fn card_names(&self) -> Vec<&str> {
        match &self.screen {
            Screen::Home(home) => home.cards.iter().map(|c| c.name.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Focus index after moving `delta` steps, wrapping around.
    pub fn cycle_focus(&self, delta: isize) -> usize {
        let len = self.controls.len();
        if len == 0 {
            return 0;
        }
        let current = self.focus.unwrap_or(0) as isize;
        (current + delta).rem_euclid(len as isize) as usize
    }
}
