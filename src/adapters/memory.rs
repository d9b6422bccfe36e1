//! In-memory backend.
//!
//! Implements the full [`Backend`] contract over plain collections. Used by
//! the test suites and by `--demo` mode. Every call is logged and any
//! operation can be made to fail.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::{
    Account, ContentUpdate, FaqEntry, MaterialEntry, NewAccount, Role, SharedContent,
    PROTECTED_ACCOUNT_EMAIL,
};
use crate::traits::{Backend, BackendError};

/// Password of the seeded administrator in demo mode.
pub const DEMO_ADMIN_PASSWORD: &str = "painel123";

/// Backend operations, for failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendOp {
    GetAccounts,
    FindAccount,
    CreateAccountDocument,
    DeleteAccountDocument,
    GetSharedContent,
    CreateSharedContent,
    UpdateSharedContent,
    SignIn,
    SignOut,
    CreateCredential,
}

/// One logged backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    GetAccounts,
    FindAccount { email: String },
    CreateAccountDocument { email: String },
    DeleteAccountDocument { id: String },
    GetSharedContent,
    CreateSharedContent,
    UpdateSharedContent { fields: Vec<&'static str> },
    SignIn { email: String },
    SignOut,
    CreateCredential { email: String },
}

impl BackendCall {
    pub fn op(&self) -> BackendOp {
        match self {
            BackendCall::GetAccounts => BackendOp::GetAccounts,
            BackendCall::FindAccount { .. } => BackendOp::FindAccount,
            BackendCall::CreateAccountDocument { .. } => BackendOp::CreateAccountDocument,
            BackendCall::DeleteAccountDocument { .. } => BackendOp::DeleteAccountDocument,
            BackendCall::GetSharedContent => BackendOp::GetSharedContent,
            BackendCall::CreateSharedContent => BackendOp::CreateSharedContent,
            BackendCall::UpdateSharedContent { .. } => BackendOp::UpdateSharedContent,
            BackendCall::SignIn { .. } => BackendOp::SignIn,
            BackendCall::SignOut => BackendOp::SignOut,
            BackendCall::CreateCredential { .. } => BackendOp::CreateCredential,
        }
    }
}

#[derive(Debug, Default)]
struct Store {
    accounts: Vec<Account>,
    content: Option<SharedContent>,
    credentials: HashMap<String, String>,
    session: Option<String>,
    calls: Vec<BackendCall>,
    failures: HashMap<BackendOp, BackendError>,
}

/// In-memory [`Backend`].
///
/// Clones share the same store.
///
/// # Example
///
/// ```ignore
/// use painel::adapters::{BackendOp, InMemoryBackend};
///
/// let backend = InMemoryBackend::new();
/// backend.fail_on(BackendOp::GetAccounts, BackendError::Transport("offline".into()));
/// assert!(backend.get_accounts().await.is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    store: Arc<Mutex<Store>>,
}

impl InMemoryBackend {
    /// An empty backend: no accounts, no shared document yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend seeded with the bootstrap administrator and sample content.
    pub fn demo() -> Self {
        let backend = Self::new();
        backend.seed_account(NewAccount {
            nome: "Assistente Principal".to_string(),
            email: PROTECTED_ACCOUNT_EMAIL.to_string(),
            senha: DEMO_ADMIN_PASSWORD.to_string(),
            role: Role::Assistente,
        });
        backend.seed_account(NewAccount::corretor(
            "Carla Menezes",
            "carla@painel.com",
            "corretor123",
        ));

        let mut content = SharedContent::empty();
        content.faqs.insert(
            "Amil".to_string(),
            vec![FaqEntry::new(
                "Qual a carência para consultas?",
                "30 dias para consultas eletivas.",
            )],
        );
        content.materiais.insert(
            "Amil".to_string(),
            vec![MaterialEntry::new(
                "Tabela de Vidas",
                "https://example.com/amil/tabela",
            )],
        );
        backend.put_shared_content(content);
        backend
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Log `call` and fail it if a failure is configured for its operation.
    fn begin(&self, call: BackendCall) -> Result<MutexGuard<'_, Store>, BackendError> {
        let mut store = self.lock();
        let op = call.op();
        store.calls.push(call);
        if let Some(err) = store.failures.get(&op).cloned() {
            return Err(err);
        }
        Ok(store)
    }

    /// Add an account document and its credential.
    pub fn seed_account(&self, account: NewAccount) -> Account {
        let mut store = self.lock();
        store
            .credentials
            .insert(account.email.clone(), account.senha.clone());
        let account = account.with_id(uuid::Uuid::new_v4().to_string());
        store.accounts.push(account.clone());
        account
    }

    /// Add a credential without an account document.
    pub fn seed_credential(&self, email: &str, password: &str) {
        self.lock()
            .credentials
            .insert(email.to_string(), password.to_string());
    }

    pub fn has_credential(&self, email: &str) -> bool {
        self.lock().credentials.contains_key(email)
    }

    pub fn shared_content(&self) -> Option<SharedContent> {
        self.lock().content.clone()
    }

    pub fn put_shared_content(&self, content: SharedContent) {
        self.lock().content = Some(content);
    }

    pub fn remove_shared_content(&self) {
        self.lock().content = None;
    }

    /// Email of the signed-in credential, if any.
    pub fn session(&self) -> Option<String> {
        self.lock().session.clone()
    }

    /// Make every call to `op` fail with `err` until cleared.
    pub fn fail_on(&self, op: BackendOp, err: BackendError) {
        self.lock().failures.insert(op, err);
    }

    pub fn clear_failures(&self) {
        self.lock().failures.clear();
    }

    /// Every call so far, oldest first.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }
}

#[async_trait]
impl Backend for InMemoryBackend {
    async fn get_accounts(&self) -> Result<Vec<Account>, BackendError> {
        let store = self.begin(BackendCall::GetAccounts)?;
        Ok(store.accounts.clone())
    }

    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, BackendError> {
        let store = self.begin(BackendCall::FindAccount {
            email: email.to_string(),
        })?;
        Ok(store.accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn create_account_document(&self, account: &NewAccount) -> Result<String, BackendError> {
        let mut store = self.begin(BackendCall::CreateAccountDocument {
            email: account.email.clone(),
        })?;
        let id = uuid::Uuid::new_v4().to_string();
        store.accounts.push(account.clone().with_id(id.clone()));
        Ok(id)
    }

    async fn delete_account_document(&self, id: &str) -> Result<(), BackendError> {
        let mut store = self.begin(BackendCall::DeleteAccountDocument { id: id.to_string() })?;
        // Deleting a missing document succeeds, as in the document store
        store.accounts.retain(|a| a.id != id);
        Ok(())
    }

    async fn get_shared_content(&self) -> Result<Option<SharedContent>, BackendError> {
        let store = self.begin(BackendCall::GetSharedContent)?;
        Ok(store.content.clone())
    }

    async fn create_shared_content(&self, content: &SharedContent) -> Result<(), BackendError> {
        let mut store = self.begin(BackendCall::CreateSharedContent)?;
        store.content = Some(content.clone());
        Ok(())
    }

    async fn update_shared_content(&self, update: &ContentUpdate) -> Result<(), BackendError> {
        let mut store = self.begin(BackendCall::UpdateSharedContent {
            fields: update.field_paths(),
        })?;
        match store.content.as_mut() {
            Some(content) => {
                content.apply(update.clone());
                Ok(())
            }
            None => Err(BackendError::NotFound {
                path: "content/sharedContent".to_string(),
            }),
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<(), BackendError> {
        let mut store = self.begin(BackendCall::SignIn {
            email: email.to_string(),
        })?;
        match store.credentials.get(email) {
            None => return Err(BackendError::UserNotFound),
            Some(stored) if stored != password => return Err(BackendError::WrongPassword),
            Some(_) => {}
        }
        store.session = Some(email.to_string());
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        let mut store = self.begin(BackendCall::SignOut)?;
        store.session = None;
        Ok(())
    }

    async fn create_credential(&self, email: &str, password: &str) -> Result<(), BackendError> {
        let mut store = self.begin(BackendCall::CreateCredential {
            email: email.to_string(),
        })?;
        if store.credentials.contains_key(email) {
            return Err(BackendError::CredentialAlreadyExists {
                email: email.to_string(),
            });
        }
        store
            .credentials
            .insert(email.to_string(), password.to_string());
        Ok(())
    }
}
