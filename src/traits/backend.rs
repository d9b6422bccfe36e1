//! Backend trait abstraction.
//!
//! The remote document store and its credential service, treated as one
//! capability boundary. The synchronization layer never knows how the
//! backend authenticates or persists; it only sees these operations.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Account, ContentUpdate, NewAccount, SharedContent};

/// Failures reported by a [`Backend`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// A credential already exists for this email
    #[error("A credential already exists for {email}")]
    CredentialAlreadyExists { email: String },

    /// The credential service has no user with this email
    #[error("No credential registered for this email")]
    UserNotFound,

    /// The credential service rejected the password
    #[error("Credential rejected: wrong password")]
    WrongPassword,

    /// The addressed document does not exist
    #[error("Document not found: {path}")]
    NotFound { path: String },

    /// Security rules denied the request
    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with an error status
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response could not be decoded
    #[error("Malformed backend response: {0}")]
    Decode(String),

    /// Anything else
    #[error("Backend error: {0}")]
    Other(String),
}

impl BackendError {
    /// Whether the credential service rejected an email/password pair.
    pub fn is_credential_rejection(&self) -> bool {
        matches!(self, BackendError::UserNotFound | BackendError::WrongPassword)
    }

    /// Short code used in logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            BackendError::CredentialAlreadyExists { .. } => "BACKEND_CREDENTIAL_EXISTS",
            BackendError::UserNotFound => "BACKEND_USER_NOT_FOUND",
            BackendError::WrongPassword => "BACKEND_WRONG_PASSWORD",
            BackendError::NotFound { .. } => "BACKEND_NOT_FOUND",
            BackendError::PermissionDenied { .. } => "BACKEND_PERMISSION_DENIED",
            BackendError::Transport(_) => "BACKEND_TRANSPORT",
            BackendError::Status { .. } => "BACKEND_STATUS",
            BackendError::Decode(_) => "BACKEND_DECODE",
            BackendError::Other(_) => "BACKEND_OTHER",
        }
    }
}

/// Remote content store plus credential service.
///
/// Implementations include the Firestore/Identity Toolkit REST adapter and
/// an in-memory backend for tests and demo mode.
///
/// # Example
///
/// ```ignore
/// use painel::traits::Backend;
///
/// async fn count_accounts<B: Backend + ?Sized>(backend: &B) -> usize {
///     backend.get_accounts().await.map(|a| a.len()).unwrap_or(0)
/// }
/// ```
#[async_trait]
pub trait Backend: Send + Sync {
    /// All account documents, in backend order.
    async fn get_accounts(&self) -> Result<Vec<Account>, BackendError>;

    /// The account document with this email, if any.
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, BackendError>;

    /// Write a new account document and return its assigned id.
    async fn create_account_document(&self, account: &NewAccount) -> Result<String, BackendError>;

    /// Delete an account document by id.
    async fn delete_account_document(&self, id: &str) -> Result<(), BackendError>;

    /// The singleton shared document, or `None` when it does not exist yet.
    async fn get_shared_content(&self) -> Result<Option<SharedContent>, BackendError>;

    /// Create (or overwrite) the singleton shared document.
    async fn create_shared_content(&self, content: &SharedContent) -> Result<(), BackendError>;

    /// Replace the supplied top-level fields of the shared document.
    async fn update_shared_content(&self, update: &ContentUpdate) -> Result<(), BackendError>;

    /// Establish the authenticated session used by later calls.
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), BackendError>;

    /// Drop the authenticated session.
    async fn sign_out(&self) -> Result<(), BackendError>;

    /// Register a credential. Fails with
    /// [`BackendError::CredentialAlreadyExists`] for a known email.
    async fn create_credential(&self, email: &str, password: &str) -> Result<(), BackendError>;
}
