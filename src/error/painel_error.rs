//! Unified error type for the panel.
//!
//! `PainelError` consolidates validation, login and backend failures and
//! translates each into the message shown to the user.

use thiserror::Error;

use super::auth::AuthError;
use super::validation::ValidationError;
use crate::traits::{BackendError, Severity};

/// The synchronization-layer operation a backend failure belongs to.
///
/// Backend failures are translated per operation: the same transport error
/// reads differently during login than during a content write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    CreateAccount,
    DeleteAccount,
    UpdateContent,
    Reload,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Login => "login",
            Operation::CreateAccount => "create_account",
            Operation::DeleteAccount => "delete_account",
            Operation::UpdateContent => "update_content",
            Operation::Reload => "reload",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the panel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PainelError {
    /// Rejected locally, no backend call was made.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Login refused.
    #[error("login refused: {0}")]
    Auth(#[from] AuthError),

    /// A backend call failed.
    #[error("{operation} failed: {source}")]
    Backend {
        operation: Operation,
        #[source]
        source: BackendError,
    },

    /// A later backend call failed after an earlier one succeeded.
    ///
    /// Nothing is rolled back: `completed` names the step that persisted.
    #[error("{operation} partially applied ({completed} done): {source}")]
    PartialFailure {
        operation: Operation,
        completed: &'static str,
        #[source]
        source: BackendError,
    },
}

impl PainelError {
    pub fn backend(operation: Operation, source: BackendError) -> Self {
        PainelError::Backend { operation, source }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            PainelError::Validation(err) => err.user_message(),
            PainelError::Auth(err) => err.user_message(),
            PainelError::Backend { operation, source } => backend_message(*operation, source),
            PainelError::PartialFailure { operation, .. } => generic_message(*operation),
        }
    }

    /// Severity of the notification reporting this error.
    pub fn severity(&self) -> Severity {
        match self {
            PainelError::Validation(err) if err.is_missing_field() => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            PainelError::Validation(err) => err.error_code(),
            PainelError::Auth(err) => err.error_code(),
            PainelError::Backend { source, .. } => source.error_code(),
            PainelError::PartialFailure { .. } => "PARTIAL_FAILURE",
        }
    }

    /// Whether the failure happened before any backend call.
    pub fn is_local(&self) -> bool {
        matches!(self, PainelError::Validation(_))
    }

    /// The underlying backend error, if any.
    pub fn backend_error(&self) -> Option<&BackendError> {
        match self {
            PainelError::Backend { source, .. } | PainelError::PartialFailure { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

fn backend_message(operation: Operation, source: &BackendError) -> String {
    match (operation, source) {
        (Operation::Login, err) if err.is_credential_rejection() => {
            AuthError::CredentialRejected.user_message()
        }
        (Operation::CreateAccount, BackendError::CredentialAlreadyExists { .. }) => {
            "Erro: Este email já está em uso.".to_string()
        }
        (operation, _) => generic_message(operation),
    }
}

fn generic_message(operation: Operation) -> String {
    match operation {
        Operation::Login => {
            "Erro ao tentar login. Verifique as credenciais e as regras do Firebase.".to_string()
        }
        Operation::CreateAccount => "Erro ao cadastrar corretor. Tente novamente.".to_string(),
        Operation::DeleteAccount => "Erro ao remover corretor. Tente novamente.".to_string(),
        Operation::UpdateContent => {
            "Erro ao atualizar o conteúdo. Verifique o banco.".to_string()
        }
        Operation::Reload => {
            "Erro: Não foi possível carregar os dados. Verifique a conexão.".to_string()
        }
    }
}
