//! Login failures.

use thiserror::Error;

/// Why a login attempt was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No account document carries this email.
    #[error("no account for {email}")]
    AccountNotFound { email: String },

    /// The stored password differs from the one typed.
    #[error("incorrect password")]
    IncorrectPassword,

    /// The account document matched but the credential service refused.
    #[error("credential service rejected the login")]
    CredentialRejected,
}

impl AuthError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::AccountNotFound { .. } => "Usuário não encontrado.".to_string(),
            AuthError::IncorrectPassword => "Senha incorreta.".to_string(),
            AuthError::CredentialRejected => "Usuário ou senha incorretos.".to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::AccountNotFound { .. } => "AUTH_ACCOUNT_NOT_FOUND",
            AuthError::IncorrectPassword => "AUTH_INCORRECT_PASSWORD",
            AuthError::CredentialRejected => "AUTH_CREDENTIAL_REJECTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_do_not_leak_email() {
        let err = AuthError::AccountNotFound {
            email: "ana@x.com".to_string(),
        };
        assert!(!err.user_message().contains("ana@x.com"));
        assert_eq!(AuthError::IncorrectPassword.user_message(), "Senha incorreta.");
    }
}
