//! Local validation errors.
//!
//! Detected before any backend call; an operation that fails validation
//! has no side effects.

use thiserror::Error;

/// Validation failures of the synchronization layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Login submitted without email or password.
    #[error("login requires email and password")]
    MissingLoginFields,

    /// Account creation without name, email or password.
    #[error("account creation requires name, email and password")]
    MissingAccountFields,

    /// FAQ submitted without question or answer.
    #[error("FAQ requires question and answer")]
    MissingFaqFields,

    /// Material submitted with a blank description.
    #[error("material requires a description")]
    MissingMaterialDescription,

    /// Email already present among the loaded accounts.
    #[error("email {email} is already registered")]
    DuplicateEmail { email: String },

    /// Attempt to delete the bootstrap administrator.
    #[error("account {email} is protected")]
    ProtectedAccount { email: String },

    /// Deletion target not among the loaded accounts.
    #[error("account {email} is not loaded")]
    UnknownAccount { email: String },
}

impl ValidationError {
    /// Missing-field errors are warnings; the rest are errors.
    pub fn is_missing_field(&self) -> bool {
        matches!(
            self,
            ValidationError::MissingLoginFields
                | ValidationError::MissingAccountFields
                | ValidationError::MissingFaqFields
                | ValidationError::MissingMaterialDescription
        )
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::MissingLoginFields => "Preencha email e senha.".to_string(),
            ValidationError::MissingAccountFields => {
                "Preencha todos os campos: Nome, Email e Senha.".to_string()
            }
            ValidationError::MissingFaqFields => "Preencha todos os campos do FAQ.".to_string(),
            ValidationError::MissingMaterialDescription => {
                "Preencha a descrição do material.".to_string()
            }
            ValidationError::DuplicateEmail { .. } => "Email já cadastrado.".to_string(),
            ValidationError::ProtectedAccount { .. } => {
                "Não é possível remover a Assistente Principal.".to_string()
            }
            ValidationError::UnknownAccount { .. } => {
                "Erro: Usuário não encontrado no banco de dados.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingLoginFields => "VALIDATION_LOGIN_FIELDS",
            ValidationError::MissingAccountFields => "VALIDATION_ACCOUNT_FIELDS",
            ValidationError::MissingFaqFields => "VALIDATION_FAQ_FIELDS",
            ValidationError::MissingMaterialDescription => "VALIDATION_MATERIAL_DESCRIPTION",
            ValidationError::DuplicateEmail { .. } => "VALIDATION_DUPLICATE_EMAIL",
            ValidationError::ProtectedAccount { .. } => "VALIDATION_PROTECTED_ACCOUNT",
            ValidationError::UnknownAccount { .. } => "VALIDATION_UNKNOWN_ACCOUNT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_classification() {
        assert!(ValidationError::MissingLoginFields.is_missing_field());
        assert!(ValidationError::MissingMaterialDescription.is_missing_field());
        assert!(!ValidationError::DuplicateEmail {
            email: "a@x.com".to_string()
        }
        .is_missing_field());
        assert!(!ValidationError::ProtectedAccount {
            email: "a@x.com".to_string()
        }
        .is_missing_field());
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ValidationError::DuplicateEmail {
                email: "a@x.com".to_string()
            }
            .user_message(),
            "Email já cadastrado."
        );
        assert_eq!(
            ValidationError::ProtectedAccount {
                email: "assistente@painel.com".to_string()
            }
            .user_message(),
            "Não é possível remover a Assistente Principal."
        );
    }
}
