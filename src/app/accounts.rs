//! Broker account management.

use super::Panel;
use crate::error::{BackendResultExt, Operation, PainelResult, ValidationError};
use crate::models::{NewAccount, PROTECTED_ACCOUNT_EMAIL};
use crate::state::StatePatch;
use crate::traits::Severity;

impl Panel {
    /// Register a new `Corretor`: credential first, then the account document.
    pub async fn create_account(&self, nome: &str, email: &str, senha: &str) -> PainelResult<()> {
        let result = self.try_create_account(nome, email, senha).await;
        self.report(result)
    }

    async fn try_create_account(&self, nome: &str, email: &str, senha: &str) -> PainelResult<()> {
        if nome.is_empty() || email.is_empty() || senha.is_empty() {
            return Err(ValidationError::MissingAccountFields.into());
        }
        if self.store.read(|s| s.account_by_email(email).is_some()) {
            return Err(ValidationError::DuplicateEmail {
                email: email.to_string(),
            }
            .into());
        }

        self.backend
            .create_credential(email, senha)
            .await
            .during(Operation::CreateAccount)?;

        let account = NewAccount::corretor(nome, email, senha);
        let id = self
            .backend
            .create_account_document(&account)
            .await
            .after(Operation::CreateAccount, "credential")?;
        tracing::info!(%email, %id, "account created");

        self.refresh().await?;
        self.set_state(StatePatch::new().clear_account_form());
        self.notify(
            &format!("Corretor {} cadastrado com sucesso!", nome),
            Severity::Success,
        );
        Ok(())
    }

    /// Remove an account document. The credential record is left in place.
    pub async fn delete_account(&self, email: &str) -> PainelResult<()> {
        let result = self.try_delete_account(email).await;
        self.report(result)
    }

    async fn try_delete_account(&self, email: &str) -> PainelResult<()> {
        if email == PROTECTED_ACCOUNT_EMAIL {
            return Err(ValidationError::ProtectedAccount {
                email: email.to_string(),
            }
            .into());
        }

        let id = self
            .store
            .read(|s| s.account_by_email(email).map(|a| a.id.clone()))
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ValidationError::UnknownAccount {
                email: email.to_string(),
            })?;

        self.backend
            .delete_account_document(&id)
            .await
            .during(Operation::DeleteAccount)?;
        tracing::info!(%email, %id, "account document deleted");

        self.refresh().await?;
        self.notify(&format!("Corretor {} removido.", email), Severity::Info);
        Ok(())
    }
}
