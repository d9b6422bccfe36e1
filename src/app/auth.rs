//! Login and logout.

use super::Panel;
use crate::error::{AuthError, BackendResultExt, Operation, PainelResult, ValidationError};
use crate::state::{CurrentView, StatePatch};

impl Panel {
    /// Sign in with an account document's email and password.
    ///
    /// The stored password is compared as typed, then the credential
    /// service opens the session that later reads depend on. A failed
    /// login leaves the session anonymous.
    pub async fn login(&self, email: &str, senha: &str) -> PainelResult<()> {
        let result = self.try_login(email, senha).await;
        self.report(result)
    }

    async fn try_login(&self, email: &str, senha: &str) -> PainelResult<()> {
        if email.is_empty() || senha.is_empty() {
            return Err(ValidationError::MissingLoginFields.into());
        }

        let account = self
            .backend
            .find_account_by_email(email)
            .await
            .during(Operation::Login)?
            .ok_or_else(|| AuthError::AccountNotFound {
                email: email.to_string(),
            })?;

        if account.senha != senha {
            return Err(AuthError::IncorrectPassword.into());
        }

        self.backend
            .sign_in(email, senha)
            .await
            .during(Operation::Login)?;

        tracing::info!(email = %account.email, role = %account.role, "signed in");
        self.set_state(
            StatePatch::new()
                .current_user(Some(account))
                .login_email(String::new())
                .login_senha(String::new())
                .new_email(String::new())
                .new_senha(String::new())
                .current_view(CurrentView::Home)
                .focus(0usize),
        );

        self.refresh().await
    }

    /// End the session. A sign-out failure is logged and otherwise ignored.
    pub async fn logout(&self) {
        if let Err(err) = self.backend.sign_out().await {
            tracing::warn!(code = err.error_code(), "sign-out failed: {}", err);
        }
        tracing::info!("signed out");
        self.set_state(StatePatch::signed_out());
    }
}
