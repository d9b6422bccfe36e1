//! Authoritative reload of accounts and shared content.

use super::Panel;
use crate::error::{BackendResultExt, Operation, PainelResult};
use crate::models::SharedContent;
use crate::state::StatePatch;

impl Panel {
    /// Re-fetch every account and the shared document.
    ///
    /// A no-op while signed out. Failures are reported to the user.
    pub async fn reload_content(&self) -> PainelResult<()> {
        let result = self.refresh().await;
        self.report(result)
    }

    /// The reload used after each mutation; the caller reports failures.
    pub(super) async fn refresh(&self) -> PainelResult<()> {
        if !self.store.read(|s| s.is_signed_in()) {
            tracing::debug!("reload skipped: no session");
            return Ok(());
        }

        let accounts = self
            .backend
            .get_accounts()
            .await
            .during(Operation::Reload)?;

        let content = match self
            .backend
            .get_shared_content()
            .await
            .during(Operation::Reload)?
        {
            Some(content) => content,
            None => {
                tracing::info!("shared content missing, creating it");
                let content = SharedContent::empty();
                self.backend
                    .create_shared_content(&content)
                    .await
                    .during(Operation::Reload)?;
                content
            }
        };

        // The session may have ended while the requests were in flight.
        if !self.store.read(|s| s.is_signed_in()) {
            tracing::debug!("reload discarded: signed out meanwhile");
            return Ok(());
        }

        tracing::debug!(
            accounts = accounts.len(),
            faq_operators = content.faqs.len(),
            material_operators = content.materiais.len(),
            "reloaded"
        );
        self.set_state(
            StatePatch::new()
                .accounts(accounts)
                .faqs(content.faqs)
                .materiais(content.materiais)
                .data_loaded(true),
        );
        Ok(())
    }
}
