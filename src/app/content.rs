//! FAQ and material edits.
//!
//! Each edit copies the last loaded map, changes one operator's sequence
//! and writes the whole map back. Removal is by position in that copy, so
//! a stale copy can remove the wrong entry.

use super::Panel;
use crate::error::{BackendResultExt, Operation, PainelResult, ValidationError};
use crate::models::{normalize_link, ContentUpdate, FaqEntry, MaterialEntry};
use crate::state::StatePatch;
use crate::traits::Severity;

impl Panel {
    pub async fn add_faq(&self, operator: &str, pergunta: &str, resposta: &str) -> PainelResult<()> {
        let result = self.try_add_faq(operator, pergunta, resposta).await;
        self.report(result)
    }

    async fn try_add_faq(&self, operator: &str, pergunta: &str, resposta: &str) -> PainelResult<()> {
        if pergunta.is_empty() || resposta.is_empty() {
            return Err(ValidationError::MissingFaqFields.into());
        }

        let mut faqs = self.store.read(|s| s.faqs.clone());
        faqs.entry(operator.to_string())
            .or_default()
            .push(FaqEntry::new(pergunta, resposta));

        self.write_content(ContentUpdate::faqs(faqs)).await?;
        self.set_state(StatePatch::new().clear_faq_form());
        self.notify(&format!("FAQ adicionada para {}.", operator), Severity::Success);
        Ok(())
    }

    /// Remove the FAQ at `index`. An out-of-range index removes nothing.
    pub async fn remove_faq(&self, operator: &str, index: usize) -> PainelResult<()> {
        let result = self.try_remove_faq(operator, index).await;
        self.report(result)
    }

    async fn try_remove_faq(&self, operator: &str, index: usize) -> PainelResult<()> {
        let mut faqs = self.store.read(|s| s.faqs.clone());
        let entries = faqs.entry(operator.to_string()).or_default();
        remove_at(entries, index);

        self.write_content(ContentUpdate::faqs(faqs)).await?;
        self.notify(&format!("FAQ removida de {}.", operator), Severity::Success);
        Ok(())
    }

    pub async fn add_material(
        &self,
        operator: &str,
        description: &str,
        link: &str,
    ) -> PainelResult<()> {
        let result = self.try_add_material(operator, description, link).await;
        self.report(result)
    }

    async fn try_add_material(
        &self,
        operator: &str,
        description: &str,
        link: &str,
    ) -> PainelResult<()> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::MissingMaterialDescription.into());
        }

        let mut materiais = self.store.read(|s| s.materiais.clone());
        materiais
            .entry(operator.to_string())
            .or_default()
            .push(MaterialEntry::new(description, normalize_link(link)));

        self.write_content(ContentUpdate::materiais(materiais)).await?;
        self.set_state(StatePatch::new().clear_material_form());
        self.notify(
            &format!("Material adicionado: {}.", description),
            Severity::Success,
        );
        Ok(())
    }

    /// Remove the material at `index`. An out-of-range index removes nothing.
    pub async fn remove_material(&self, operator: &str, index: usize) -> PainelResult<()> {
        let result = self.try_remove_material(operator, index).await;
        self.report(result)
    }

    async fn try_remove_material(&self, operator: &str, index: usize) -> PainelResult<()> {
        let mut materiais = self.store.read(|s| s.materiais.clone());
        let entries = materiais.entry(operator.to_string()).or_default();
        remove_at(entries, index);

        self.write_content(ContentUpdate::materiais(materiais)).await?;
        self.notify(
            &format!("Material removido de {}.", operator),
            Severity::Success,
        );
        Ok(())
    }

    async fn write_content(&self, update: ContentUpdate) -> PainelResult<()> {
        let fields = update.field_paths();
        self.backend
            .update_shared_content(&update)
            .await
            .during(Operation::UpdateContent)?;
        tracing::info!(?fields, "shared content updated");
        self.refresh().await
    }
}

fn remove_at<T>(entries: &mut Vec<T>, index: usize) {
    if index < entries.len() {
        entries.remove(index);
    }
}

#[cfg(test)]
mod tests {
    use crate::adapters::{BackendCall, BackendOp};
    use crate::app::test_support::signed_in_admin;
    use crate::models::{FaqEntry, MaterialEntry, SharedContent};
    use crate::state::FormField;
    use crate::traits::{BackendError, Severity};

    fn seeded() -> SharedContent {
        let mut content = SharedContent::empty();
        content.faqs.insert(
            "Amil".to_string(),
            vec![FaqEntry::new("q1", "a1"), FaqEntry::new("q2", "a2")],
        );
        content.materiais.insert(
            "Amil".to_string(),
            vec![MaterialEntry::new("Tabela", "https://x")],
        );
        content
    }

    #[tokio::test]
    async fn test_add_faq_appends_and_clears_form() {
        let (h, _) = signed_in_admin().await;
        h.panel.edit_field(FormField::FaqPergunta, "Carência?");
        h.panel.edit_field(FormField::FaqResposta, "30 dias");

        h.panel.add_faq("Porto", "Carência?", "30 dias").await.unwrap();

        let state = h.panel.state();
        assert_eq!(state.faqs["Porto"], vec![FaqEntry::new("Carência?", "30 dias")]);
        assert_eq!(state.new_faq_pergunta, "");
        assert_eq!(state.new_faq_resposta, "");
        assert_eq!(
            h.sink.last(),
            Some(("FAQ adicionada para Porto.".to_string(), Severity::Success))
        );
    }

    #[tokio::test]
    async fn test_add_faq_requires_both_fields() {
        let (h, _) = signed_in_admin().await;
        h.panel.add_faq("Amil", "q", "").await.unwrap_err();
        assert_eq!(
            h.sink.last(),
            Some(("Preencha todos os campos do FAQ.".to_string(), Severity::Warning))
        );
        assert!(h.backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_remove_faq_by_index() {
        let (h, _) = signed_in_admin().await;
        h.backend.put_shared_content(seeded());
        h.panel.reload_content().await.unwrap();

        h.panel.remove_faq("Amil", 0).await.unwrap();
        assert_eq!(h.panel.state().faqs["Amil"], vec![FaqEntry::new("q2", "a2")]);
        assert_eq!(h.sink.last_message().as_deref(), Some("FAQ removida de Amil."));
    }

    #[tokio::test]
    async fn test_remove_faq_out_of_range_keeps_sequence() {
        let (h, _) = signed_in_admin().await;
        h.backend.put_shared_content(seeded());
        h.panel.reload_content().await.unwrap();

        h.panel.remove_faq("Amil", 7).await.unwrap();
        assert_eq!(h.panel.state().faqs["Amil"].len(), 2);
    }

    #[tokio::test]
    async fn test_add_material_normalizes_link() {
        let (h, _) = signed_in_admin().await;
        h.panel
            .add_material("Amil", "  Table ", "example.com/doc")
            .await
            .unwrap();
        h.panel.reload_content().await.unwrap();

        let entries = &h.panel.state().materiais["Amil"];
        assert_eq!(entries, &vec![MaterialEntry::new("Table", "https://example.com/doc")]);
        assert_eq!(
            h.sink.last_message().as_deref(),
            Some("Material adicionado: Table.")
        );
    }

    #[tokio::test]
    async fn test_add_material_requires_description() {
        let (h, _) = signed_in_admin().await;
        h.panel.add_material("Amil", "   ", "x.com").await.unwrap_err();
        assert_eq!(
            h.sink.last(),
            Some(("Preencha a descrição do material.".to_string(), Severity::Warning))
        );
        assert!(h.backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_remove_material() {
        let (h, _) = signed_in_admin().await;
        h.backend.put_shared_content(seeded());
        h.panel.reload_content().await.unwrap();

        h.panel.remove_material("Amil", 0).await.unwrap();
        assert!(h.panel.state().materiais["Amil"].is_empty());
        assert_eq!(
            h.sink.last_message().as_deref(),
            Some("Material removido de Amil.")
        );
    }

    #[tokio::test]
    async fn test_update_writes_one_field_and_reloads() {
        let (h, _) = signed_in_admin().await;
        h.panel.add_faq("Amil", "q", "a").await.unwrap();

        let calls = h.backend.calls();
        let update = calls
            .iter()
            .position(|c| c == &BackendCall::UpdateSharedContent { fields: vec!["faqs"] })
            .unwrap();
        let reload = calls
            .iter()
            .rposition(|c| c == &BackendCall::GetSharedContent)
            .unwrap();
        assert!(update < reload);
    }

    #[tokio::test]
    async fn test_write_failure_message() {
        let (h, _) = signed_in_admin().await;
        h.backend.fail_on(
            BackendOp::UpdateSharedContent,
            BackendError::Status {
                status: 500,
                message: "boom".to_string(),
            },
        );
        h.panel.edit_field(FormField::FaqPergunta, "q");

        h.panel.add_faq("Amil", "q", "a").await.unwrap_err();
        assert_eq!(
            h.sink.last(),
            Some((
                "Erro ao atualizar o conteúdo. Verifique o banco.".to_string(),
                Severity::Error
            ))
        );
        // The form survives a failed write
        assert_eq!(h.panel.state().new_faq_pergunta, "q");
    }
}
