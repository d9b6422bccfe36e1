//! Control dispatch.
//!
//! Binds the controls of the latest view document to panel operations.
//! Form values are read from a fresh snapshot at activation time.

use super::Panel;
use crate::error::PainelResult;
use crate::state::{FormField, StatePatch};
use crate::view::{UiAction, ViewDocument};

impl Panel {
    /// The document the current state projects to.
    pub fn document(&self) -> ViewDocument {
        self.store.current_document()
    }

    /// Run whatever `action` stands for.
    pub async fn activate(&self, action: UiAction) -> PainelResult<()> {
        tracing::debug!(?action, "activate");
        match action {
            UiAction::Edit(FormField::LoginSenha) => self.submit_login().await,
            UiAction::Edit(_) => {
                self.focus_next();
                Ok(())
            }
            UiAction::SubmitLogin => self.submit_login().await,
            UiAction::Logout => {
                self.logout().await;
                Ok(())
            }
            UiAction::GoHome => {
                self.go_home();
                Ok(())
            }
            UiAction::OpenManagement => {
                self.open_management();
                Ok(())
            }
            UiAction::SelectOperator(operator) => {
                self.select_operator(&operator);
                Ok(())
            }
            UiAction::BackToList => {
                self.back_to_list();
                Ok(())
            }
            UiAction::ClearSearch => {
                self.clear_search();
                Ok(())
            }
            UiAction::AddFaq { operator } => {
                let (pergunta, resposta) = self.store.read(|s| {
                    (s.new_faq_pergunta.clone(), s.new_faq_resposta.clone())
                });
                self.add_faq(&operator, &pergunta, &resposta).await
            }
            UiAction::RemoveFaq { operator, index } => self.remove_faq(&operator, index).await,
            UiAction::AddMaterial { operator } => {
                let (description, link) = self.store.read(|s| {
                    (
                        s.new_material_description.clone(),
                        s.new_material_link.clone(),
                    )
                });
                self.add_material(&operator, &description, &link).await
            }
            UiAction::RemoveMaterial { operator, index } => {
                self.remove_material(&operator, index).await
            }
            UiAction::OpenLink { url } => {
                self.open_link(&url);
                Ok(())
            }
            UiAction::CreateAccount => {
                let (nome, email, senha) = self.store.read(|s| {
                    (s.new_nome.clone(), s.new_email.clone(), s.new_senha.clone())
                });
                self.create_account(&nome, &email, &senha).await
            }
            UiAction::DeleteAccount { email } => self.delete_account(&email).await,
        }
    }

    async fn submit_login(&self) -> PainelResult<()> {
        let (email, senha) = self
            .store
            .read(|s| (s.login_email.clone(), s.login_senha.clone()));
        self.login(&email, &senha).await
    }

    /// Replace the text of a form field.
    pub fn edit_field(&self, field: FormField, value: impl Into<String>) {
        self.set_state(field.patch(value));
    }

    /// Append a character to the focused input, if an input has focus.
    pub fn type_char(&self, c: char) -> bool {
        self.edit_focused(|text| text.push(c))
    }

    /// Delete the last character of the focused input.
    pub fn backspace(&self) -> bool {
        self.edit_focused(|text| {
            text.pop();
        })
    }

    fn edit_focused(&self, edit: impl FnOnce(&mut String)) -> bool {
        let Some(field) = self.focused_field() else {
            return false;
        };
        let mut text = self.store.read(|s| s.field(field).to_string());
        edit(&mut text);
        self.edit_field(field, text);
        true
    }

    /// The form field under focus, if the focused control is an input.
    pub fn focused_field(&self) -> Option<FormField> {
        self.document()
            .focused()
            .and_then(|control| control.action.edited_field())
    }

    pub fn focus_next(&self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&self) {
        self.move_focus(-1);
    }

    fn move_focus(&self, delta: isize) {
        let focus = self.document().cycle_focus(delta);
        self.set_state(StatePatch::new().focus(focus));
    }

    /// Focus the first control performing `action`, if present.
    pub fn focus_action(&self, action: &UiAction) -> bool {
        match self.document().position_of(action) {
            Some(index) => {
                self.set_state(StatePatch::new().focus(index));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::adapters::BackendCall;
    use crate::app::test_support::{admin, harness, harness_with, signed_in_admin};
    use crate::adapters::InMemoryBackend;
    use crate::models::FaqEntry;
    use crate::state::{AppState, CurrentView, FormField};
    use crate::view::{Screen, UiAction};

    #[tokio::test]
    async fn test_typing_into_login_form_and_submitting() {
        let backend = InMemoryBackend::new();
        let account = backend.seed_account(admin());
        let h = harness_with(backend, AppState::default());

        for c in account.email.chars() {
            assert!(h.panel.type_char(c));
        }
        h.panel.focus_next();
        for c in "admin1234".chars() {
            h.panel.type_char(c);
        }
        assert!(h.panel.backspace());
        assert_eq!(h.panel.state().login_senha, "admin123");

        // Enter on the password field submits
        h.panel
            .activate(UiAction::Edit(FormField::LoginSenha))
            .await
            .unwrap();
        assert_eq!(h.panel.state().current_user, Some(account));
    }

    #[test]
    fn test_typing_without_input_focus_is_ignored() {
        let h = harness();
        assert!(h.panel.focus_action(&UiAction::SubmitLogin));
        assert!(!h.panel.type_char('x'));
        assert_eq!(h.panel.state().login_email, "");
    }

    #[tokio::test]
    async fn test_enter_on_input_moves_focus() {
        let h = harness();
        h.panel
            .activate(UiAction::Edit(FormField::LoginEmail))
            .await
            .unwrap();
        assert_eq!(h.panel.focused_field(), Some(FormField::LoginSenha));
    }

    #[tokio::test]
    async fn test_add_faq_reads_form_echoes() {
        let (h, _) = signed_in_admin().await;
        h.panel.select_operator("Amil");
        h.panel.edit_field(FormField::FaqPergunta, "q");
        h.panel.edit_field(FormField::FaqResposta, "a");

        h.panel
            .activate(UiAction::AddFaq {
                operator: "Amil".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(h.panel.state().faqs["Amil"], vec![FaqEntry::new("q", "a")]);
    }

    #[tokio::test]
    async fn test_create_account_from_form() {
        let (h, _) = signed_in_admin().await;
        h.panel.activate(UiAction::OpenManagement).await.unwrap();
        h.panel.edit_field(FormField::NewNome, "Bia Lima");
        h.panel.edit_field(FormField::NewEmail, "bia@x.com");
        h.panel.edit_field(FormField::NewSenha, "pw");

        h.panel.activate(UiAction::CreateAccount).await.unwrap();

        match h.panel.document().screen {
            Screen::Management(manager) => {
                assert_eq!(manager.corretores.len(), 1);
                assert_eq!(manager.corretores[0].nome, "Bia Lima");
                assert_eq!(manager.form.nome, "");
            }
            other => panic!("expected manager, got {}", other.name()),
        }
    }

    #[tokio::test]
    async fn test_every_rendered_control_is_dispatchable() {
        let (h, _) = signed_in_admin().await;
        h.panel.select_operator("Amil");
        for control in h.panel.document().controls {
            if matches!(control.action, UiAction::Logout) {
                continue;
            }
            let _ = h.panel.activate(control.action).await;
        }
        assert!(h.panel.state().current_user.is_some());
        assert!(!h.backend.calls().contains(&BackendCall::SignOut));
    }

    #[tokio::test]
    async fn test_focus_wraps() {
        let h = harness();
        h.panel.focus_prev();
        assert_eq!(h.panel.state().focus, 2);
        h.panel.focus_next();
        assert_eq!(h.panel.state().focus, 0);
        assert_eq!(h.panel.state().current_view, CurrentView::Home);
    }
}
