//! Activation of the focused control.
//!
//! Actions that never reach the backend run inline so the next key sees
//! their effect. Everything else runs as a spawned task; the event loop
//! keeps handling keys while it is outstanding.

use futures::FutureExt;
use tokio::task::JoinHandle;

use crate::app::Panel;
use crate::state::FormField;
use crate::view::UiAction;

/// How an activation was carried out.
#[derive(Debug)]
pub enum Activation {
    /// Nothing has focus
    Nothing,
    /// Ran to completion before returning
    Inline,
    /// Running in the background
    Spawned(JoinHandle<()>),
}

/// Whether `action` completes without awaiting the backend.
pub fn runs_inline(action: &UiAction) -> bool {
    match action {
        UiAction::Edit(field) => *field != FormField::LoginSenha,
        UiAction::GoHome
        | UiAction::OpenManagement
        | UiAction::SelectOperator(_)
        | UiAction::BackToList
        | UiAction::ClearSearch
        | UiAction::OpenLink { .. } => true,
        _ => false,
    }
}

/// Activate whatever the current document has under focus.
pub fn activate_focused(panel: &Panel) -> Activation {
    let Some(control) = panel.document().focused().cloned() else {
        return Activation::Nothing;
    };
    activate(panel, control.action)
}

pub fn activate(panel: &Panel, action: UiAction) -> Activation {
    if runs_inline(&action) {
        // Local branches finish on first poll
        if panel.activate(action).now_or_never().is_none() {
            tracing::warn!("local action did not complete inline");
        }
        return Activation::Inline;
    }

    let panel = panel.clone();
    Activation::Spawned(tokio::spawn(async move {
        if let Err(err) = panel.activate(action).await {
            tracing::debug!(code = err.error_code(), "action failed: {}", err);
        }
    }))
}

/// Re-fetch accounts and content in the background.
pub fn spawn_reload(panel: &Panel) -> JoinHandle<()> {
    let panel = panel.clone();
    tokio::spawn(async move {
        let _ = panel.reload_content().await;
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::BackendCall;
    use crate::app::test_support::signed_in_admin;
    use crate::state::CurrentView;

    #[test]
    fn test_backend_actions_are_spawned() {
        assert!(runs_inline(&UiAction::Edit(FormField::Query)));
        assert!(!runs_inline(&UiAction::Edit(FormField::LoginSenha)));
        assert!(!runs_inline(&UiAction::Logout));
        assert!(!runs_inline(&UiAction::CreateAccount));
        assert!(runs_inline(&UiAction::SelectOperator("Amil".to_string())));
    }

    #[tokio::test]
    async fn test_inline_navigation() {
        let (h, _) = signed_in_admin().await;
        assert!(h.panel.focus_action(&UiAction::OpenManagement));

        assert!(matches!(activate_focused(&h.panel), Activation::Inline));
        assert_eq!(
            h.panel.state().current_view,
            CurrentView::GerenciamentoCorretores
        );
        assert!(h.backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_spawned_logout() {
        let (h, _) = signed_in_admin().await;
        assert!(h.panel.focus_action(&UiAction::Logout));

        match activate_focused(&h.panel) {
            Activation::Spawned(handle) => handle.await.unwrap(),
            other => panic!("expected a spawned task, got {:?}", other),
        }
        assert!(h.panel.state().current_user.is_none());
        assert_eq!(h.backend.calls(), vec![BackendCall::SignOut]);
    }

    #[tokio::test]
    async fn test_reload_in_background() {
        let (h, _) = signed_in_admin().await;
        spawn_reload(&h.panel).await.unwrap();
        assert!(h.backend.calls().contains(&BackendCall::GetSharedContent));
    }
}
