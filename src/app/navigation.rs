//! Navigation. These never touch the backend.

use super::Panel;
use crate::state::{CurrentView, StatePatch};

impl Panel {
    /// Operator grid with the search and selection cleared.
    pub fn go_home(&self) {
        self.set_state(
            StatePatch::new()
                .current_view(CurrentView::Home)
                .selected(None)
                .query(String::new())
                .focus(0usize),
        );
    }

    /// Broker account manager.
    pub fn open_management(&self) {
        self.set_state(
            StatePatch::new()
                .current_view(CurrentView::GerenciamentoCorretores)
                .selected(None)
                .query(String::new())
                .focus(0usize),
        );
    }

    pub fn select_operator(&self, operator: &str) {
        tracing::debug!(%operator, "operator selected");
        self.set_state(
            StatePatch::new()
                .selected(Some(operator.to_string()))
                .current_view(CurrentView::OperadoraDetail)
                .focus(0usize),
        );
    }

    /// Leave the detail view. The search text is kept.
    pub fn back_to_list(&self) {
        self.set_state(
            StatePatch::new()
                .selected(None)
                .current_view(CurrentView::Home)
                .focus(0usize),
        );
    }

    pub fn clear_search(&self) {
        self.set_state(StatePatch::new().query(String::new()));
    }

    /// Step back one level: detail to grid, manager to grid.
    ///
    /// Returns false when there is nowhere to go back to.
    pub fn back(&self) -> bool {
        let (selected, view) = self.store.read(|s| (s.selected.is_some(), s.current_view));
        if selected {
            self.back_to_list();
            true
        } else if view != CurrentView::Home {
            self.go_home();
            true
        } else {
            false
        }
    }

    /// Open a material link in the system browser.
    pub fn open_link(&self, url: &str) {
        if url.is_empty() {
            return;
        }
        match (self.link_opener)(url) {
            Ok(()) => tracing::debug!(%url, "link opened"),
            Err(err) => tracing::warn!(%url, "failed to open link: {}", err),
        }
    }
}
