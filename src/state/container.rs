//! The state container.

use std::sync::{Arc, Mutex, MutexGuard};

use super::{AppState, StatePatch};
use crate::traits::Renderer;
use crate::view::{self, ViewDocument};

/// Owner of the session state.
///
/// `set_state` is the only mutation path: it merges a patch, projects the
/// new state and hands the document to the renderer before returning. The
/// lock is released before the renderer runs and is never held across an
/// await point, so callers must re-read state after every async call.
pub struct StateContainer {
    state: Mutex<AppState>,
    renderer: Arc<dyn Renderer>,
}

impl StateContainer {
    /// Create a container holding the anonymous default state.
    pub fn new(renderer: Arc<dyn Renderer>) -> Self {
        Self::with_state(AppState::default(), renderer)
    }

    /// Create a container holding `state`.
    pub fn with_state(state: AppState, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            state: Mutex::new(state),
            renderer,
        }
    }

    fn lock(&self) -> MutexGuard<'_, AppState> {
        // A panicking renderer never runs under this lock, so a poisoned
        // state is still consistent.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of the current state.
    pub fn get_state(&self) -> AppState {
        self.lock().clone()
    }

    /// Read part of the state without cloning all of it.
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.lock())
    }

    /// Merge `patch` and re-render.
    pub fn set_state(&self, patch: StatePatch) {
        tracing::trace!(fields = ?patch.touched(), "set_state");
        let document = {
            let mut state = self.lock();
            patch.apply(&mut state);
            view::project(&state)
        };
        self.renderer.render(&document);
    }

    /// Project the current state and render it without changing anything.
    pub fn render(&self) {
        let document = self.current_document();
        self.renderer.render(&document);
    }

    /// The document the current state projects to.
    pub fn current_document(&self) -> ViewDocument {
        view::project(&self.lock())
    }
}

impl std::fmt::Debug for StateContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateContainer")
            .field("state", &*self.lock())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::RecordingRenderer;
    use crate::view::Screen;

    fn container() -> (StateContainer, Arc<RecordingRenderer>) {
        let renderer = Arc::new(RecordingRenderer::new());
        (StateContainer::new(renderer.clone()), renderer)
    }

    #[test]
    fn test_set_state_renders_every_call() {
        let (store, renderer) = container();
        store.set_state(StatePatch::new().query("a"));
        store.set_state(StatePatch::new().query("ab"));
        store.set_state(StatePatch::new());
        assert_eq!(renderer.render_count(), 3);
    }

    #[test]
    fn test_set_state_renders_new_state() {
        let (store, renderer) = container();
        store.set_state(StatePatch::new().login_email("ana@x.com"));

        let doc = renderer.last().unwrap();
        match doc.screen {
            Screen::Login(login) => assert_eq!(login.email, "ana@x.com"),
            other => panic!("expected login screen, got {:?}", other),
        }
        assert_eq!(store.get_state().login_email, "ana@x.com");
    }

    #[test]
    fn test_render_does_not_mutate() {
        let (store, renderer) = container();
        let before = store.get_state();
        store.render();
        assert_eq!(renderer.render_count(), 1);
        assert_eq!(store.get_state(), before);
    }

    #[test]
    fn test_read_projection() {
        let (store, _) = container();
        store.set_state(StatePatch::new().query("bra"));
        let len = store.read(|s| s.query.len());
        assert_eq!(len, 3);
    }
}
