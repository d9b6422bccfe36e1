//! Input context.
//!
//! What the registry needs to know about the current frame to decide what
//! a key means. Built from the latest view document, so it is rebound
//! after every render.

use crate::view::{Screen, ViewDocument};

/// Snapshot of the parts of the UI that change key meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputContext {
    /// The focused control is a text input
    pub editing: bool,
    /// Someone is signed in (reload only makes sense then)
    pub signed_in: bool,
    /// A notification is on screen
    pub toast_visible: bool,
}

impl InputContext {
    pub fn from_document(document: &ViewDocument, toast_visible: bool) -> Self {
        Self {
            editing: document
                .focused()
                .map(|c| c.action.edited_field().is_some())
                .unwrap_or(false),
            signed_in: !matches!(document.screen, Screen::Login(_)),
            toast_visible,
        }
    }
}
