//! Renderer trait abstraction.
//!
//! The state container projects the state after every change and hands the
//! resulting document to a `Renderer`. The renderer owns whatever happens
//! next (drawing, recording, publishing to a draw loop).

use std::sync::Mutex;

use tokio::sync::watch;

use crate::view::ViewDocument;

/// Consumer of freshly projected view documents.
pub trait Renderer: Send + Sync {
    fn render(&self, document: &ViewDocument);
}

/// A renderer that drops every document. Useful before a front end exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&self, _document: &ViewDocument) {}
}

/// A renderer that keeps every document it receives.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    documents: Mutex<Vec<ViewDocument>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of renders so far.
    pub fn render_count(&self) -> usize {
        self.documents.lock().map(|d| d.len()).unwrap_or(0)
    }

    /// The most recent document, if any render happened.
    pub fn last(&self) -> Option<ViewDocument> {
        self.documents.lock().ok().and_then(|d| d.last().cloned())
    }

    /// Every document, oldest first.
    pub fn documents(&self) -> Vec<ViewDocument> {
        self.documents.lock().map(|d| d.clone()).unwrap_or_default()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, document: &ViewDocument) {
        if let Ok(mut documents) = self.documents.lock() {
            documents.push(document.clone());
        }
    }
}

/// Publishes the latest document to a draw loop.
///
/// Only the newest document matters, so intermediate ones are overwritten
/// if the loop has not drawn them yet.
#[derive(Debug)]
pub struct WatchRenderer {
    tx: watch::Sender<Option<ViewDocument>>,
}

impl WatchRenderer {
    pub fn new() -> (Self, watch::Receiver<Option<ViewDocument>>) {
        let (tx, rx) = watch::channel(None);
        (Self { tx }, rx)
    }

    /// Another receiver for the same documents.
    pub fn subscribe(&self) -> watch::Receiver<Option<ViewDocument>> {
        self.tx.subscribe()
    }
}

impl Renderer for WatchRenderer {
    fn render(&self, document: &ViewDocument) {
        // Works with no receivers
        self.tx.send_replace(Some(document.clone()));
    }
}
