use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A question/answer pair shown for one operator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqEntry {
    pub pergunta: String,
    pub resposta: String,
}

impl FaqEntry {
    pub fn new(pergunta: impl Into<String>, resposta: impl Into<String>) -> Self {
        Self {
            pergunta: pergunta.into(),
            resposta: resposta.into(),
        }
    }
}

/// A support-material link shown for one operator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MaterialEntry {
    pub description: String,
    pub link: String,
}

impl MaterialEntry {
    pub fn new(description: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            link: link.into(),
        }
    }
}

/// FAQs keyed by operator name, in insertion order per operator.
pub type FaqMap = BTreeMap<String, Vec<FaqEntry>>;

/// Materials keyed by operator name, in insertion order per operator.
pub type MaterialMap = BTreeMap<String, Vec<MaterialEntry>>;

/// The singleton `content/sharedContent` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SharedContent {
    #[serde(default)]
    pub faqs: FaqMap,
    #[serde(default)]
    pub materiais: MaterialMap,
}

impl SharedContent {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Apply a partial update: supplied fields replace the whole map.
    pub fn apply(&mut self, update: ContentUpdate) {
        if let Some(faqs) = update.faqs {
            self.faqs = faqs;
        }
        if let Some(materiais) = update.materiais {
            self.materiais = materiais;
        }
    }
}

/// Partial update of the shared document.
///
/// Only the top-level fields that are `Some` are written, and each one is
/// written in full; there are no nested update paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentUpdate {
    pub faqs: Option<FaqMap>,
    pub materiais: Option<MaterialMap>,
}

impl ContentUpdate {
    pub fn faqs(faqs: FaqMap) -> Self {
        Self {
            faqs: Some(faqs),
            materiais: None,
        }
    }

    pub fn materiais(materiais: MaterialMap) -> Self {
        Self {
            faqs: None,
            materiais: Some(materiais),
        }
    }

    /// Names of the fields this update replaces, in wire order.
    pub fn field_paths(&self) -> Vec<&'static str> {
        let mut paths = Vec::new();
        if self.faqs.is_some() {
            paths.push("faqs");
        }
        if self.materiais.is_some() {
            paths.push("materiais");
        }
        paths
    }

    pub fn is_empty(&self) -> bool {
        self.faqs.is_none() && self.materiais.is_none()
    }
}

/// Trim a link and give it an explicit scheme.
///
/// Bare domains and paths get `https://`; links already using `http://` or
/// `https://` are kept as typed. An empty link stays empty.
pub fn normalize_link(link: &str) -> String {
    let trimmed = link.trim();
    if trimmed.is_empty() || trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}
