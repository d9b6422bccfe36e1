//! Runtime configuration.
//!
//! Layers, lowest to highest precedence:
//! 1. built-in defaults
//! 2. `<config dir>/painel/config.json`, if present
//! 3. environment variables (`PAINEL_*`)
//! 4. command-line flags (applied by `main`)

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::adapters::FirebaseOptions;

pub const ENV_DEMO: &str = "PAINEL_DEMO";
pub const ENV_API_KEY: &str = "PAINEL_FIREBASE_API_KEY";
pub const ENV_PROJECT_ID: &str = "PAINEL_FIREBASE_PROJECT_ID";
pub const ENV_LOG: &str = "PAINEL_LOG";
pub const ENV_LOG_FILE: &str = "PAINEL_LOG_FILE";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "no Firebase project configured: set {} and {} or run with --demo",
        ENV_API_KEY,
        ENV_PROJECT_ID
    )]
    MissingFirebase,
}

/// Firebase project settings as written in the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FirebaseSettings {
    pub api_key: String,
    pub project_id: String,
    pub firestore_url: Option<String>,
    pub identity_url: Option<String>,
}

impl FirebaseSettings {
    fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.project_id.is_empty()
    }

    fn to_options(&self) -> FirebaseOptions {
        let mut options = FirebaseOptions::new(&self.api_key, &self.project_id);
        if let Some(url) = &self.firestore_url {
            options = options.with_firestore_url(url);
        }
        if let Some(url) = &self.identity_url {
            options = options.with_identity_url(url);
        }
        options
    }
}

/// Config file contents. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    demo: Option<bool>,
    firebase: Option<FirebaseSettings>,
    log_filter: Option<String>,
    log_file: Option<PathBuf>,
}

/// Which backend the panel talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendChoice {
    /// In-memory backend with seeded data
    Demo,
    Firebase(FirebaseOptions),
}

/// Resolved configuration.
///
/// # Example
///
/// ```ignore
/// use painel::config::PainelConfig;
///
/// let config = PainelConfig::load()?.with_demo(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PainelConfig {
    /// Use the in-memory backend
    pub demo: bool,
    pub firebase: FirebaseSettings,
    /// `tracing` filter directive
    pub log_filter: String,
    /// Where logs are written; the terminal belongs to the UI
    pub log_file: PathBuf,
}

impl Default for PainelConfig {
    fn default() -> Self {
        Self {
            demo: false,
            firebase: FirebaseSettings::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: default_log_file(),
        }
    }
}

impl PainelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_demo(mut self, demo: bool) -> Self {
        self.demo = demo;
        self
    }

    pub fn with_firebase(mut self, api_key: impl Into<String>, project_id: impl Into<String>) -> Self {
        self.firebase.api_key = api_key.into();
        self.firebase.project_id = project_id.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Defaults, then the user config file, then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Like [`load`](Self::load), reading `explicit` instead of the
    /// default file. An explicit file must exist; the default one may not.
    pub fn load_from(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match explicit {
            Some(path) => Self::default().merge_file(path)?,
            None => match config_file_path().filter(|path| path.exists()) {
                Some(path) => Self::default().merge_file(&path)?,
                None => Self::default(),
            },
        };
        Ok(config.merge_env(|key| std::env::var(key).ok()))
    }

    /// Overlay the keys present in a JSON config file.
    pub fn merge_file(mut self, path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(demo) = file.demo {
            self.demo = demo;
        }
        if let Some(firebase) = file.firebase {
            self.firebase = firebase;
        }
        if let Some(filter) = file.log_filter {
            self.log_filter = filter;
        }
        if let Some(log_file) = file.log_file {
            self.log_file = log_file;
        }
        Ok(self)
    }

    /// Overlay environment variables read through `var`.
    pub fn merge_env(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(value) = var(ENV_DEMO) {
            self.demo = is_truthy(&value);
        }
        if let Some(key) = var(ENV_API_KEY) {
            self.firebase.api_key = key;
        }
        if let Some(project) = var(ENV_PROJECT_ID) {
            self.firebase.project_id = project;
        }
        if let Some(filter) = var(ENV_LOG) {
            self.log_filter = filter;
        }
        if let Some(path) = var(ENV_LOG_FILE) {
            self.log_file = PathBuf::from(path);
        }
        self
    }

    /// Pick the backend. Demo wins over a configured project.
    pub fn backend(&self) -> Result<BackendChoice, ConfigError> {
        if self.demo {
            Ok(BackendChoice::Demo)
        } else if self.firebase.is_complete() {
            Ok(BackendChoice::Firebase(self.firebase.to_options()))
        } else {
            Err(ConfigError::MissingFirebase)
        }
    }
}

/// `<config dir>/painel/config.json`.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("painel").join("config.json"))
}

fn default_log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("painel")
        .join("painel.log")
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
