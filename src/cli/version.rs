//! Version and usage text.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("painel {}", VERSION)
}

pub fn usage() -> String {
    format!(
        "{}\n\
         Painel de FAQs e materiais por operadora.\n\n\
         Usage: painel [OPTIONS]\n\n\
         Options:\n  \
           --demo               Use the in-memory backend with sample data\n  \
           -c, --config <FILE>  Read settings from FILE instead of the default\n  \
           -V, --version        Print version\n  \
           -h, --help           Print this help\n\n\
         Environment:\n  \
           PAINEL_FIREBASE_API_KEY, PAINEL_FIREBASE_PROJECT_ID  Firebase project\n  \
           PAINEL_DEMO        Same as --demo when set to 1/true\n  \
           PAINEL_LOG         Log filter (default: info)\n  \
           PAINEL_LOG_FILE    Log file path",
        version_line()
    )
}
