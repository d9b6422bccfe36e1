//! Painel - terminal panel for per-operator FAQs and support materials.
//!
//! The library holds everything but the event loop so integration tests
//! and benches can drive it.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod notifications;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view;
