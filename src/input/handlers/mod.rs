//! Command handlers.
//!
//! - [`navigation`] - focus movement and stepping back
//! - [`editing`] - text input
//! - [`activation`] - running the focused control's action

pub mod activation;
pub mod editing;
pub mod navigation;

pub use activation::{activate, activate_focused, runs_inline, spawn_reload, Activation};
pub use editing::*;
pub use navigation::*;
