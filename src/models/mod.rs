//! Domain models shared by the backend, the state container and the views.
//!
//! - [`Account`] / [`NewAccount`] / [`Role`] - panel accounts
//! - [`SharedContent`] / [`FaqEntry`] / [`MaterialEntry`] - the singleton content document
//! - [`OPERADORAS`] - the fixed carrier list used as the content key space

mod account;
mod content;
mod operator;

pub use account::{Account, NewAccount, Role, PROTECTED_ACCOUNT_EMAIL};
pub use content::{
    normalize_link, ContentUpdate, FaqEntry, FaqMap, MaterialEntry, MaterialMap, SharedContent,
};
pub use operator::{filter_operators, OPERADORAS};
