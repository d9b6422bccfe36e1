//! Error handling for the panel.
//!
//! - **Validation errors**: detected locally, never reach the backend
//! - **Auth errors**: login refusals
//! - **Backend errors**: any backend failure, tagged with the operation
//! - **Partial failures**: a later backend call failed after an earlier one persisted
//!
//! Every variant knows its user-facing message, notification severity and
//! log code.
//!
//! | Kind | Severity | Reaches backend |
//! |------|----------|-----------------|
//! | Validation (missing field) | Warning | No |
//! | Validation (other) | Error | No |
//! | Auth | Error | Yes |
//! | Backend | Error | Yes |
//! | PartialFailure | Error | Yes |

mod auth;
mod painel_error;
mod result;
mod validation;

pub use auth::AuthError;
pub use painel_error::{Operation, PainelError};
pub use result::{BackendResultExt, PainelResult};
pub use validation::ValidationError;
