//! Result type alias for panel operations.

use super::painel_error::{Operation, PainelError};
use crate::traits::BackendError;

/// Type alias for Results using PainelError.
///
/// # Example
///
/// ```ignore
/// use painel::error::PainelResult;
///
/// async fn refresh(panel: &Panel) -> PainelResult<()> {
///     panel.reload_content().await
/// }
/// ```
pub type PainelResult<T> = Result<T, PainelError>;

/// Extension trait tagging backend results with the operation they belong to.
pub trait BackendResultExt<T> {
    /// Wrap a backend failure as [`PainelError::Backend`].
    fn during(self, operation: Operation) -> PainelResult<T>;

    /// Wrap a backend failure as [`PainelError::PartialFailure`].
    fn after(self, operation: Operation, completed: &'static str) -> PainelResult<T>;
}

impl<T> BackendResultExt<T> for Result<T, BackendError> {
    fn during(self, operation: Operation) -> PainelResult<T> {
        self.map_err(|source| PainelError::Backend { operation, source })
    }

    fn after(self, operation: Operation, completed: &'static str) -> PainelResult<T> {
        self.map_err(|source| PainelError::PartialFailure {
            operation,
            completed,
            source,
        })
    }
}
