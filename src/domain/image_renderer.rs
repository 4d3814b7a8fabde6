//! Scannable image rendering contract.

use crate::error::AppError;

/// Renders the scannable image attached to a link.
///
/// The payload is opaque to the rest of the crate: it is stored and served
/// back byte for byte.
#[cfg_attr(test, mockall::automock)]
pub trait ImageRenderer: Send + Sync {
    /// Encodes `data` (the link's long URL) into an image payload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the data cannot be encoded.
    fn render(&self, data: &str) -> Result<Vec<u8>, AppError>;
}
