//! Errors arising from dataset generation.

use thiserror::Error;

/// Errors raised while validating parameters or building a dataset.
///
/// Every failure is a configuration error detected at the offending call, so
/// there is nothing to retry. Generation validates its inputs before building
/// anything, which means a failed call never leaves a partial dataset behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    /// A recognized option that this crate deliberately does not implement.
    ///
    /// Asking for such an option fails loudly instead of silently falling
    /// back to a supported one.
    #[error("Unsupported configuration: {0}")]
    Unsupported(String),

    /// A parameter outside the domain of the operation it was passed to.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
