//! Error types for Horizon Chrome.

use thiserror::Error;

/// Errors raised by chrome configuration and platform collaborators.
///
/// None of these are fatal for the chrome state machine: the controller
/// logs them and degrades to the native behavior.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChromeError {
    /// The operation is not supported on this platform or OS release.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// The native window handle could not be obtained.
    #[error("failed to access window handle: {0}")]
    HandleAccess(String),

    /// A platform API call failed.
    #[error("platform error: {0}")]
    Platform(String),

    /// The chrome configuration could not be parsed.
    #[error("invalid chrome configuration: {0}")]
    Config(String),
}

impl ChromeError {
    /// Returns true if this error indicates the operation is not supported.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

/// Result type for chrome operations.
pub type ChromeResult<T> = Result<T, ChromeError>;
