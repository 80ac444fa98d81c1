//! Runtime Capability Error Types

use std::fmt;

/// Result type alias for capability resolution
pub type RuntimeResult<T> = std::result::Result<T, RuntimeError>;

/// Errors raised while resolving host runtime capabilities
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// The host runtime version has no known reload strategy
    UnsupportedRuntime { major: u32, minor: u32 },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::UnsupportedRuntime { major, minor } => {
                write!(
                    f,
                    "Unsupported script runtime version {}.{}: no known reload strategy",
                    major, minor
                )
            }
        }
    }
}

impl std::error::Error for RuntimeError {}

impl crate::core::error_handling::ContextualError for RuntimeError {
    fn is_user_actionable(&self) -> bool {
        false // The user cannot change the host's embedded interpreter
    }

    fn user_message(&self) -> Option<&str> {
        None
    }
}
