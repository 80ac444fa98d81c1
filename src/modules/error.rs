//! Sub-Module Error Types

use std::fmt;

/// Result type alias for sub-module operations
pub type ModuleResult<T> = std::result::Result<T, ModuleError>;

/// Errors raised by sub-module initialization and re-initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleError {
    /// The module failed to build its internal state
    InitFailed { module_name: String, cause: String },
}

impl fmt::Display for ModuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleError::InitFailed { module_name, cause } => {
                write!(f, "Module '{}' failed to initialize: {}", module_name, cause)
            }
        }
    }
}

impl std::error::Error for ModuleError {}
