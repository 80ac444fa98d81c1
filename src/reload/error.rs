//! Reload Error Types

use std::fmt;

/// Result type alias for reload operations
pub type ReloadResult<T> = std::result::Result<T, ReloadError>;

/// Errors raised by the reload coordinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadError {
    /// A sub-module failed during the first load; no module graph was stored
    FirstLoadFailed { module_name: String, cause: String },

    /// A sub-module failed during a reload pass
    ///
    /// The remaining sequence was aborted without rollback: modules reloaded
    /// before the failure stay fresh, later ones stay stale. This
    /// mixed-freshness state is an accepted limitation of hot reload, not a
    /// state the coordinator attempts to repair.
    ReloadFailed { module_name: String, cause: String },
}

impl fmt::Display for ReloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReloadError::FirstLoadFailed { module_name, cause } => {
                write!(f, "First load of module '{}' failed: {}", module_name, cause)
            }
            ReloadError::ReloadFailed { module_name, cause } => {
                write!(f, "Reload of module '{}' failed: {}", module_name, cause)
            }
        }
    }
}

impl std::error::Error for ReloadError {}

impl crate::core::error_handling::ContextualError for ReloadError {
    fn is_user_actionable(&self) -> bool {
        false // Reload failures are plugin-internal; the user's recourse is a host restart
    }

    fn user_message(&self) -> Option<&str> {
        None
    }
}
