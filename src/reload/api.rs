//! Public API for reload coordination
//!
//! External modules should import from here rather than directly from
//! internal modules.

// Coordinator entry point and outcome
pub use crate::reload::coordinator::{ensure_loaded, LoadOutcome};

// Resident graph state
pub use crate::reload::state::{LoadedModule, ModuleGraph};

// Error handling
pub use crate::reload::error::{ReloadError, ReloadResult};
