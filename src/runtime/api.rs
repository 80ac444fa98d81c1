//! Public API for runtime capability resolution
//!
//! External modules should import from here rather than directly from
//! internal modules.

// Capability types and resolution
pub use crate::runtime::capabilities::{
    resolve_capabilities, CapabilityProfile, ReloadPrimitive, RuntimeVersion,
};

// Error handling
pub use crate::runtime::error::{RuntimeError, RuntimeResult};
