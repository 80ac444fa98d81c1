//! Public API for the host boundary
//!
//! External modules should import from here rather than directly from
//! internal modules.

// Host trait and affordance types
pub use crate::host::traits::Host;
pub use crate::host::types::{KeyBinding, MenuItem, ToolbarAction};

// Demo implementation
pub use crate::host::console::ConsoleHost;

// Error handling
pub use crate::host::error::{HostError, HostResult};
