//! Public API for the action buffer
//!
//! External modules should import from here rather than directly from
//! internal modules.

// Buffer and record types
pub use crate::actions::buffer::ActionBuffer;
pub use crate::actions::record::{ActionKind, ActionRecord};
