//! Registered Action Buffer
//!
//! Process-wide, append-only record of every UI action the registration
//! sequencer has published. Other tools read snapshots of the buffer to
//! enumerate currently registered actions without re-running the bootstrap.

// Internal modules - all access should go through api module
pub(crate) mod buffer;
pub(crate) mod record;

// Public API module - the only public interface for the action buffer
pub mod api;
