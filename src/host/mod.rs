//! Host Application Interface
//!
//! The small, fixed set of operations the long-running host application
//! provides to the plugin: transient status notifications and the three UI
//! registration calls. The host is injected as a capability set so tests can
//! substitute recording implementations.

// Internal modules - all access should go through api module
pub(crate) mod console;
pub(crate) mod error;
pub(crate) mod traits;
pub(crate) mod types;

// Public API module - the only public interface for the host boundary
pub mod api;
