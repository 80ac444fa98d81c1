//! Reload Coordination
//!
//! Decides whether a bootstrap invocation is the first load of the plugin or
//! a re-entrant reload of an already-resident plugin, and on reload
//! re-initializes every declared sub-module strictly in declared order.

// Internal modules - all access should go through api module
pub(crate) mod coordinator;
pub(crate) mod error;
pub(crate) mod state;

// Public API module - the only public interface for reload coordination
pub mod api;
