//! UI Registration Sequencing
//!
//! After every successful load or reload, the sequencer (re-)registers the
//! plugin's UI affordances against the host in fixed order: menu items, then
//! the toolbar action, then key bindings. Step failures are recorded and
//! notified but never stop the remaining steps.

// Internal modules - all access should go through api module
pub(crate) mod affordances;
pub(crate) mod milestone;
pub(crate) mod sequencer;

// Public API module - the only public interface for registration
pub mod api;
