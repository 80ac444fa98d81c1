//! Plugin Sub-Module System
//!
//! The plugin is composed of logical sub-modules (utilities, geometry
//! helpers, user scripts, the simulation entry) that are initialized on first
//! load and re-initialized in declared dependency order on every reload pass.
//! The declared snapshot in `snapshot.rs` is the source of truth for both the
//! module set and the reload order.

// Internal modules - all access should go through api module
pub(crate) mod builtin;
pub(crate) mod error;
pub(crate) mod snapshot;
pub(crate) mod traits;
pub(crate) mod types;

// Public API module - the only public interface for the sub-module system
pub mod api;
