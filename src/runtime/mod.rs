//! Runtime Capability Resolution
//!
//! The host application embeds a script interpreter whose module-reload
//! behaviour differs between interpreter generations. This module resolves,
//! once per bootstrap context, which reload primitive is available so that no
//! other part of the system has to branch on version numbers.

// Internal modules - all access should go through api module
pub(crate) mod capabilities;
pub(crate) mod error;

// Public API module - the only public interface for runtime capabilities
pub mod api;
