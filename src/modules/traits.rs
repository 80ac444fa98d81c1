//! Sub-Module Trait System
//!
//! Core trait implemented by every logical sub-module of the plugin.
//!
//! # Reload protocol
//!
//! The host process never unloads this plugin's code; "reloading" a module
//! means re-running its initialization against fresh internal state. Every
//! module must therefore make `reload` safe to call any number of times on an
//! already-initialized instance: discard the previous state first, then
//! rebuild it exactly as `initialize` would.

use crate::modules::error::ModuleResult;
use crate::modules::types::CommandSpec;
use crate::runtime::api::CapabilityProfile;

/// Base trait that all plugin sub-modules must implement
pub trait PluginModule: std::fmt::Debug + Send {
    /// Stable module name, matching the declared snapshot entry
    fn name(&self) -> &'static str;

    /// One-time initialization performed on first load
    fn initialize(&mut self, profile: &CapabilityProfile) -> ModuleResult<()>;

    /// Re-initialization performed on every reload pass
    ///
    /// Must discard previously built state and rebuild it from scratch, so
    /// that a completed reload leaves the module indistinguishable from a
    /// freshly initialized one.
    fn reload(&mut self, profile: &CapabilityProfile) -> ModuleResult<()>;

    /// Commands this module contributes to the host UI
    ///
    /// Defaults to none. Only modules with user-facing entry points override
    /// this.
    fn advertised_commands(&self) -> Vec<CommandSpec> {
        Vec::new()
    }
}
