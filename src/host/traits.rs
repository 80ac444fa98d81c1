//! Host Trait
//!
//! Operations the host application provides, consumed synchronously by the
//! bootstrap sequence. All calls are assumed side-effecting and synchronous;
//! there are no suspension points anywhere in the bootstrap path.

use crate::host::error::HostResult;
use crate::host::types::{KeyBinding, MenuItem, ToolbarAction};
use crate::runtime::api::RuntimeVersion;

/// Capability set injected by the host application
pub trait Host: Send {
    /// Version of the host's embedded script interpreter
    fn runtime_version(&self) -> RuntimeVersion;

    /// Display a transient status message for `duration_ms` milliseconds
    ///
    /// One-way and best-effort: the call is never awaited, retried, or
    /// checked. A host that drops the message drops it silently.
    fn notify(&mut self, message: &str, duration_ms: u64);

    /// Register the plugin's menu entries
    fn register_menu_items(&mut self, items: &[MenuItem]) -> HostResult<()>;

    /// Register the plugin's toolbar action
    fn register_toolbar_action(&mut self, action: &ToolbarAction) -> HostResult<()>;

    /// Register the plugin's key bindings
    fn register_key_bindings(&mut self, bindings: &[KeyBinding]) -> HostResult<()>;
}
