//! Console host implementation
//!
//! Stands in for a real host application when the bootstrap is driven from
//! the demo binary. Every host operation is logged and succeeds.

use crate::host::error::HostResult;
use crate::host::traits::Host;
use crate::host::types::{KeyBinding, MenuItem, ToolbarAction};
use crate::runtime::api::RuntimeVersion;

/// Host implementation that logs every call to the console
#[derive(Debug)]
pub struct ConsoleHost {
    version: RuntimeVersion,
}

impl ConsoleHost {
    pub fn new(version: RuntimeVersion) -> Self {
        Self { version }
    }
}

impl Host for ConsoleHost {
    fn runtime_version(&self) -> RuntimeVersion {
        self.version
    }

    fn notify(&mut self, message: &str, duration_ms: u64) {
        log::info!("[status {}ms] {}", duration_ms, message);
    }

    fn register_menu_items(&mut self, items: &[MenuItem]) -> HostResult<()> {
        for item in items {
            log::info!("menu: {} -> {} ({})", item.path, item.label, item.command);
        }
        Ok(())
    }

    fn register_toolbar_action(&mut self, action: &ToolbarAction) -> HostResult<()> {
        log::info!("toolbar: {} ({})", action.label, action.command);
        Ok(())
    }

    fn register_key_bindings(&mut self, bindings: &[KeyBinding]) -> HostResult<()> {
        for binding in bindings {
            log::info!("key binding: {} -> {}", binding.keys, binding.command);
        }
        Ok(())
    }
}
