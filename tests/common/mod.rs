//! Shared helpers for integration tests

use plugkit::host::api::{Host, HostError, HostResult, KeyBinding, MenuItem, ToolbarAction};
use plugkit::runtime::api::RuntimeVersion;

/// Host double that records every call made across the host boundary
#[derive(Debug)]
pub struct RecordingHost {
    pub version: RuntimeVersion,
    pub fail_menu: bool,
    pub fail_toolbar: bool,
    pub fail_key_bindings: bool,
    pub notifications: Vec<(String, u64)>,
    pub menu_items: Vec<MenuItem>,
    pub toolbar_actions: Vec<ToolbarAction>,
    pub key_bindings: Vec<KeyBinding>,
}

impl RecordingHost {
    pub fn new(version: RuntimeVersion) -> Self {
        Self {
            version,
            fail_menu: false,
            fail_toolbar: false,
            fail_key_bindings: false,
            notifications: Vec::new(),
            menu_items: Vec::new(),
            toolbar_actions: Vec::new(),
            key_bindings: Vec::new(),
        }
    }

    /// Simulate the host dropping its UI state (e.g. a workspace reset)
    pub fn clear_ui_state(&mut self) {
        self.menu_items.clear();
        self.toolbar_actions.clear();
        self.key_bindings.clear();
    }
}

impl Host for RecordingHost {
    fn runtime_version(&self) -> RuntimeVersion {
        self.version
    }

    fn notify(&mut self, message: &str, duration_ms: u64) {
        self.notifications.push((message.to_string(), duration_ms));
    }

    fn register_menu_items(&mut self, items: &[MenuItem]) -> HostResult<()> {
        if self.fail_menu {
            return Err(HostError::Rejected {
                operation: "register_menu_items".to_string(),
                message: "menu subsystem rejected the batch".to_string(),
            });
        }
        self.menu_items.extend_from_slice(items);
        Ok(())
    }

    fn register_toolbar_action(&mut self, action: &ToolbarAction) -> HostResult<()> {
        if self.fail_toolbar {
            return Err(HostError::Unavailable {
                message: "toolbar subsystem offline".to_string(),
            });
        }
        self.toolbar_actions.push(action.clone());
        Ok(())
    }

    fn register_key_bindings(&mut self, bindings: &[KeyBinding]) -> HostResult<()> {
        if self.fail_key_bindings {
            return Err(HostError::Rejected {
                operation: "register_key_bindings".to_string(),
                message: "binding conflict".to_string(),
            });
        }
        self.key_bindings.extend_from_slice(bindings);
        Ok(())
    }
}
