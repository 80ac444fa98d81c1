//! Type definitions for the sub-module system
//!
//! Static descriptions of sub-modules and the commands they contribute to
//! the host UI.

/// Static description of one logical sub-module
///
/// The `depends_on` list names modules that must be (re)loaded before this
/// one. The declared snapshot order already respects these edges; the edges
/// are carried for documentation and diagnostics, never recomputed into an
/// order at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode {
    pub name: &'static str,
    pub depends_on: &'static [&'static str],
}

/// A user-facing command a sub-module contributes to the host UI
///
/// Commands are collected from the freshly (re)loaded module graph and turned
/// into menu items, the toolbar action, and key bindings by the registration
/// sequencer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Stable command identifier, e.g. `scripts.generate_netlist`
    pub name: String,
    /// Human-readable label shown in the host UI
    pub label: String,
    /// Dot-separated menu path the command is registered under
    pub menu_path: String,
    /// Optional key sequence, e.g. `Ctrl+Shift+N`
    pub shortcut: Option<String>,
    /// Whether this command also contributes the toolbar action
    pub toolbar: bool,
}

impl CommandSpec {
    pub fn new(name: &str, label: &str, menu_path: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            menu_path: menu_path.to_string(),
            shortcut: None,
            toolbar: false,
        }
    }

    pub fn with_shortcut(mut self, shortcut: &str) -> Self {
        self.shortcut = Some(shortcut.to_string());
        self
    }

    pub fn on_toolbar(mut self) -> Self {
        self.toolbar = true;
        self
    }
}
