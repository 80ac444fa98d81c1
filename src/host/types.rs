//! Affordance types passed across the host boundary

/// One menu entry to register
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Dot-separated menu path, e.g. `tools.circuit_design`
    pub path: String,
    pub label: String,
    /// Command identifier invoked when the entry is activated
    pub command: String,
}

/// The single toolbar action to register
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarAction {
    pub label: String,
    pub command: String,
}

/// One key binding to register
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    /// Key sequence in the host's notation, e.g. `Ctrl+Shift+S`
    pub keys: String,
    pub command: String,
}
