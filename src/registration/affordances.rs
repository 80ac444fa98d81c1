//! Affordance Derivation
//!
//! Turns the advertised commands of the freshly (re)loaded module graph into
//! the concrete affordances passed across the host boundary. Deriving from
//! the graph, rather than from a static table, is what ties registration to
//! the module state established by the preceding (re)load.

use crate::host::api::{KeyBinding, MenuItem, ToolbarAction};
use crate::reload::api::ModuleGraph;

/// Menu entries for every advertised command, in declared module order
pub fn menu_items(graph: &ModuleGraph) -> Vec<MenuItem> {
    graph
        .advertised_commands()
        .into_iter()
        .map(|command| MenuItem {
            path: command.menu_path,
            label: command.label,
            command: command.name,
        })
        .collect()
}

/// The toolbar action, taken from the first command flagged for the toolbar
pub fn toolbar_action(graph: &ModuleGraph) -> Option<ToolbarAction> {
    graph
        .advertised_commands()
        .into_iter()
        .find(|command| command.toolbar)
        .map(|command| ToolbarAction {
            label: command.label,
            command: command.name,
        })
}

/// Key bindings for every advertised command carrying a shortcut
pub fn key_bindings(graph: &ModuleGraph) -> Vec<KeyBinding> {
    graph
        .advertised_commands()
        .into_iter()
        .filter_map(|command| {
            command.shortcut.map(|keys| KeyBinding {
                keys,
                command: command.name,
            })
        })
        .collect()
}
