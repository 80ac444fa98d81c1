//! Loaded Module Graph State
//!
//! The module graph is the resident form of the declared snapshot: one
//! `LoadedModule` per declared entry, in declared order. It only ever exists
//! fully initialized; the coordinator builds a complete graph before handing
//! it to the owning context, so no partially-initialized graph is externally
//! visible.

use crate::modules::api::{CommandSpec, ModuleNode, PluginModule};

/// One resident sub-module with its reload bookkeeping
#[derive(Debug)]
pub struct LoadedModule {
    pub node: ModuleNode,
    pub module: Box<dyn PluginModule>,
    /// Starts at 1 after first load, bumped after every successful reload
    pub generation: u64,
}

/// Ordered set of resident sub-modules (order = declared reload order)
#[derive(Debug)]
pub struct ModuleGraph {
    entries: Vec<LoadedModule>,
}

impl ModuleGraph {
    pub(crate) fn from_entries(entries: Vec<LoadedModule>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&LoadedModule> {
        self.entries.iter().find(|e| e.node.name == name)
    }

    /// Reload generation of a module, if resident
    pub fn generation(&self, name: &str) -> Option<u64> {
        self.get(name).map(|e| e.generation)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoadedModule> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut LoadedModule> {
        self.entries.iter_mut()
    }

    /// Commands advertised by all resident modules, in declared order
    pub fn advertised_commands(&self) -> Vec<CommandSpec> {
        self.entries
            .iter()
            .flat_map(|e| e.module.advertised_commands())
            .collect()
    }
}
