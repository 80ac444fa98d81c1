//! Reload Coordinator
//!
//! `ensure_loaded` is the single decision point between first load and
//! reload. The graph slot it operates on lives in the owning
//! `PluginContext`; because the whole pass runs under the context's exclusive
//! borrow, no reader ever observes a module mid-reload.

use crate::modules::api::{declared_modules, DeclaredModule, PluginModule};
use crate::modules::types::ModuleNode;
use crate::reload::error::{ReloadError, ReloadResult};
use crate::reload::state::{LoadedModule, ModuleGraph};
use crate::runtime::api::CapabilityProfile;

/// Outcome of an `ensure_loaded` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The plugin was not resident; the module graph was built and initialized
    FirstLoad,
    /// The plugin was already resident; every module was re-initialized
    Reloaded,
}

/// Load the plugin if absent, otherwise reload every resident module
///
/// First load instantiates and initializes every declared module in declared
/// order; no per-module *re*load happens on this path. A later call with the
/// graph already present runs a full reload pass instead. Calling this twice
/// without a process restart therefore always yields `Reloaded` the second
/// time.
pub fn ensure_loaded(
    slot: &mut Option<ModuleGraph>,
    profile: &CapabilityProfile,
) -> ReloadResult<LoadOutcome> {
    match slot {
        None => {
            let graph = initialize_graph(instantiate_declared(), profile)?;
            log::info!("First load complete: {} modules resident", graph.len());
            *slot = Some(graph);
            Ok(LoadOutcome::FirstLoad)
        }
        Some(graph) => {
            reload_graph(graph, profile)?;
            log::info!("Reload pass complete: {} modules refreshed", graph.len());
            Ok(LoadOutcome::Reloaded)
        }
    }
}

fn instantiate_declared() -> Vec<(ModuleNode, Box<dyn PluginModule>)> {
    declared_modules()
        .into_iter()
        .map(|DeclaredModule { node, factory }| (node, factory()))
        .collect()
}

/// Initialize freshly constructed modules into a complete graph
///
/// On any failure the partially built graph is dropped, so the caller's slot
/// stays absent and a later bootstrap attempt retries the first load.
pub(crate) fn initialize_graph(
    modules: Vec<(ModuleNode, Box<dyn PluginModule>)>,
    profile: &CapabilityProfile,
) -> ReloadResult<ModuleGraph> {
    let mut entries = Vec::with_capacity(modules.len());

    for (node, mut module) in modules {
        log::trace!("Initializing module '{}'", node.name);
        module
            .initialize(profile)
            .map_err(|e| ReloadError::FirstLoadFailed {
                module_name: node.name.to_string(),
                cause: e.to_string(),
            })?;

        entries.push(LoadedModule {
            node,
            module,
            generation: 1,
        });
    }

    Ok(ModuleGraph::from_entries(entries))
}

/// Re-initialize every resident module strictly in declared order
///
/// A module's generation is bumped only after its reload returned Ok. On
/// failure the pass aborts with no rollback; already-reloaded modules keep
/// their new generation while the failed module and everything after it stay
/// at the old one.
pub(crate) fn reload_graph(
    graph: &mut ModuleGraph,
    profile: &CapabilityProfile,
) -> ReloadResult<()> {
    for entry in graph.iter_mut() {
        log::trace!(
            "Reloading module '{}' (generation {})",
            entry.node.name,
            entry.generation
        );

        entry
            .module
            .reload(profile)
            .map_err(|e| ReloadError::ReloadFailed {
                module_name: entry.node.name.to_string(),
                cause: e.to_string(),
            })?;

        entry.generation += 1;
    }

    Ok(())
}
