//! Declared Sub-Module Snapshot
//!
//! Hand-maintained list of the logical sub-modules that make up the plugin.
//! The list order IS the reload order: every module appears after every
//! module it depends on. The coordinator trusts this order as declared and
//! never recomputes it, so any change here must keep the list a valid
//! topological order of the dependency edges.

use crate::modules::builtin::geometry::GeometryModule;
use crate::modules::builtin::scripts::ScriptsModule;
use crate::modules::builtin::simulation::SimulationModule;
use crate::modules::builtin::utils::UtilsModule;
use crate::modules::traits::PluginModule;
use crate::modules::types::ModuleNode;

/// One declared sub-module: its static description plus a factory
#[derive(Debug, Clone)]
pub struct DeclaredModule {
    pub node: ModuleNode,
    pub factory: fn() -> Box<dyn PluginModule>,
}

/// The fixed sub-module list, in reload order
pub fn declared_modules() -> Vec<DeclaredModule> {
    vec![
        DeclaredModule {
            node: ModuleNode {
                name: "utils",
                depends_on: &[],
            },
            factory: UtilsModule::factory,
        },
        DeclaredModule {
            node: ModuleNode {
                name: "geometry",
                depends_on: &["utils"],
            },
            factory: GeometryModule::factory,
        },
        DeclaredModule {
            node: ModuleNode {
                name: "scripts",
                depends_on: &["utils", "geometry"],
            },
            factory: ScriptsModule::factory,
        },
        DeclaredModule {
            node: ModuleNode {
                name: "simulation",
                depends_on: &["scripts"],
            },
            factory: SimulationModule::factory,
        },
    ]
}
