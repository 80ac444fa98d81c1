//! Public API for the sub-module system
//!
//! External modules should import from here rather than directly from
//! internal modules.

// Core trait and types
pub use crate::modules::traits::PluginModule;
pub use crate::modules::types::{CommandSpec, ModuleNode};

// Declared snapshot
pub use crate::modules::snapshot::{declared_modules, DeclaredModule};

// Built-in sub-modules
pub use crate::modules::builtin::geometry::{GeometryModule, PathGenerator};
pub use crate::modules::builtin::scripts::{ScriptsModule, SCRIPT_MENU_PATH};
pub use crate::modules::builtin::simulation::SimulationModule;
pub use crate::modules::builtin::utils::UtilsModule;

// Error handling
pub use crate::modules::error::{ModuleError, ModuleResult};
