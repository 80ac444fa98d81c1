//! Built-in Plugin Sub-Modules
//!
//! The logical sub-modules that make up the plugin, each constructed through
//! a factory function referenced by the declared snapshot.

pub(crate) mod geometry;
pub(crate) mod scripts;
pub(crate) mod simulation;
pub(crate) mod utils;
