//! Utilities sub-module
//!
//! Shared helpers for the other sub-modules: unit conversion tables and cell
//! name sanitation. Every other sub-module declares a dependency on this one.

use crate::modules::error::ModuleResult;
use crate::modules::traits::PluginModule;
use crate::runtime::api::CapabilityProfile;
use std::collections::HashMap;

/// Shared helper tables used by the other sub-modules
#[derive(Debug)]
pub struct UtilsModule {
    /// Scale factors from named length units to database units
    unit_scales: HashMap<String, f64>,
    ready: bool,
}

impl UtilsModule {
    pub fn new() -> Self {
        Self {
            unit_scales: HashMap::new(),
            ready: false,
        }
    }

    pub(crate) fn factory() -> Box<dyn PluginModule> {
        Box::new(Self::new())
    }

    fn build_tables(&mut self) {
        // Database unit is 1 nanometre
        self.unit_scales.insert("nm".to_string(), 1.0);
        self.unit_scales.insert("um".to_string(), 1_000.0);
        self.unit_scales.insert("mm".to_string(), 1_000_000.0);
    }

    /// Scale factor from a named length unit to database units
    pub fn unit_scale(&self, unit: &str) -> Option<f64> {
        self.unit_scales.get(unit).copied()
    }

    /// Replace characters the host's cell namespace rejects
    pub fn sanitize_cell_name(name: &str) -> String {
        name.chars()
            .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
            .collect()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

impl Default for UtilsModule {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginModule for UtilsModule {
    fn name(&self) -> &'static str {
        "utils"
    }

    fn initialize(&mut self, _profile: &CapabilityProfile) -> ModuleResult<()> {
        self.build_tables();
        self.ready = true;
        log::debug!("utils: {} unit scales registered", self.unit_scales.len());
        Ok(())
    }

    fn reload(&mut self, profile: &CapabilityProfile) -> ModuleResult<()> {
        self.unit_scales.clear();
        self.ready = false;
        self.initialize(profile)
    }
}
