//! Geometry sub-module
//!
//! Registers the waveguide path generators the script commands operate on.
//! Depends on `utils` for unit handling.

use crate::modules::error::{ModuleError, ModuleResult};
use crate::modules::traits::PluginModule;
use crate::runtime::api::CapabilityProfile;

/// Description of one path generator the module provides
#[derive(Debug, Clone, PartialEq)]
pub struct PathGenerator {
    pub name: &'static str,
    /// Default path width in database units
    pub default_width: f64,
}

/// Waveguide path generators available to the script commands
#[derive(Debug)]
pub struct GeometryModule {
    generators: Vec<PathGenerator>,
}

impl GeometryModule {
    pub fn new() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    pub(crate) fn factory() -> Box<dyn PluginModule> {
        Box::new(Self::new())
    }

    fn build_generators(&mut self) -> ModuleResult<()> {
        self.generators = vec![
            PathGenerator {
                name: "straight",
                default_width: 500.0,
            },
            PathGenerator {
                name: "bend_90",
                default_width: 500.0,
            },
            PathGenerator {
                name: "taper",
                default_width: 500.0,
            },
        ];

        if self.generators.is_empty() {
            return Err(ModuleError::InitFailed {
                module_name: "geometry".to_string(),
                cause: "no path generators available".to_string(),
            });
        }
        Ok(())
    }

    pub fn generator(&self, name: &str) -> Option<&PathGenerator> {
        self.generators.iter().find(|g| g.name == name)
    }

    pub fn generator_count(&self) -> usize {
        self.generators.len()
    }
}

impl Default for GeometryModule {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginModule for GeometryModule {
    fn name(&self) -> &'static str {
        "geometry"
    }

    fn initialize(&mut self, _profile: &CapabilityProfile) -> ModuleResult<()> {
        self.build_generators()?;
        log::debug!("geometry: {} path generators registered", self.generators.len());
        Ok(())
    }

    fn reload(&mut self, profile: &CapabilityProfile) -> ModuleResult<()> {
        self.generators.clear();
        self.initialize(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::api::{resolve_capabilities, RuntimeVersion};

    fn profile() -> CapabilityProfile {
        resolve_capabilities(RuntimeVersion::new(3, 9)).unwrap()
    }

    #[test]
    fn test_initialize_registers_generators() {
        let mut module = GeometryModule::new();
        module.initialize(&profile()).unwrap();

        let straight = module.generator("straight").unwrap();
        assert_eq!(straight.default_width, 500.0);
        assert!(module.generator("spiral").is_none());
        assert_eq!(module.generator_count(), 3);
    }

    #[test]
    fn test_reload_keeps_generator_set_stable() {
        let mut module = GeometryModule::new();
        module.initialize(&profile()).unwrap();
        let before = module.generator_count();

        module.reload(&profile()).unwrap();
        assert_eq!(module.generator_count(), before);
    }
}
