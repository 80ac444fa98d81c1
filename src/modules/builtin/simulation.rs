//! Simulation sub-module
//!
//! Contributes the circuit-simulation command, which is also the toolbar
//! action. Depends on `scripts` since the simulation entry reuses the netlist
//! command's output.

use crate::modules::error::ModuleResult;
use crate::modules::traits::PluginModule;
use crate::modules::types::CommandSpec;
use crate::runtime::api::CapabilityProfile;

/// The simulation entry point contributed to menu and toolbar
#[derive(Debug)]
pub struct SimulationModule {
    command: Option<CommandSpec>,
}

impl SimulationModule {
    pub fn new() -> Self {
        Self { command: None }
    }

    pub(crate) fn factory() -> Box<dyn PluginModule> {
        Box::new(Self::new())
    }

    fn build_command(&mut self) {
        self.command = Some(
            CommandSpec::new(
                "simulation.run",
                "Run Circuit Simulation",
                "tools.circuit_design",
            )
            .with_shortcut("Ctrl+Shift+S")
            .on_toolbar(),
        );
    }
}

impl Default for SimulationModule {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginModule for SimulationModule {
    fn name(&self) -> &'static str {
        "simulation"
    }

    fn initialize(&mut self, _profile: &CapabilityProfile) -> ModuleResult<()> {
        self.build_command();
        log::debug!("simulation: toolbar command available");
        Ok(())
    }

    fn reload(&mut self, profile: &CapabilityProfile) -> ModuleResult<()> {
        self.command = None;
        self.initialize(profile)
    }

    fn advertised_commands(&self) -> Vec<CommandSpec> {
        self.command.clone().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::api::{resolve_capabilities, RuntimeVersion};

    #[test]
    fn test_simulation_command_is_toolbar_entry() {
        let profile = resolve_capabilities(RuntimeVersion::new(3, 9)).unwrap();
        let mut module = SimulationModule::new();
        module.initialize(&profile).unwrap();

        let commands = module.advertised_commands();
        assert_eq!(commands.len(), 1);
        assert!(commands[0].toolbar);
        assert_eq!(commands[0].name, "simulation.run");
    }
}
