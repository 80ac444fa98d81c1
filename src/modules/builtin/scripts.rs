//! Scripts sub-module
//!
//! The user-facing script commands exposed through the host's menu. This is
//! the module whose command table feeds menu and key-binding registration.
//! Depends on `utils` and `geometry`.

use crate::modules::error::ModuleResult;
use crate::modules::traits::PluginModule;
use crate::modules::types::CommandSpec;
use crate::runtime::api::CapabilityProfile;

/// Menu path all script commands are registered under
pub const SCRIPT_MENU_PATH: &str = "tools.circuit_design";

/// User-facing script commands contributed to the host menu
#[derive(Debug)]
pub struct ScriptsModule {
    commands: Vec<CommandSpec>,
}

impl ScriptsModule {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub(crate) fn factory() -> Box<dyn PluginModule> {
        Box::new(Self::new())
    }

    fn build_commands(&mut self) {
        self.commands = vec![
            CommandSpec::new(
                "scripts.generate_netlist",
                "Generate Circuit Netlist",
                SCRIPT_MENU_PATH,
            )
            .with_shortcut("Ctrl+Shift+N"),
            CommandSpec::new(
                "scripts.annotate_ports",
                "Annotate Optical Ports",
                SCRIPT_MENU_PATH,
            ),
            CommandSpec::new(
                "scripts.measure_path_length",
                "Measure Waveguide Length",
                SCRIPT_MENU_PATH,
            )
            .with_shortcut("Ctrl+Shift+L"),
        ];
    }

    pub fn command(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }
}

impl Default for ScriptsModule {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginModule for ScriptsModule {
    fn name(&self) -> &'static str {
        "scripts"
    }

    fn initialize(&mut self, _profile: &CapabilityProfile) -> ModuleResult<()> {
        self.build_commands();
        log::debug!("scripts: {} commands available", self.commands.len());
        Ok(())
    }

    fn reload(&mut self, profile: &CapabilityProfile) -> ModuleResult<()> {
        self.commands.clear();
        self.initialize(profile)
    }

    fn advertised_commands(&self) -> Vec<CommandSpec> {
        self.commands.clone()
    }
}
