//! Registration Sequencer
//!
//! Runs the three registration steps in fixed order against the host and
//! publishes an action record for every affordance a successful step
//! registered. Registration is unconditional on every bootstrap pass: the
//! host may have lost its menu, toolbar, and key-binding state even though
//! the plugin modules are still resident. Whether repeated registration
//! duplicates host-side entries is the host's concern; the sequencer never
//! dedups.

use crate::actions::api::{ActionBuffer, ActionKind, ActionRecord};
use crate::host::api::{Host, HostError};
use crate::registration::affordances;
use crate::registration::milestone::{RegistrationMilestone, RegistrationStep};
use crate::reload::api::ModuleGraph;

/// Display duration for every transient status notification
pub const STATUS_DURATION_MS: u64 = 2000;

/// One failed registration step
#[derive(Debug)]
pub struct RegistrationFailure {
    pub step: RegistrationStep,
    pub error: HostError,
}

/// Result of a registration pass
///
/// A milestone appears in `milestones` only if its step did not fail;
/// failures carry the host error per step. Both lists together describe
/// partial success.
#[derive(Debug, Default)]
pub struct RegistrationReport {
    pub milestones: Vec<RegistrationMilestone>,
    pub failures: Vec<RegistrationFailure>,
}

impl RegistrationReport {
    /// True if every step reached its milestone
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn reached(&self, milestone: RegistrationMilestone) -> bool {
        self.milestones.contains(&milestone)
    }
}

/// Register all UI affordance groups against the host
///
/// Steps run in fixed order (menu, toolbar, key bindings) because later
/// affordances may reference state established by earlier ones. Each step is
/// independently attempted; a failure is recorded, notified, and skipped
/// over. The pass always ends with the `InitComplete` milestone.
pub fn register_all(
    host: &mut dyn Host,
    graph: &ModuleGraph,
    actions: &ActionBuffer,
) -> RegistrationReport {
    let mut report = RegistrationReport::default();

    // Step 1: menu items
    let items = affordances::menu_items(graph);
    match host.register_menu_items(&items) {
        Ok(()) => {
            for item in &items {
                actions.publish(ActionRecord::new(
                    ActionKind::MenuItem,
                    item.label.clone(),
                    item.command.clone(),
                ));
            }
            milestone_reached(
                host,
                &mut report,
                RegistrationMilestone::MenuItemsRegistered,
            );
        }
        Err(error) => step_failed(host, &mut report, RegistrationStep::MenuItems, error),
    }

    // Step 2: toolbar action
    match affordances::toolbar_action(graph) {
        Some(action) => match host.register_toolbar_action(&action) {
            Ok(()) => {
                actions.publish(ActionRecord::new(
                    ActionKind::ToolbarAction,
                    action.label.clone(),
                    action.command.clone(),
                ));
                milestone_reached(host, &mut report, RegistrationMilestone::ToolbarRegistered);
            }
            Err(error) => step_failed(host, &mut report, RegistrationStep::ToolbarAction, error),
        },
        None => {
            // Nothing to register counts as a completed step
            log::debug!("No toolbar command advertised, skipping toolbar registration");
            milestone_reached(host, &mut report, RegistrationMilestone::ToolbarRegistered);
        }
    }

    // Step 3: key bindings
    let bindings = affordances::key_bindings(graph);
    match host.register_key_bindings(&bindings) {
        Ok(()) => {
            for binding in &bindings {
                actions.publish(ActionRecord::new(
                    ActionKind::KeyBinding,
                    binding.keys.clone(),
                    binding.command.clone(),
                ));
            }
            milestone_reached(
                host,
                &mut report,
                RegistrationMilestone::KeyBindingsRegistered,
            );
        }
        Err(error) => step_failed(host, &mut report, RegistrationStep::KeyBindings, error),
    }

    // Completion is notified even after partial failure
    host.notify(
        &RegistrationMilestone::InitComplete.to_string(),
        STATUS_DURATION_MS,
    );
    report.milestones.push(RegistrationMilestone::InitComplete);

    report
}

fn milestone_reached(
    host: &mut dyn Host,
    report: &mut RegistrationReport,
    milestone: RegistrationMilestone,
) {
    log::info!("{}", milestone);
    host.notify(&milestone.to_string(), STATUS_DURATION_MS);
    report.milestones.push(milestone);
}

fn step_failed(
    host: &mut dyn Host,
    report: &mut RegistrationReport,
    step: RegistrationStep,
    error: HostError,
) {
    log::warn!("Registration of {} failed: {}", step, error);
    host.notify(
        &format!("Registration of {} failed: {}", step, error),
        STATUS_DURATION_MS,
    );
    report.failures.push(RegistrationFailure { step, error });
}
