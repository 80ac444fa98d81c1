//! Bootstrap orchestration tests
//!
//! These drive the full sequence (capability resolution, load/reload,
//! registration) against isolated contexts and a recording host.

use crate::app::bootstrap::{bootstrap, run_bootstrap, BootstrapError};
use crate::core::context::{get_plugin_context, PluginContext};
use crate::host::api::{Host, HostError, HostResult, KeyBinding, MenuItem, ToolbarAction};
use crate::registration::api::RegistrationMilestone;
use crate::reload::api::LoadOutcome;
use crate::runtime::api::{ReloadPrimitive, RuntimeError, RuntimeVersion};
use serial_test::serial;

#[derive(Debug)]
struct RecordingHost {
    version: RuntimeVersion,
    fail_toolbar: bool,
    notifications: Vec<String>,
    menu_calls: usize,
    toolbar_calls: usize,
    key_binding_calls: usize,
}

impl RecordingHost {
    fn new(version: RuntimeVersion) -> Self {
        Self {
            version,
            fail_toolbar: false,
            notifications: Vec::new(),
            menu_calls: 0,
            toolbar_calls: 0,
            key_binding_calls: 0,
        }
    }
}

impl Host for RecordingHost {
    fn runtime_version(&self) -> RuntimeVersion {
        self.version
    }

    fn notify(&mut self, message: &str, _duration_ms: u64) {
        self.notifications.push(message.to_string());
    }

    fn register_menu_items(&mut self, _items: &[MenuItem]) -> HostResult<()> {
        self.menu_calls += 1;
        Ok(())
    }

    fn register_toolbar_action(&mut self, _action: &ToolbarAction) -> HostResult<()> {
        self.toolbar_calls += 1;
        if self.fail_toolbar {
            return Err(HostError::Unavailable {
                message: "toolbar not ready".to_string(),
            });
        }
        Ok(())
    }

    fn register_key_bindings(&mut self, _bindings: &[KeyBinding]) -> HostResult<()> {
        self.key_binding_calls += 1;
        Ok(())
    }
}

#[test]
fn test_first_pass_is_first_load() {
    let mut ctx = PluginContext::new();
    let mut host = RecordingHost::new(RuntimeVersion::new(3, 9));

    let summary = run_bootstrap(&mut ctx, &mut host).unwrap();

    assert_eq!(summary.outcome, LoadOutcome::FirstLoad);
    assert!(summary.registration.is_complete());
    assert!(ctx.is_loaded());
    assert_eq!(ctx.bootstrap_passes(), 1);
    assert_eq!(
        ctx.capability_profile().unwrap().reload_primitive,
        ReloadPrimitive::Modern
    );
}

#[test]
fn test_second_pass_is_reload() {
    let mut ctx = PluginContext::new();
    let mut host = RecordingHost::new(RuntimeVersion::new(3, 9));

    let first = run_bootstrap(&mut ctx, &mut host).unwrap();
    let second = run_bootstrap(&mut ctx, &mut host).unwrap();

    assert_eq!(first.outcome, LoadOutcome::FirstLoad);
    assert_eq!(second.outcome, LoadOutcome::Reloaded);
    assert_eq!(ctx.bootstrap_passes(), 2);

    // Every declared module was reloaded exactly once on the second pass
    for entry in ctx.graph().unwrap().iter() {
        assert_eq!(entry.generation, 2, "module '{}'", entry.node.name);
    }
}

#[test]
fn test_registration_runs_on_both_passes() {
    let mut ctx = PluginContext::new();
    let mut host = RecordingHost::new(RuntimeVersion::new(3, 9));

    run_bootstrap(&mut ctx, &mut host).unwrap();
    run_bootstrap(&mut ctx, &mut host).unwrap();

    // The host may have lost its UI state, so registration is unconditional
    assert_eq!(host.menu_calls, 2);
    assert_eq!(host.toolbar_calls, 2);
    assert_eq!(host.key_binding_calls, 2);
}

#[test]
fn test_unsupported_runtime_aborts_before_load() {
    let mut ctx = PluginContext::new();
    let mut host = RecordingHost::new(RuntimeVersion::new(4, 0));

    let error = run_bootstrap(&mut ctx, &mut host).unwrap_err();

    assert_eq!(
        error,
        BootstrapError::Runtime(RuntimeError::UnsupportedRuntime { major: 4, minor: 0 })
    );
    // No partial state was created
    assert!(!ctx.is_loaded());
    assert!(ctx.capability_profile().is_none());
    assert_eq!(ctx.bootstrap_passes(), 0);
}

#[test]
fn test_legacy_runtime_bootstraps_successfully() {
    let mut ctx = PluginContext::new();
    let mut host = RecordingHost::new(RuntimeVersion::new(3, 3));

    run_bootstrap(&mut ctx, &mut host).unwrap();
    assert_eq!(
        ctx.capability_profile().unwrap().reload_primitive,
        ReloadPrimitive::Legacy
    );
}

#[test]
fn test_partial_registration_still_counts_as_a_pass() {
    let mut ctx = PluginContext::new();
    let mut host = RecordingHost::new(RuntimeVersion::new(3, 9));
    host.fail_toolbar = true;

    let summary = run_bootstrap(&mut ctx, &mut host).unwrap();

    assert!(!summary.registration.is_complete());
    assert!(summary
        .registration
        .reached(RegistrationMilestone::MenuItemsRegistered));
    assert!(!summary
        .registration
        .reached(RegistrationMilestone::ToolbarRegistered));
    assert!(summary
        .registration
        .reached(RegistrationMilestone::InitComplete));
    assert_eq!(ctx.bootstrap_passes(), 1);
}

#[test]
fn test_action_buffer_accumulates_across_passes() {
    let mut ctx = PluginContext::new();
    let mut host = RecordingHost::new(RuntimeVersion::new(3, 9));

    run_bootstrap(&mut ctx, &mut host).unwrap();
    let after_first = ctx.actions().len();
    assert!(after_first > 0);

    run_bootstrap(&mut ctx, &mut host).unwrap();
    assert_eq!(ctx.actions().len(), after_first * 2);

    // The last published record belongs to the second pass
    let snapshot = ctx.actions().snapshot();
    assert_eq!(snapshot.last().unwrap().sequence, snapshot.len() as u64);
}

#[test]
fn test_milestones_are_notified_in_order() {
    let mut ctx = PluginContext::new();
    let mut host = RecordingHost::new(RuntimeVersion::new(3, 9));

    run_bootstrap(&mut ctx, &mut host).unwrap();

    assert_eq!(
        host.notifications,
        vec![
            "Menu items registered".to_string(),
            "Toolbar action registered".to_string(),
            "Key bindings registered".to_string(),
            "Plugin initialization complete".to_string(),
        ]
    );
}

#[test]
fn test_load_failure_notice_wording_follows_variant() {
    use crate::app::bootstrap::load_failure_notice;
    use crate::reload::api::ReloadError;

    let first_load = ReloadError::FirstLoadFailed {
        module_name: "utils".to_string(),
        cause: "missing tables".to_string(),
    };
    let reload = ReloadError::ReloadFailed {
        module_name: "utils".to_string(),
        cause: "missing tables".to_string(),
    };

    assert!(load_failure_notice(&first_load).starts_with("Plugin load failed:"));
    assert!(load_failure_notice(&reload).starts_with("Plugin reload failed:"));
}

#[test]
#[serial]
fn test_shared_context_entry_point() {
    {
        let mut ctx = get_plugin_context();
        ctx.reset();
    }

    let mut host = RecordingHost::new(RuntimeVersion::new(3, 9));
    let first = bootstrap(&mut host).unwrap();
    let second = bootstrap(&mut host).unwrap();

    assert_eq!(first.outcome, LoadOutcome::FirstLoad);
    assert_eq!(second.outcome, LoadOutcome::Reloaded);

    // Leave the shared context clean for other serial tests
    get_plugin_context().reset();
}
