//! Bootstrap Entry Point
//!
//! The single sequence the host triggers: resolve runtime capabilities
//! (first pass only), load or reload the module graph, then re-register all
//! UI affordances. The whole sequence runs synchronously on the host's
//! calling thread with no suspension points; there are no internal timeouts.

use crate::core::context::{get_plugin_context, PluginContext};
use crate::host::api::Host;
use crate::registration::api::{register_all, RegistrationReport, STATUS_DURATION_MS};
use crate::reload::api::{ensure_loaded, LoadOutcome, ReloadError};
use crate::runtime::api::{resolve_capabilities, RuntimeError};
use std::fmt;

/// Result of one completed bootstrap pass
#[derive(Debug)]
pub struct BootstrapSummary {
    pub outcome: LoadOutcome,
    pub registration: RegistrationReport,
}

/// Fatal bootstrap errors
///
/// Registration failures never appear here; they are converted to status
/// notifications and reported through the registration report instead.
#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapError {
    /// The host runtime has no known reload strategy
    Runtime(RuntimeError),
    /// Loading or reloading the module graph failed
    Reload(ReloadError),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::Runtime(e) => write!(f, "{}", e),
            BootstrapError::Reload(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for BootstrapError {}

impl From<RuntimeError> for BootstrapError {
    fn from(error: RuntimeError) -> Self {
        BootstrapError::Runtime(error)
    }
}

impl From<ReloadError> for BootstrapError {
    fn from(error: ReloadError) -> Self {
        BootstrapError::Reload(error)
    }
}

impl crate::core::error_handling::ContextualError for BootstrapError {
    fn is_user_actionable(&self) -> bool {
        false
    }

    fn user_message(&self) -> Option<&str> {
        None
    }
}

/// Run one bootstrap pass against an explicit context
///
/// Capability resolution happens on the first pass only; the resolved
/// profile is cached on the context and reused by every later pass.
/// Registration runs unconditionally after a successful load or reload.
pub fn run_bootstrap(
    ctx: &mut PluginContext,
    host: &mut dyn Host,
) -> Result<BootstrapSummary, BootstrapError> {
    let profile = match ctx.capability_profile() {
        Some(profile) => *profile,
        None => {
            let resolved = resolve_capabilities(host.runtime_version())?;
            log::info!(
                "Resolved runtime {} with {:?} reload primitive",
                resolved.version,
                resolved.reload_primitive
            );
            ctx.set_capability_profile(resolved);
            resolved
        }
    };

    let outcome = match ensure_loaded(ctx.graph_slot_mut(), &profile) {
        Ok(outcome) => outcome,
        Err(error) => {
            // Load failures are shown to the user via the host's own surface
            host.notify(&load_failure_notice(&error), STATUS_DURATION_MS);
            return Err(error.into());
        }
    };

    // Graph is resident after a successful ensure_loaded
    let registration = match ctx.graph() {
        Some(graph) => register_all(host, graph, ctx.actions()),
        None => {
            return Err(BootstrapError::Reload(ReloadError::FirstLoadFailed {
                module_name: "root".to_string(),
                cause: "module graph absent after load".to_string(),
            }))
        }
    };

    ctx.record_pass();

    Ok(BootstrapSummary {
        outcome,
        registration,
    })
}

/// User-facing notification for a failed load or reload
///
/// The wording follows the error variant: a failed first load is reported as
/// a load failure, not a reload failure.
pub(crate) fn load_failure_notice(error: &ReloadError) -> String {
    match error {
        ReloadError::FirstLoadFailed { .. } => format!("Plugin load failed: {}", error),
        ReloadError::ReloadFailed { .. } => format!("Plugin reload failed: {}", error),
    }
}

/// Run one bootstrap pass against the shared process-wide context
///
/// This is the entry the host invokes on startup and on every
/// menu-triggered reload. Holding the context guard for the whole pass
/// guarantees at most one bootstrap sequence runs at a time.
pub fn bootstrap(host: &mut dyn Host) -> Result<BootstrapSummary, BootstrapError> {
    let mut ctx = get_plugin_context();
    run_bootstrap(&mut ctx, host)
}
