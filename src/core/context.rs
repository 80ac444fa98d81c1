//! Plugin Bootstrap Context
//!
//! The explicitly owned home of all process-wide plugin state: the resolved
//! capability profile, the resident module graph, and the action buffer.
//! Exactly one context exists per host process in production (the shared
//! instance below); tests construct isolated instances instead of touching
//! process-wide state.
//!
//! # Lifecycle
//!
//! A context starts empty (no profile, no graph). The first bootstrap pass
//! resolves capabilities and performs the first load; later passes reuse the
//! profile and reload the graph. `reset` returns the context to its initial
//! empty state, after which the next bootstrap behaves like a fresh process.

use crate::actions::api::ActionBuffer;
use crate::reload::api::ModuleGraph;
use crate::runtime::api::CapabilityProfile;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard};

/// Process-wide plugin state, mutated only by the bootstrap sequence
#[derive(Debug)]
pub struct PluginContext {
    profile: Option<CapabilityProfile>,
    graph: Option<ModuleGraph>,
    actions: ActionBuffer,
    bootstrap_passes: u64,
}

impl PluginContext {
    pub fn new() -> Self {
        Self {
            profile: None,
            graph: None,
            actions: ActionBuffer::new(),
            bootstrap_passes: 0,
        }
    }

    /// Capability profile, present after the first bootstrap pass
    pub fn capability_profile(&self) -> Option<&CapabilityProfile> {
        self.profile.as_ref()
    }

    pub(crate) fn set_capability_profile(&mut self, profile: CapabilityProfile) {
        self.profile = Some(profile);
    }

    /// Whether a module graph is resident
    pub fn is_loaded(&self) -> bool {
        self.graph.is_some()
    }

    /// Resident module graph, if any
    pub fn graph(&self) -> Option<&ModuleGraph> {
        self.graph.as_ref()
    }

    pub(crate) fn graph_slot_mut(&mut self) -> &mut Option<ModuleGraph> {
        &mut self.graph
    }

    /// The process-wide action buffer
    pub fn actions(&self) -> &ActionBuffer {
        &self.actions
    }

    /// Number of completed bootstrap passes
    pub fn bootstrap_passes(&self) -> u64 {
        self.bootstrap_passes
    }

    pub(crate) fn record_pass(&mut self) {
        self.bootstrap_passes += 1;
    }

    /// Return the context to its pre-first-load state
    ///
    /// Drops the module graph and capability profile and replaces the action
    /// buffer. The next bootstrap pass performs a first load again.
    pub fn reset(&mut self) {
        self.profile = None;
        self.graph = None;
        self.actions = ActionBuffer::new();
        self.bootstrap_passes = 0;
    }
}

impl Default for PluginContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared plugin context for the host process
static PLUGIN_CONTEXT: LazyLock<Arc<Mutex<PluginContext>>> = LazyLock::new(|| {
    log::trace!("Initializing shared plugin context");
    Arc::new(Mutex::new(PluginContext::new()))
});

/// Access the shared plugin context
///
/// Returns a guard on the process-wide context used by the host-facing entry
/// point. Holding the guard for the whole bootstrap sequence is what
/// guarantees at most one sequence runs at a time.
pub fn get_plugin_context() -> MutexGuard<'static, PluginContext> {
    PLUGIN_CONTEXT.lock().unwrap()
}
