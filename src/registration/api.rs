//! Public API for the registration sequencer
//!
//! External modules should import from here rather than directly from
//! internal modules.

// Sequencer entry point and report types
pub use crate::registration::sequencer::{
    register_all, RegistrationFailure, RegistrationReport, STATUS_DURATION_MS,
};

// Milestones and steps
pub use crate::registration::milestone::{RegistrationMilestone, RegistrationStep};

// Affordance derivation
pub use crate::registration::affordances::{key_bindings, menu_items, toolbar_action};
