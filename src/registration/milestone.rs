//! Registration Milestones
//!
//! Transient progress markers used to drive host status notifications and to
//! report partial success to the caller. Never persisted.

use strum_macros::Display;

/// Observable progress points during a registration pass
///
/// A step's milestone is reported only if the step did not fail;
/// `InitComplete` is reported at the end of every pass regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RegistrationMilestone {
    #[strum(serialize = "Menu items registered")]
    MenuItemsRegistered,
    #[strum(serialize = "Toolbar action registered")]
    ToolbarRegistered,
    #[strum(serialize = "Key bindings registered")]
    KeyBindingsRegistered,
    #[strum(serialize = "Plugin initialization complete")]
    InitComplete,
}

/// The three registration steps, in their fixed execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RegistrationStep {
    #[strum(serialize = "menu items")]
    MenuItems,
    #[strum(serialize = "toolbar action")]
    ToolbarAction,
    #[strum(serialize = "key bindings")]
    KeyBindings,
}
