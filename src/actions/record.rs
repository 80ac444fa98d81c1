//! Action Record Types
//!
//! Records are serializable so that sibling tools (e.g. generated script
//! modules) can consume exported snapshots.

use serde::Serialize;
use std::time::SystemTime;

/// Kind of UI affordance an action record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionKind {
    MenuItem,
    ToolbarAction,
    KeyBinding,
}

/// Opaque handle to one registered UI action
///
/// The sequence number is assigned by the buffer on publish; records are
/// created with sequence 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionRecord {
    /// Monotonic sequence number assigned by the buffer
    pub sequence: u64,
    pub kind: ActionKind,
    /// Human-readable label as registered with the host
    pub label: String,
    /// Command identifier the affordance dispatches to
    pub command: String,
    /// When the registration pass published this record
    pub registered_at: SystemTime,
}

impl ActionRecord {
    pub fn new(kind: ActionKind, label: String, command: String) -> Self {
        Self {
            sequence: 0, // Will be set by the buffer
            kind,
            label,
            command,
            registered_at: SystemTime::now(),
        }
    }
}
