//! Append-Only Action Buffer
//!
//! The buffer holds every action record published since process start.
//! Entries are never removed or reordered; a new registration pass appends
//! after the previous pass's entries rather than clearing them (host-side
//! dedup of repeated registrations is the host's responsibility). The buffer
//! has process lifetime and is simply abandoned at exit.

use crate::actions::record::ActionRecord;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Process-wide append-only buffer of registered actions
///
/// Readers receive copy-on-read snapshots, so iterating a snapshot is safe
/// while further publishes occur. Shared by reference from the owning
/// `PluginContext`.
#[derive(Debug)]
pub struct ActionBuffer {
    records: RwLock<Vec<ActionRecord>>,
    next_sequence: AtomicU64,
}

impl ActionBuffer {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_sequence: AtomicU64::new(1),
        }
    }

    /// Append a record, assigning its monotonic sequence number
    ///
    /// The sequence is assigned under the write lock so that buffer order and
    /// sequence order always agree, even with concurrent publishers.
    pub fn publish(&self, mut record: ActionRecord) -> u64 {
        let mut records = self.records.write().unwrap();
        let sequence = self.next_sequence.fetch_add(1, Ordering::SeqCst);
        record.sequence = sequence;
        records.push(record);
        sequence
    }

    /// Read-only copy of the buffer contents, in publish order
    pub fn snapshot(&self) -> Vec<ActionRecord> {
        self.records.read().unwrap().clone()
    }

    /// Snapshot serialized as JSON for consumption by external tools
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().unwrap().is_empty()
    }
}

impl Default for ActionBuffer {
    fn default() -> Self {
        Self::new()
    }
}
