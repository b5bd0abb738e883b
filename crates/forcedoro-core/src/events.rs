use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::storage::SessionRecord;

/// Every phase transition produces events describing its side effects.
///
/// The engine mutates nothing outside its own state; the driving loop
/// applies these (append the carried record to the log, redraw the phase
/// banner) so logic stays decoupled from presentation and persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        task: String,
        minutes: u32,
        at: DateTime<Local>,
    },
    /// A work session ran to completion. The carried record must be
    /// appended to the session log.
    SessionCompleted {
        record: SessionRecord,
        /// Work minutes accumulated since the last break, including this
        /// session (read before any break-triggered reset).
        accumulated_min: u32,
        at: DateTime<Local>,
    },
    BreakStarted {
        duration_secs: u64,
        at: DateTime<Local>,
    },
    /// The break countdown elapsed; task and duration inputs were cleared.
    BreakFinished {
        at: DateTime<Local>,
    },
    /// A confirmed override aborted the timer. `record` is present only
    /// when a work session had at least one whole elapsed minute to log.
    SessionOverridden {
        record: Option<SessionRecord>,
        at: DateTime<Local>,
    },
}
