//! Timer state machine.
//!
//! The engine is caller-driven: it holds no threads and reads no clocks.
//! The driving loop feeds it elapsed whole seconds via `tick()` and applies
//! the returned [`Event`]s (append a record to the log, redraw a banner).
//!
//! ## State transitions
//!
//! ```text
//! Idle -> Working -> (OnBreak | Idle) -> Idle
//! Working | OnBreak -> Overridden -> Idle
//! ```
//!
//! A break is forced once completed work accumulates to
//! [`BREAK_THRESHOLD_MINUTES`]; the accumulator resets to zero at that
//! moment, so it never reaches the threshold between transitions.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;
use crate::storage::SessionRecord;

/// Upper bound for a single work session, in minutes.
pub const MAX_WORK_MINUTES: u32 = 30;
/// Accumulated work that forces a break, in minutes.
pub const BREAK_THRESHOLD_MINUTES: u32 = 30;
/// Fixed break length, in seconds. Not configurable.
pub const BREAK_DURATION_SECS: u64 = 5 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Working,
    OnBreak,
    /// Transient: a confirmed override landed; the next `tick` returns the
    /// engine to `Idle`.
    Overridden,
}

/// Point-in-time view of the engine for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseSnapshot {
    pub phase: Phase,
    pub task: String,
    pub remaining_secs: u64,
    pub accumulated_min: u32,
}

impl PhaseSnapshot {
    /// Countdown formatted as minutes:seconds.
    pub fn remaining_display(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_secs / 60,
            self.remaining_secs % 60
        )
    }
}

#[derive(Debug, Clone)]
pub struct TimerEngine {
    phase: Phase,
    task: String,
    work_minutes: u32,
    accumulated_min: u32,
    session_start: Option<DateTime<Local>>,
    remaining_secs: u64,
}

impl TimerEngine {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            task: String::new(),
            work_minutes: 0,
            accumulated_min: 0,
            session_start: None,
            remaining_secs: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn accumulated_min(&self) -> u32 {
        self.accumulated_min
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn session_start(&self) -> Option<DateTime<Local>> {
        self.session_start
    }

    pub fn snapshot(&self) -> PhaseSnapshot {
        PhaseSnapshot {
            phase: self.phase,
            task: self.task.clone(),
            remaining_secs: self.remaining_secs,
            accumulated_min: self.accumulated_min,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Parse user-entered minutes.
    pub fn parse_minutes(input: &str) -> Result<u32, ValidationError> {
        let trimmed = input.trim();
        trimmed.parse().map_err(|_| ValidationError::MinutesNotANumber {
            input: trimmed.to_string(),
        })
    }

    /// Begin a work session.
    ///
    /// Requires the `Idle` phase, a non-empty task and
    /// `1..=MAX_WORK_MINUTES` minutes; rejects anything else with a
    /// [`ValidationError`], leaving state unchanged. Records the session
    /// start time for elapsed-minute accounting on override.
    pub fn start(
        &mut self,
        task: &str,
        minutes: u32,
        now: DateTime<Local>,
    ) -> Result<Event, ValidationError> {
        if self.phase != Phase::Idle {
            return Err(ValidationError::SessionActive);
        }
        let task = task.trim();
        if task.is_empty() {
            return Err(ValidationError::EmptyTask);
        }
        if minutes == 0 || minutes > MAX_WORK_MINUTES {
            return Err(ValidationError::MinutesOutOfRange { minutes });
        }

        self.task = task.to_string();
        self.work_minutes = minutes;
        self.remaining_secs = u64::from(minutes) * 60;
        self.session_start = Some(now);
        self.phase = Phase::Working;
        Ok(Event::SessionStarted {
            task: self.task.clone(),
            minutes,
            at: now,
        })
    }

    /// Advance the countdown by `elapsed_secs` whole seconds.
    ///
    /// The driver calls this once per second with `elapsed_secs == 1`;
    /// larger values catch up after a blocked loop. A single call performs
    /// at most one phase transition.
    pub fn tick(&mut self, elapsed_secs: u64, now: DateTime<Local>) -> Vec<Event> {
        match self.phase {
            Phase::Idle => Vec::new(),
            Phase::Working => {
                self.remaining_secs = self.remaining_secs.saturating_sub(elapsed_secs);
                if self.remaining_secs == 0 {
                    self.complete_work(now)
                } else {
                    Vec::new()
                }
            }
            Phase::OnBreak => {
                self.remaining_secs = self.remaining_secs.saturating_sub(elapsed_secs);
                if self.remaining_secs == 0 {
                    self.finish_break(now)
                } else {
                    Vec::new()
                }
            }
            Phase::Overridden => {
                self.clear_session();
                Vec::new()
            }
        }
    }

    /// Abort the active timer after the confirmation gate.
    ///
    /// A declined gate (`all_confirmed == false`) leaves state untouched
    /// and emits nothing. From `Working`, elapsed whole minutes since the
    /// session started are logged as an incomplete record when greater than
    /// zero; a break override logs nothing.
    pub fn request_override(&mut self, all_confirmed: bool, now: DateTime<Local>) -> Vec<Event> {
        if !all_confirmed {
            return Vec::new();
        }
        match self.phase {
            Phase::Working => {
                let record = self.session_start.and_then(|start| {
                    let elapsed_min = (now - start).num_minutes().max(0) as u32;
                    (elapsed_min > 0)
                        .then(|| SessionRecord::new(self.task.clone(), elapsed_min, now, false))
                });
                self.phase = Phase::Overridden;
                self.remaining_secs = 0;
                self.session_start = None;
                vec![Event::SessionOverridden { record, at: now }]
            }
            Phase::OnBreak => {
                self.phase = Phase::Overridden;
                self.remaining_secs = 0;
                vec![Event::SessionOverridden { record: None, at: now }]
            }
            Phase::Idle | Phase::Overridden => Vec::new(),
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn complete_work(&mut self, now: DateTime<Local>) -> Vec<Event> {
        let record = SessionRecord::new(self.task.clone(), self.work_minutes, now, true);
        self.accumulated_min += self.work_minutes;
        self.session_start = None;

        let mut events = vec![Event::SessionCompleted {
            record,
            accumulated_min: self.accumulated_min,
            at: now,
        }];
        if self.accumulated_min >= BREAK_THRESHOLD_MINUTES {
            self.accumulated_min = 0;
            self.phase = Phase::OnBreak;
            self.remaining_secs = BREAK_DURATION_SECS;
            events.push(Event::BreakStarted {
                duration_secs: BREAK_DURATION_SECS,
                at: now,
            });
        } else {
            self.phase = Phase::Idle;
        }
        events
    }

    fn finish_break(&mut self, now: DateTime<Local>) -> Vec<Event> {
        self.clear_session();
        vec![Event::BreakFinished { at: now }]
    }

    fn clear_session(&mut self) {
        self.phase = Phase::Idle;
        self.task.clear();
        self.work_minutes = 0;
        self.remaining_secs = 0;
        self.session_start = None;
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}
