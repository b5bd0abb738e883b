//! # Forcedoro Core Library
//!
//! Core logic for Forcedoro, a forceful pomodoro timer: a caller-driven
//! countdown state machine, a triple-confirmation override gate, and an
//! append-only JSON session log. The CLI binary is a thin presentation
//! layer over this crate, wired up through the [`ui::Ui`] trait -- the core
//! never talks to a terminal directly.
//!
//! ## Key components
//!
//! - [`TimerEngine`]: countdown state machine (Idle / Working / OnBreak /
//!   Overridden), fed elapsed seconds by the caller
//! - [`Countdown`]: cancellable per-second tick source for driving the engine
//! - [`History`]: append-only session log, a single JSON file rewritten on
//!   every append
//! - [`Config`]: TOML preferences (notifications, log location)

pub mod error;
pub mod events;
pub mod storage;
pub mod timer;
pub mod ui;

pub use error::{ConfigError, CoreError, HistoryError, ValidationError};
pub use events::Event;
pub use storage::{Config, History, SessionRecord};
pub use timer::{Countdown, Phase, PhaseSnapshot, TimerEngine};
pub use ui::{TaskInput, Ui};
