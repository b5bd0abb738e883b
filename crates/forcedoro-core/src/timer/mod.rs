mod countdown;
mod engine;
mod gate;

pub use countdown::Countdown;
pub use engine::{
    Phase, PhaseSnapshot, TimerEngine, BREAK_DURATION_SECS, BREAK_THRESHOLD_MINUTES,
    MAX_WORK_MINUTES,
};
pub use gate::{confirm_all, confirm_override, OVERRIDE_PROMPTS};
