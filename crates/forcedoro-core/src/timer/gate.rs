//! Override confirmation gate.
//!
//! Aborting a running timer is deliberately annoying: three sequential
//! yes/no prompts, and any "no" cancels the whole request. This is a
//! human-factors deterrent against accidental clicks, not a safety
//! mechanism -- it has no effect on timer correctness.

use crate::ui::Ui;

/// The three prompts, asked in order.
pub const OVERRIDE_PROMPTS: [&str; 3] = [
    "Are you SURE you want to override the timer?",
    "Are you REALLY sure?",
    "This will disrupt your productivity. Last chance to cancel.",
];

/// Ask every prompt in order, stopping at the first "no".
pub fn confirm_all(ui: &mut dyn Ui, prompts: &[&str]) -> bool {
    prompts.iter().all(|prompt| ui.confirm(prompt))
}

/// Run the full three-step override gate.
pub fn confirm_override(ui: &mut dyn Ui) -> bool {
    confirm_all(ui, &OVERRIDE_PROMPTS)
}
