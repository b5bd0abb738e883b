use crate::timer::Phase;

/// Raw task/duration input as entered by the user.
///
/// Minutes stay a string until validated so non-numeric input surfaces as a
/// [`crate::error::ValidationError`] instead of failing at the prompt.
#[derive(Debug, Clone)]
pub struct TaskInput {
    pub task: String,
    pub minutes: String,
}

/// Collaborator interface implemented by the presentation layer.
///
/// The core drives prompts and rendering exclusively through this trait.
pub trait Ui {
    /// Ask for a task name and duration. `None` means the user cancelled.
    fn prompt_task_and_minutes(&mut self) -> Option<TaskInput>;

    fn show_error(&mut self, message: &str);

    fn show_status(&mut self, message: &str);

    /// Redraw the countdown. Display is minutes:seconds.
    fn render_remaining(&mut self, seconds: u64);

    fn render_phase(&mut self, phase: Phase);

    /// Single yes/no question; asked three times in a row by the override
    /// gate.
    fn confirm(&mut self, prompt: &str) -> bool;
}
