//! Interactive timer session.
//!
//! The foreground loop prompts for a task, then drives the engine once per
//! second. Ctrl-C during a countdown is an override request routed through
//! the three-step confirmation gate, not an exit -- the countdown keeps
//! running unless every confirmation is affirmative.

use std::io::Write;

use chrono::Local;
use colored::Colorize;
use forcedoro_core::timer::{confirm_override, BREAK_THRESHOLD_MINUTES};
use forcedoro_core::{Config, Countdown, Event, History, Phase, TaskInput, TimerEngine, Ui};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, error, warn};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut history = super::history::load_history(&config)?;
    let mut ui = TerminalUi::new()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(session_loop(&mut ui, &mut history, &config));
    Ok(())
}

async fn session_loop(ui: &mut TerminalUi, history: &mut History, config: &Config) {
    let mut engine = TimerEngine::new();
    loop {
        let Some(input) = ui.prompt_task_and_minutes() else {
            return;
        };
        let minutes = match TimerEngine::parse_minutes(&input.minutes) {
            Ok(minutes) => minutes,
            Err(err) => {
                ui.show_error(&err.to_string());
                continue;
            }
        };
        match engine.start(&input.task, minutes, Local::now()) {
            Ok(event) => debug!(?event, "session started"),
            Err(err) => {
                ui.show_error(&err.to_string());
                continue;
            }
        }
        run_countdown(&mut engine, history, ui, config).await;
    }
}

/// Drive the engine until it returns to Idle.
async fn run_countdown(
    engine: &mut TimerEngine,
    history: &mut History,
    ui: &mut TerminalUi,
    config: &Config,
) {
    let mut countdown = Countdown::new();
    ui.render_phase(engine.phase());
    loop {
        tokio::select! {
            elapsed = countdown.tick() => {
                let events = engine.tick(elapsed, Local::now());
                apply_events(&events, history, ui, config);
                if engine.phase() == Phase::Idle {
                    return;
                }
                ui.render_remaining(engine.remaining_secs());
            }
            _ = tokio::signal::ctrl_c() => {
                ui.end_countdown_line();
                let confirmed = confirm_override(ui);
                let events = engine.request_override(confirmed, Local::now());
                apply_events(&events, history, ui, config);
                if engine.phase() == Phase::Overridden {
                    engine.tick(0, Local::now());
                    ui.show_status("Timer overridden. Start a new session when ready.");
                    return;
                }
                // Declined: the countdown kept running while the gate was up.
                ui.render_phase(engine.phase());
            }
        }
    }
}

fn apply_events(events: &[Event], history: &mut History, ui: &mut TerminalUi, config: &Config) {
    for event in events {
        debug!(?event, "timer event");
        match event {
            Event::SessionCompleted {
                record,
                accumulated_min,
                ..
            } => {
                ui.end_countdown_line();
                if config.notifications.enabled {
                    ui.ring_bell();
                }
                if let Err(err) = history.append(record.clone()) {
                    error!(%err, "session not persisted");
                    ui.show_error(&err.to_string());
                }
                if *accumulated_min < BREAK_THRESHOLD_MINUTES {
                    ui.show_status(&format!(
                        "Work logged! You've accumulated {accumulated_min} minutes."
                    ));
                }
            }
            Event::BreakStarted { .. } => {
                ui.render_phase(Phase::OnBreak);
            }
            Event::BreakFinished { .. } => {
                ui.end_countdown_line();
                ui.show_status("Break completed! Start a new work session.");
            }
            Event::SessionOverridden { record, .. } => {
                if let Some(record) = record {
                    if let Err(err) = history.append(record.clone()) {
                        error!(%err, "session not persisted");
                        ui.show_error(&err.to_string());
                    }
                }
            }
            Event::SessionStarted { .. } => {}
        }
    }
}

/// rustyline/colored-backed implementation of the core's [`Ui`] trait.
pub struct TerminalUi {
    rl: DefaultEditor,
    /// A countdown line is being redrawn in place and needs a newline
    /// before any other output.
    counting: bool,
}

impl TerminalUi {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self {
            rl: DefaultEditor::new()?,
            counting: false,
        })
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self.rl.readline(prompt) {
            Ok(line) => Some(line),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
            Err(err) => {
                warn!(%err, "readline failed");
                None
            }
        }
    }

    /// Finish an in-place countdown line before printing anything else.
    fn end_countdown_line(&mut self) {
        if self.counting {
            println!();
            self.counting = false;
        }
    }

    fn ring_bell(&mut self) {
        print!("\x07");
        let _ = std::io::stdout().flush();
    }
}

impl Ui for TerminalUi {
    fn prompt_task_and_minutes(&mut self) -> Option<TaskInput> {
        println!();
        println!("{}", "Forceful Pomodoro Timer".blue().bold());
        let task = self.read_line("What are you working on? ")?;
        let minutes = self.read_line("How many minutes? (max 30) ")?;
        Some(TaskInput { task, minutes })
    }

    fn show_error(&mut self, message: &str) {
        self.end_countdown_line();
        eprintln!("{} {message}", "error:".red().bold());
    }

    fn show_status(&mut self, message: &str) {
        self.end_countdown_line();
        println!("{message}");
    }

    fn render_remaining(&mut self, seconds: u64) {
        print!("\r  {:02}:{:02}  ", seconds / 60, seconds % 60);
        let _ = std::io::stdout().flush();
        self.counting = true;
    }

    fn render_phase(&mut self, phase: Phase) {
        self.end_countdown_line();
        match phase {
            Phase::Working => {
                println!("{}", "Heads down. Ctrl-C to request an override.".dimmed());
            }
            Phase::OnBreak => {
                println!("{}", "BREAK TIME".red().bold());
                println!("Step away from the computer!");
            }
            Phase::Idle | Phase::Overridden => {}
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        loop {
            let Some(answer) = self.read_line(&format!("{prompt} [y/N] ")) else {
                return false;
            };
            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" | "" => return false,
                _ => eprintln!("please answer y or n"),
            }
        }
    }
}
