use clap::Subcommand;
use forcedoro_core::{Config, History, HistoryError};

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List recorded sessions
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the session log location
    Path,
}

/// Load the session log, surfacing (rather than hiding) a corrupt file.
pub fn load_history(config: &Config) -> Result<History, Box<dyn std::error::Error>> {
    let path = config.history_path()?;
    match History::load(&path) {
        Ok(history) => Ok(history),
        Err(err @ HistoryError::Corrupt { .. }) => {
            tracing::warn!(%err, "discarding unreadable session log");
            eprintln!("warning: {err}; starting with an empty history");
            Ok(History::empty(path))
        }
        Err(err) => Err(err.into()),
    }
}

pub fn run(action: HistoryAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    match action {
        HistoryAction::List { json } => {
            let history = load_history(&config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(history.records())?);
            } else if history.is_empty() {
                println!("no sessions recorded");
            } else {
                for record in history.records() {
                    let marker = if record.completed { "done" } else { "quit" };
                    println!(
                        "{}  {:>3} min  [{marker}]  {}",
                        record.timestamp, record.duration_minutes, record.task
                    );
                }
            }
        }
        HistoryAction::Path => {
            println!("{}", config.history_path()?.display());
        }
    }
    Ok(())
}
