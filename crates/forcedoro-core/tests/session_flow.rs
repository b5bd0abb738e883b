//! End-to-end session scenarios: engine events applied to a real on-disk
//! log, the way the CLI run loop applies them.

use chrono::{DateTime, Duration, Local, TimeZone};
use forcedoro_core::{Event, History, Phase, TimerEngine};
use tempfile::TempDir;

fn at(hour: u32, min: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 6, 3, hour, min, 0).unwrap()
}

/// Apply engine events to the history the way the run loop does.
fn apply(events: &[Event], history: &mut History) {
    for event in events {
        match event {
            Event::SessionCompleted { record, .. } => history.append(record.clone()).unwrap(),
            Event::SessionOverridden {
                record: Some(record),
                ..
            } => history.append(record.clone()).unwrap(),
            _ => {}
        }
    }
}

#[test]
fn completed_session_is_logged_and_accumulated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sessions.json");
    let mut history = History::load(&path).unwrap();
    let mut engine = TimerEngine::new();

    engine.start("Write report", 25, at(9, 0)).unwrap();
    let events = engine.tick(25 * 60, at(9, 25));
    apply(&events, &mut history);

    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(engine.accumulated_min(), 25);

    let reloaded = History::load(&path).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert!(reloaded.records()[0].completed);
    assert_eq!(reloaded.records()[0].duration_minutes, 25);
    assert_eq!(reloaded.records()[0].task, "Write report");
}

#[test]
fn accumulation_to_threshold_forces_a_break() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sessions.json");
    let mut history = History::load(&path).unwrap();
    let mut engine = TimerEngine::new();

    for i in 0..3u32 {
        engine.start("X", 10, at(9 + i, 0)).unwrap();
        let events = engine.tick(10 * 60, at(9 + i, 10));
        apply(&events, &mut history);
    }

    assert_eq!(engine.phase(), Phase::OnBreak);
    assert_eq!(engine.accumulated_min(), 0);

    let events = engine.tick(5 * 60, at(12, 15));
    apply(&events, &mut history);
    assert_eq!(engine.phase(), Phase::Idle);

    let reloaded = History::load(&path).unwrap();
    assert_eq!(reloaded.len(), 3);
    assert!(reloaded.records().iter().all(|r| r.completed));
}

#[test]
fn override_after_two_minutes_logs_a_partial_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sessions.json");
    let mut history = History::load(&path).unwrap();
    let mut engine = TimerEngine::new();

    let t0 = at(9, 0);
    engine.start("Y", 30, t0).unwrap();
    engine.tick(120, t0 + Duration::minutes(2));

    let events = engine.request_override(true, t0 + Duration::minutes(2));
    apply(&events, &mut history);
    engine.tick(1, t0 + Duration::minutes(2) + Duration::seconds(1));

    assert_eq!(engine.phase(), Phase::Idle);
    let reloaded = History::load(&path).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert!(!reloaded.records()[0].completed);
    assert_eq!(reloaded.records()[0].duration_minutes, 2);
}

#[test]
fn declined_override_leaves_everything_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sessions.json");
    let mut history = History::load(&path).unwrap();
    let mut engine = TimerEngine::new();

    engine.start("Y", 30, at(9, 0)).unwrap();
    engine.tick(60, at(9, 1));

    let events = engine.request_override(false, at(9, 1));
    apply(&events, &mut history);

    assert!(events.is_empty());
    assert_eq!(engine.phase(), Phase::Working);
    assert!(History::load(&path).unwrap().is_empty());
}

#[test]
fn empty_or_absent_log_always_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sessions.json");
    assert!(History::load(&path).unwrap().is_empty());

    std::fs::write(&path, "[]").unwrap();
    assert!(History::load(&path).unwrap().is_empty());
}
