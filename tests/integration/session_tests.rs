//! End-to-end session lifecycle tests against the public controller API,
//! polled the way the dashboard polls in production (once a second).

use gsrmon::app::commands::SessionCommand;
use gsrmon::app::events::AppEvent;
use gsrmon::app::service::SessionController;
use gsrmon::app::status::StatusSnapshot;
use gsrmon::stages::{StageDef, StageTable};

use crate::mocks::{RecordingSink, ScriptedSensor};

// The reference scenario timeline: A 10 s, B 5 s, terminal.
static SCENARIO: &[StageDef] = &[
    StageDef {
        name: "A",
        duration_ms: 10_000,
        description: "phase A",
    },
    StageDef {
        name: "B",
        duration_ms: 5_000,
        description: "phase B",
    },
    StageDef {
        name: "done",
        duration_ms: 0,
        description: "done",
    },
];

fn scenario_controller() -> SessionController {
    SessionController::new(StageTable::new(SCENARIO))
}

/// Poll once a second from `from_s` to `to_s` inclusive, returning the last
/// snapshot.
fn poll_seconds(
    ctrl: &mut SessionController,
    sensor: &mut ScriptedSensor,
    sink: &mut RecordingSink,
    from_s: u64,
    to_s: u64,
) -> StatusSnapshot {
    let mut last = StatusSnapshot::Idle;
    for t in from_s..=to_s {
        last = ctrl.status(t * 1_000, sensor, sink);
    }
    last
}

#[test]
fn scenario_with_one_second_polling() {
    let mut ctrl = scenario_controller();
    let mut sensor = ScriptedSensor::with_raw(2000);
    let mut sink = RecordingSink::new();

    ctrl.handle_command(SessionCommand::Start, 0, &mut sink);

    // t = 3 s: stage A, 7 s remaining.
    let snap = poll_seconds(&mut ctrl, &mut sensor, &mut sink, 0, 3);
    let StatusSnapshot::Active(s) = snap else {
        panic!("expected active at t=3, got {snap:?}");
    };
    assert_eq!(s.stage_name, "A");
    assert_eq!(s.remaining_secs, 7);
    assert_eq!(s.elapsed_secs, 3);

    // t = 12 s: stage B, 3 s remaining (boundary was seen at t = 10).
    let snap = poll_seconds(&mut ctrl, &mut sensor, &mut sink, 4, 12);
    let StatusSnapshot::Active(s) = snap else {
        panic!("expected active at t=12, got {snap:?}");
    };
    assert_eq!(s.stage_name, "B");
    assert_eq!(s.remaining_secs, 3);
    assert_eq!(s.elapsed_secs, 12);

    // t = 16 s: finished and inactive.
    let snap = poll_seconds(&mut ctrl, &mut sensor, &mut sink, 13, 16);
    assert_eq!(snap, StatusSnapshot::Finished);
    assert!(!ctrl.is_active());

    // Subsequent query without restart: the terminal state persists.
    assert_eq!(
        ctrl.status(20_000, &mut sensor, &mut sink),
        StatusSnapshot::Finished
    );

    // Exactly one A→B stage change was observed.
    assert_eq!(sink.stage_changes(), 1);
}

#[test]
fn manual_stop_reads_back_empty() {
    let mut ctrl = scenario_controller();
    let mut sensor = ScriptedSensor::with_raw(2000);
    let mut sink = RecordingSink::new();

    ctrl.handle_command(SessionCommand::Start, 0, &mut sink);
    let _ = poll_seconds(&mut ctrl, &mut sensor, &mut sink, 0, 2);
    ctrl.handle_command(SessionCommand::Stop, 2_000, &mut sink);

    assert_eq!(
        ctrl.status(3_000, &mut sensor, &mut sink),
        StatusSnapshot::Idle
    );
    assert!(sink.events.contains(&AppEvent::SessionStopped));
    assert!(!sink.events.contains(&AppEvent::SessionFinished));
}

#[test]
fn default_timeline_walks_all_stages_in_order() {
    let mut ctrl = SessionController::new(StageTable::default());
    let mut sensor = ScriptedSensor::with_raw(1500);
    let mut sink = RecordingSink::new();

    ctrl.handle_command(SessionCommand::Start, 0, &mut sink);

    let mut seen: Vec<&'static str> = Vec::new();
    let mut finished_at_s = None;
    for t in 0..=520 {
        match ctrl.status(t * 1_000, &mut sensor, &mut sink) {
            StatusSnapshot::Active(s) => {
                if seen.last() != Some(&s.stage_name) {
                    seen.push(s.stage_name);
                }
            }
            StatusSnapshot::Finished => {
                finished_at_s.get_or_insert(t);
            }
            StatusSnapshot::Idle => panic!("unexpected idle at t={t}"),
        }
    }

    assert_eq!(
        seen,
        vec!["Calibration", "Normal stage", "Stress", "Relaxation"]
    );
    // 20 + 240 + 180 + 60 = 500 s of active timeline.
    assert_eq!(finished_at_s, Some(500));
}

#[test]
fn restart_mid_session_starts_over() {
    let mut ctrl = scenario_controller();
    let mut sensor = ScriptedSensor::with_raw(2000);
    let mut sink = RecordingSink::new();

    ctrl.handle_command(SessionCommand::Start, 0, &mut sink);
    let _ = poll_seconds(&mut ctrl, &mut sensor, &mut sink, 0, 11);
    assert_eq!(ctrl.current_stage(), 1);

    // Restart while B is running: back to stage 0 with fresh timing.
    ctrl.handle_command(SessionCommand::Start, 11_000, &mut sink);
    let snap = ctrl.status(12_000, &mut sensor, &mut sink);
    let StatusSnapshot::Active(s) = snap else {
        panic!("expected active after restart");
    };
    assert_eq!(s.stage_name, "A");
    assert_eq!(s.elapsed_secs, 1);
    assert_eq!(s.remaining_secs, 9);
}

#[test]
fn open_circuit_is_reported_not_raised() {
    let mut ctrl = scenario_controller();
    let mut sensor = ScriptedSensor::with_raw(0);
    let mut sink = RecordingSink::new();

    ctrl.handle_command(SessionCommand::Start, 0, &mut sink);
    let snap = ctrl.status(1_000, &mut sensor, &mut sink);
    let StatusSnapshot::Active(s) = snap else {
        panic!("expected active snapshot");
    };
    assert!(s.resistance_ohms >= 1e8, "open circuit must read mega-ohm range");
}

#[test]
fn infrequent_polling_still_reaches_terminal_state() {
    let mut ctrl = scenario_controller();
    let mut sensor = ScriptedSensor::with_raw(2000);
    let mut sink = RecordingSink::new();

    ctrl.handle_command(SessionCommand::Start, 0, &mut sink);
    // One lonely query long after the timeline expired.
    assert_eq!(
        ctrl.status(90_000, &mut sensor, &mut sink),
        StatusSnapshot::Finished
    );
    assert!(!ctrl.is_active());
    // No intermediate stage changes were ever observed — the session jumped
    // straight to the terminal state.
    assert_eq!(sink.stage_changes(), 0);
}
