//! Session controller — the hexagonal core.
//!
//! [`SessionController`] owns the session state and the stage table.  It
//! exposes a clean, hardware-agnostic API: a command entry point and a
//! status query.  All I/O flows through port traits injected at call sites,
//! making the entire controller testable with mock adapters and a fake
//! clock.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │   SessionController     │
//!     now_ms ────▶│  stage derivation ·     │──▶ StatusSnapshot
//!                 │  boundary detection     │
//!                 └────────────────────────┘
//! ```
//!
//! The controller stores no authoritative "current stage" between queries:
//! every status call re-derives the active stage from absolute elapsed time.
//! The stored index exists only to detect boundary crossings, so detection
//! fires exactly once per boundary no matter how irregularly the client
//! polls.

use crate::stages::StageTable;

use super::commands::SessionCommand;
use super::events::AppEvent;
use super::ports::{EventSink, SensorPort};
use super::status::{ActiveStatus, StatusSnapshot};

// ───────────────────────────────────────────────────────────────
// SessionController
// ───────────────────────────────────────────────────────────────

/// The session state machine.  One instance per device, created inactive at
/// boot; a process restart forgets all prior sessions.
pub struct SessionController {
    stages: StageTable,
    active: bool,
    /// Monotonic ms at session start.  Meaningless while inactive.
    session_start_ms: u64,
    /// Last stage index observed; only used to detect boundary crossings,
    /// except that the terminal index latches the finished state.
    current_stage: usize,
    /// Monotonic ms at which `current_stage` last changed.
    stage_start_ms: u64,
}

impl SessionController {
    /// Construct an inactive controller over the given timeline.
    pub fn new(stages: StageTable) -> Self {
        Self {
            stages,
            active: false,
            session_start_ms: 0,
            current_stage: 0,
            stage_start_ms: 0,
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command.  Commands never fail; repeating one
    /// converges to the same state.
    pub fn handle_command(
        &mut self,
        cmd: SessionCommand,
        now_ms: u64,
        sink: &mut impl EventSink,
    ) {
        match cmd {
            SessionCommand::Start => {
                // Unconditional reset: restarting an active session
                // discards its progress, and starting after a completed
                // one clears the finished latch.
                self.active = true;
                self.session_start_ms = now_ms;
                self.current_stage = 0;
                self.stage_start_ms = now_ms;
                sink.emit(&AppEvent::SessionStarted);
            }
            SessionCommand::Stop => {
                let was_active = self.active;
                // Leaves `current_stage` untouched: a stop after natural
                // completion keeps reading back as finished, a stop mid-run
                // reads back as idle.
                self.active = false;
                if was_active {
                    sink.emit(&AppEvent::SessionStopped);
                }
            }
        }
    }

    // ── Status query ──────────────────────────────────────────

    /// Compute a point-in-time snapshot, advancing or ending the session as
    /// a side effect when `now_ms` has crossed a stage or session boundary.
    ///
    /// Idempotent for a fixed `now_ms`; the derived stage index is
    /// monotonically non-decreasing in `now_ms` for a fixed session start.
    pub fn status(
        &mut self,
        now_ms: u64,
        sensor: &mut impl SensorPort,
        sink: &mut impl EventSink,
    ) -> StatusSnapshot {
        if !self.active {
            if self.current_stage == self.stages.terminal_index() {
                return StatusSnapshot::Finished;
            }
            return StatusSnapshot::Idle;
        }

        let elapsed_ms = now_ms.saturating_sub(self.session_start_ms);

        let Some(stage_index) = self.stages.stage_containing(elapsed_ms) else {
            // The walk exhausted every non-terminal stage: the session is
            // over.  One-way — only a new Start runs again.
            self.current_stage = self.stages.terminal_index();
            self.active = false;
            sink.emit(&AppEvent::SessionFinished);
            return StatusSnapshot::Finished;
        };

        if stage_index != self.current_stage {
            sink.emit(&AppEvent::StageChanged {
                from: self.current_stage,
                to: stage_index,
                name: self.stages.at(stage_index).name,
            });
            self.current_stage = stage_index;
            self.stage_start_ms = now_ms;
        }

        let reading = sensor.read_gsr();
        let stage = self.stages.at(self.current_stage);
        let stage_elapsed_ms = now_ms.saturating_sub(self.stage_start_ms);
        let remaining_ms = stage.duration_ms.saturating_sub(stage_elapsed_ms);

        StatusSnapshot::Active(ActiveStatus {
            elapsed_secs: elapsed_ms / 1000,
            remaining_secs: remaining_ms / 1000,
            resistance_ohms: reading.resistance_ohms,
            stage_name: stage.name,
            stage_description: stage.description,
            stage_duration_secs: stage.duration_ms / 1000,
        })
    }

    // ── Queries ───────────────────────────────────────────────

    /// Whether a session is currently running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Last observed stage index.
    pub fn current_stage(&self) -> usize {
        self.current_stage
    }

    /// The timeline this controller runs.
    pub fn stages(&self) -> &StageTable {
        &self.stages
    }
}
