//! Point-in-time status snapshots and their wire encoding.
//!
//! A snapshot is computed fresh on every status query and never stored.
//! Three shapes reach the wire:
//!
//! | State                         | JSON                          |
//! |-------------------------------|-------------------------------|
//! | idle (never ran / stopped)    | `{}`                          |
//! | ran to completion             | `{"finished": true}`          |
//! | session in progress           | full object, see [`to_json`]  |
//!
//! The empty-object idle form does not distinguish "never started" from
//! "manually stopped"; clients only need to know that no session is
//! producing data.
//!
//! [`to_json`]: StatusSnapshot::to_json

use serde_json::{Value, json};

/// Snapshot of a running session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveStatus {
    /// Whole seconds since session start (truncated).
    pub elapsed_secs: u64,
    /// Whole seconds left in the current stage (truncated, floors at 0).
    pub remaining_secs: u64,
    /// Estimated skin resistance, Ohms.
    pub resistance_ohms: f64,
    pub stage_name: &'static str,
    pub stage_description: &'static str,
    /// Total length of the current stage in whole seconds.
    pub stage_duration_secs: u64,
}

/// Result of one status query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusSnapshot {
    /// No session running and none has completed.
    Idle,
    /// The last session ran to its terminal stage.
    Finished,
    /// A session is in progress.
    Active(ActiveStatus),
}

impl StatusSnapshot {
    /// Encode the snapshot as the wire JSON document.
    ///
    /// `value` is rounded to two decimal places; the dashboard renders it
    /// directly and switches to a mega-ohm display above 1e8.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Idle => json!({}),
            Self::Finished => json!({ "finished": true }),
            Self::Active(s) => json!({
                "elapsed": s.elapsed_secs,
                "remaining": s.remaining_secs,
                "value": round2(s.resistance_ohms),
                "stage": s.stage_name,
                "description": s.stage_description,
                "stageDuration": s.stage_duration_secs,
            }),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
