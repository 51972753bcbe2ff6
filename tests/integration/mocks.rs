//! Mock adapters for integration tests.
//!
//! Records every emitted event and lets tests script the clock and the
//! sensor without touching real hardware.

use std::cell::Cell;

use gsrmon::app::events::AppEvent;
use gsrmon::app::ports::{ClockPort, EventSink, SensorPort};
use gsrmon::sensors::gsr::{GsrReading, OPEN_CIRCUIT_OHMS};

// ── FakeClock ─────────────────────────────────────────────────

/// Settable monotonic clock.
pub struct FakeClock {
    ms: Cell<u64>,
}

#[allow(dead_code)]
impl FakeClock {
    pub fn at(ms: u64) -> Self {
        Self { ms: Cell::new(ms) }
    }

    pub fn set(&self, ms: u64) {
        self.ms.set(ms);
    }

    pub fn advance(&self, delta_ms: u64) {
        self.ms.set(self.ms.get() + delta_ms);
    }
}

impl ClockPort for FakeClock {
    fn now_ms(&self) -> u64 {
        self.ms.get()
    }
}

// ── ScriptedSensor ────────────────────────────────────────────

/// Sensor returning a fixed raw code, converted with the reference divider
/// constants (10 kOhm series, 12-bit ADC).
pub struct ScriptedSensor {
    pub raw: u16,
}

impl ScriptedSensor {
    pub fn with_raw(raw: u16) -> Self {
        Self { raw }
    }
}

impl SensorPort for ScriptedSensor {
    fn read_gsr(&mut self) -> GsrReading {
        let resistance_ohms = if self.raw == 0 {
            OPEN_CIRCUIT_OHMS
        } else {
            10_000.0 * (4095.0 / f64::from(self.raw)) - 10_000.0
        };
        GsrReading {
            raw: self.raw,
            resistance_ohms,
        }
    }
}

// ── RecordingSink ─────────────────────────────────────────────

/// Event sink that stores every emission for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage_changes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::StageChanged { .. }))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
