//! Sensor subsystem.
//!
//! A single driver today — the GSR electrode divider on ADC1.  The driver
//! produces a [`gsr::GsrReading`] that flows into the session snapshot
//! through the [`SensorPort`](crate::app::ports::SensorPort) boundary.

pub mod gsr;

pub use gsr::{GsrReading, GsrSensor};
