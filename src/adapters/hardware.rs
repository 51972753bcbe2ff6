//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the GSR sensor driver and exposes it through [`SensorPort`].  This
//! is the only module in the system that hands sensor hardware to the
//! domain.  On non-espidf targets the underlying driver reads a simulation
//! hook instead of the ADC.

use crate::app::ports::SensorPort;
use crate::sensors::gsr::{GsrReading, GsrSensor};

/// Concrete adapter that puts the board's sensors behind port traits.
pub struct HardwareAdapter {
    gsr: GsrSensor,
}

impl HardwareAdapter {
    pub fn new(gsr: GsrSensor) -> Self {
        Self { gsr }
    }
}

impl SensorPort for HardwareAdapter {
    fn read_gsr(&mut self) -> GsrReading {
        self.gsr.read()
    }
}
