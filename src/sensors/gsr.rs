//! Grove-style GSR (galvanic skin response) sensor driver.
//!
//! The electrode pair sits in a voltage divider with a known series
//! resistance; the divider midpoint feeds an ESP32 ADC1 channel.  Each read
//! converts the raw 12-bit code into an estimated skin resistance:
//!
//! ```text
//! R_gsr = R_series * (ADC_MAX / raw) - R_series
//! ```
//!
//! A raw code of zero means the divider is open (electrodes off the skin or
//! the sensor unplugged), which would be a division by zero — the driver
//! substitutes a large sentinel instead of signaling an error, and callers
//! treat anything above ~1e8 Ohms as "open circuit".
//!
//! No smoothing or filtering is applied; every read is one instantaneous
//! sample.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1_CH6 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static `AtomicU16` for injection.

use core::sync::atomic::{AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

static SIM_GSR_ADC: AtomicU16 = AtomicU16::new(0);

/// Inject a raw ADC code for host-side tests and simulation.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_gsr_adc(raw: u16) {
    SIM_GSR_ADC.store(raw, Ordering::Relaxed);
}

/// Resistance reported when the divider reads zero (open circuit).
pub const OPEN_CIRCUIT_OHMS: f64 = 999_999_999.0;

/// One instantaneous GSR sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GsrReading {
    pub raw: u16,
    pub resistance_ohms: f64,
}

impl GsrReading {
    /// Whether this sample looks like a disconnected sensor.
    pub fn is_open_circuit(&self) -> bool {
        self.resistance_ohms >= 1e8
    }
}

pub struct GsrSensor {
    r_series_ohms: f64,
    adc_max: f64,
    _adc_gpio: i32,
}

impl GsrSensor {
    pub fn new(r_series_ohms: f64, adc_max: u16, adc_gpio: i32) -> Self {
        Self {
            r_series_ohms,
            adc_max: f64::from(adc_max),
            _adc_gpio: adc_gpio,
        }
    }

    pub fn read(&mut self) -> GsrReading {
        let raw = self.read_adc();
        GsrReading {
            raw,
            resistance_ohms: self.resistance_from_raw(raw),
        }
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        // adc1_read returns 0 on a failed conversion, which collapses into
        // the open-circuit sentinel below — the read path never errors.
        hw_init::adc1_read(hw_init::ADC1_CH_GSR)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_GSR_ADC.load(Ordering::Relaxed)
    }

    fn resistance_from_raw(&self, raw: u16) -> f64 {
        if raw == 0 {
            return OPEN_CIRCUIT_OHMS;
        }
        self.r_series_ohms * (self.adc_max / f64::from(raw)) - self.r_series_ohms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensor() -> GsrSensor {
        GsrSensor::new(10_000.0, 4095, crate::pins::GSR_ADC_GPIO)
    }

    #[test]
    fn zero_raw_yields_open_circuit_sentinel() {
        let s = sensor();
        assert_eq!(s.resistance_from_raw(0), OPEN_CIRCUIT_OHMS);
    }

    #[test]
    fn full_scale_raw_yields_zero_resistance() {
        let s = sensor();
        let r = s.resistance_from_raw(4095);
        assert!(r.abs() < 1e-9, "full-scale code means no drop: {r}");
    }

    #[test]
    fn midpoint_raw_yields_series_resistance() {
        // At exactly half the full-scale voltage the unknown leg equals
        // the series resistor.
        let s = GsrSensor::new(10_000.0, 4096, crate::pins::GSR_ADC_GPIO);
        let r = s.resistance_from_raw(2048);
        assert!((r - 10_000.0).abs() < 1e-9, "got {r}");
    }

    #[test]
    fn conversion_matches_divider_formula() {
        let s = sensor();
        for raw in [1u16, 7, 100, 1024, 3000, 4095] {
            let expected = 10_000.0 * (4095.0 / f64::from(raw)) - 10_000.0;
            assert_eq!(s.resistance_from_raw(raw), expected);
        }
    }

    #[test]
    fn open_circuit_classification() {
        let open = GsrReading {
            raw: 0,
            resistance_ohms: OPEN_CIRCUIT_OHMS,
        };
        let normal = GsrReading {
            raw: 2000,
            resistance_ohms: 10_475.0,
        };
        assert!(open.is_open_circuit());
        assert!(!normal.is_open_circuit());
    }

    #[test]
    fn read_uses_injected_sim_value() {
        let mut s = sensor();
        sim_set_gsr_adc(4095);
        let reading = s.read();
        assert_eq!(reading.raw, 4095);
        assert!(reading.resistance_ohms.abs() < 1e-9);
    }
}
