//! GPIO / peripheral pin assignments for the GSR monitor board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.
//!
//! The board is a plain ESP32 DevKit: the GSR electrode divider feeds an
//! ADC1 input, and the on-board blue LED doubles as the WiFi indicator.

// ---------------------------------------------------------------------------
// GSR sensor — Analog (ADC1)
// ---------------------------------------------------------------------------

/// GSR voltage-divider output.  ADC1 channel 6 (GPIO 34, input-only).
pub const GSR_ADC_GPIO: i32 = 34;

// ---------------------------------------------------------------------------
// Status LED
// ---------------------------------------------------------------------------

/// On-board blue LED (active HIGH).  Blinks while WiFi is associated.
pub const LED_BLUE_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// ADC configuration
// ---------------------------------------------------------------------------

/// ADC bit width — 12 bits gives raw codes 0–4095.
pub const ADC_RESOLUTION_BITS: u32 = 12;
