//! Host-side integration tests.
//!
//! Everything here runs on the build machine with mock adapters — no
//! ESP-IDF, no real clock, no real ADC.  The suite drives the public API
//! exactly the way the HTTP layer does in production.

mod mocks;
mod router_tests;
mod session_tests;
