//! GSR Stress Monitor — Main Entry Point
//!
//! Hexagonal architecture with a request-driven core: there is no control
//! loop inside the session logic — every state change happens inside the
//! handling of an HTTP status query or command.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                    │
//! │                                                              │
//! │  HardwareAdapter   LogEventSink   Esp32TimeAdapter           │
//! │  (SensorPort)      (EventSink)    (ClockPort)                │
//! │  WifiAdapter       HTTP server                               │
//! │  (Connectivity)    (route dispatch)                          │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ────────────────        │
//! │                                                              │
//! │  ┌──────────────────────────────────────────────────────┐    │
//! │  │          SessionController (pure logic)              │    │
//! │  │  stage derivation · boundary detection · snapshots   │    │
//! │  └──────────────────────────────────────────────────────┘    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod app;
pub mod config;
mod pins;
pub mod server;
pub mod stages;

mod adapters;
mod drivers;
mod sensors;

// ── Imports ───────────────────────────────────────────────────
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use log::{info, warn};

use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use adapters::time::Esp32TimeAdapter;
use adapters::wifi::{ConnectivityPort, WifiAdapter};
use app::service::SessionController;
use config::MonitorConfig;
use drivers::status_led::StatusLed;
use sensors::gsr::GsrSensor;
use server::http::ServerState;
use stages::StageTable;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  GSR Monitor v{}                    ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let config = MonitorConfig::default();

    // ── 2. Peripherals ────────────────────────────────────────
    drivers::hw_init::init_peripherals().map_err(|e| anyhow!("HAL init failed: {e}"))?;

    let peripherals = esp_idf_svc::hal::peripherals::Peripherals::take()
        .context("peripherals already taken")?;
    let sysloop = esp_idf_svc::eventloop::EspSystemEventLoop::take()
        .context("system event loop unavailable")?;

    // ── 3. WiFi station ───────────────────────────────────────
    let mut wifi = WifiAdapter::new();
    if let Err(e) = wifi.set_credentials(config.wifi_ssid.as_str(), config.wifi_password.as_str())
    {
        warn!("WiFi credentials not usable ({e}); dashboard will be unreachable");
    }
    wifi.attach_driver(peripherals.modem, sysloop, config.static_ip.as_ref())
        .map_err(|e| anyhow!("WiFi driver init failed: {e}"))?;
    if let Err(e) = wifi.connect() {
        warn!("Initial WiFi connect failed ({e}); retrying from the main loop");
    }

    // ── 4. Session core + adapters ────────────────────────────
    let clock = Arc::new(Esp32TimeAdapter::new());
    let gsr = GsrSensor::new(config.r_series_ohms, config.adc_max, pins::GSR_ADC_GPIO);
    let state = Arc::new(Mutex::new(ServerState {
        controller: SessionController::new(StageTable::default()),
        hw: HardwareAdapter::new(gsr),
        sink: LogEventSink::new(),
    }));

    // ── 5. HTTP server ────────────────────────────────────────
    // The handle owns the listening socket; keep it alive for the whole run.
    let _server = server::http::serve(Arc::clone(&state), Arc::clone(&clock), config.http_port)?;

    info!("System ready. Polling endpoint: /resistance");

    // ── 6. Indicator loop ─────────────────────────────────────
    // The session core is entirely request-driven; the only periodic work
    // left on the main task is the connectivity indicator and WiFi
    // reconnect polling.
    let mut led = StatusLed::new(pins::LED_BLUE_GPIO);
    let mut last_toggle_ms: u64 = 0;
    let mut last_wifi_poll_ms: u64 = 0;

    loop {
        std::thread::sleep(Duration::from_millis(100));
        let now_ms = clock.uptime_ms();

        if now_ms.saturating_sub(last_wifi_poll_ms) >= 1_000 {
            wifi.poll();
            last_wifi_poll_ms = now_ms;
        }

        if wifi.is_connected() {
            if now_ms.saturating_sub(last_toggle_ms) >= u64::from(config.led_blink_interval_ms) {
                led.toggle();
                last_toggle_ms = now_ms;
            }
        } else if led.is_lit() {
            led.off();
        }
    }
}
