//! System configuration parameters
//!
//! All tunable parameters for the GSR monitor.  The device has no
//! configuration persistence — values are fixed at build time, with WiFi
//! credentials overridable through `GSRMON_WIFI_SSID` / `GSRMON_WIFI_PASSWORD`
//! environment variables at compile time.

use core::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

/// Static IPv4 station configuration.
///
/// The monitor is deployed on a lab network where the dashboard is
/// pre-configured with the device address, so DHCP is bypassed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticIpConfig {
    /// Station address.
    pub ip: Ipv4Addr,
    /// Default gateway.
    pub gateway: Ipv4Addr,
    /// Subnet prefix length (e.g. 24 for 255.255.255.0).
    pub prefix_len: u8,
    /// Primary DNS server, if any.
    pub dns: Option<Ipv4Addr>,
}

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    // --- WiFi ---
    /// Station SSID.
    pub wifi_ssid: heapless::String<32>,
    /// Station password (empty for an open network).
    pub wifi_password: heapless::String<64>,
    /// Fixed station address; `None` falls back to DHCP.
    pub static_ip: Option<StaticIpConfig>,

    // --- GSR circuit ---
    /// Series resistance R1 of the voltage divider (Ohms).
    pub r_series_ohms: f64,
    /// Full-scale ADC code (4095 for the 12-bit ESP32 ADC).
    pub adc_max: u16,

    // --- HTTP ---
    /// TCP port the status server listens on.
    pub http_port: u16,

    // --- Indicator ---
    /// Blue-LED toggle period while WiFi is connected (milliseconds).
    pub led_blink_interval_ms: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        let mut wifi_ssid = heapless::String::new();
        let mut wifi_password = heapless::String::new();
        // Compile-time credential injection; truncation cannot occur because
        // set_credentials-style validation happens again in the WiFi adapter.
        let _ = wifi_ssid.push_str(option_env!("GSRMON_WIFI_SSID").unwrap_or(""));
        let _ = wifi_password.push_str(option_env!("GSRMON_WIFI_PASSWORD").unwrap_or(""));

        Self {
            // WiFi
            wifi_ssid,
            wifi_password,
            static_ip: Some(StaticIpConfig {
                ip: Ipv4Addr::new(10, 155, 83, 100),
                gateway: Ipv4Addr::new(10, 155, 83, 1),
                prefix_len: 24,
                dns: Some(Ipv4Addr::new(8, 8, 8, 8)),
            }),

            // GSR circuit: 10 kOhm series resistor, 12-bit ADC
            r_series_ohms: 10_000.0,
            adc_max: 4095,

            // HTTP
            http_port: 80,

            // Indicator
            led_blink_interval_ms: 500,
        }
    }
}
