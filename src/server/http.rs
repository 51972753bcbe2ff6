//! ESP-IDF HTTP server adapter.
//!
//! Bridges `EspHttpServer` to the transport-decoupled router: a single
//! wildcard GET handler forwards every request into [`super::handle`] and
//! writes the resulting [`Response`](super::Response) back to the socket.
//!
//! The ESP-IDF httpd runs handlers on its own task, so the controller,
//! hardware adapter and event sink all live behind one mutex — the status
//! query's read-modify-write of the session state is never interleaved.

use std::sync::{Arc, Mutex};

use anyhow::{Context, anyhow};
use esp_idf_svc::http::Method as HttpMethod;
use esp_idf_svc::http::server::{Configuration, EspHttpConnection, EspHttpServer};
use esp_idf_svc::io::Write;
use log::info;

use crate::adapters::hardware::HardwareAdapter;
use crate::adapters::log_sink::LogEventSink;
use crate::adapters::time::Esp32TimeAdapter;
use crate::app::service::SessionController;

use super::{Body, Method, Request, Response};

/// Everything the route handlers mutate, behind one lock.
pub struct ServerState {
    pub controller: SessionController,
    pub hw: HardwareAdapter,
    pub sink: LogEventSink,
}

/// Start the HTTP server on `port`.  The returned server owns the listening
/// socket; keep it alive for the lifetime of the process.
pub fn serve(
    state: Arc<Mutex<ServerState>>,
    clock: Arc<Esp32TimeAdapter>,
    port: u16,
) -> anyhow::Result<EspHttpServer<'static>> {
    let mut server = EspHttpServer::new(&Configuration {
        http_port: port,
        uri_match_wildcard: true,
        ..Default::default()
    })
    .context("http server bind failed")?;

    server.fn_handler("/*", HttpMethod::Get, move |raw_req| -> anyhow::Result<()> {
        // Strip any query string: routing is by path only.
        let uri = raw_req.uri().to_owned();
        let path = uri.split('?').next().unwrap_or("/");
        let req = Request {
            method: Method::Get,
            path,
        };

        let response = {
            let mut guard = state
                .lock()
                .map_err(|_| anyhow!("server state mutex poisoned"))?;
            let st = &mut *guard;
            super::handle(&req, &mut st.controller, &mut st.hw, clock.as_ref(), &mut st.sink)
        };

        write_response(raw_req, &response)
    })?;

    info!("HTTP server listening on port {}", port);
    Ok(server)
}

fn write_response(
    raw_req: esp_idf_svc::http::server::Request<&mut EspHttpConnection<'_>>,
    response: &Response,
) -> anyhow::Result<()> {
    let message = match response.status {
        200 => "OK",
        204 => "No Content",
        404 => "Not Found",
        _ => "",
    };

    let mut headers: Vec<(&str, &str)> = vec![("Content-Type", response.content_type)];
    if response.cors {
        headers.push(("Access-Control-Allow-Origin", "*"));
    }

    let mut out = raw_req.into_response(response.status, Some(message), &headers)?;
    match &response.body {
        Body::Empty => {}
        Body::Static(s) => out.write_all(s.as_bytes())?,
        Body::Json(s) => out.write_all(s.as_bytes())?,
    }
    Ok(())
}
