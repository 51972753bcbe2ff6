//! HTTP routing — dispatches incoming requests to the session core.
//!
//! **Transport-decoupled**: the router does not own a socket.  Callers feed
//! a [`Request`] (method + path) plus the injected ports and receive a
//! [`Response`] value; the `http` adapter bridges `EspHttpServer` to this
//! function.  That keeps every route — including the 404 fallback —
//! exercisable from host-side tests.
//!
//! Routes:
//!
//! | Path           | Effect                                         |
//! |----------------|------------------------------------------------|
//! | `/resistance`  | Status query (advances/ends the session)       |
//! | `/start`       | Start command                                  |
//! | `/stop`        | Stop command                                   |
//! | `/`            | Embedded dashboard page                        |
//! | `/favicon.ico` | 204 (quiets browser favicon probes)            |
//! | anything else  | 404, path logged                               |
//!
//! The three API routes carry `Access-Control-Allow-Origin: *` so the
//! dashboard can also be served from a workstation during development.

pub mod assets;
#[cfg(target_os = "espidf")]
pub mod http;

use log::info;

use crate::app::commands::SessionCommand;
use crate::app::ports::{ClockPort, EventSink, SensorPort};
use crate::app::service::SessionController;

// ───────────────────────────────────────────────────────────────
// Request / Response model
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    /// Anything else — the device only ever serves GET.
    Other,
}

#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    pub method: Method,
    pub path: &'a str,
}

/// Response body, borrowed where the content is static.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Empty,
    Static(&'static str),
    Json(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Body,
    /// Whether to attach `Access-Control-Allow-Origin: *`.
    pub cors: bool,
}

impl Response {
    fn html(body: &'static str) -> Self {
        Self {
            status: 200,
            content_type: "text/html",
            body: Body::Static(body),
            cors: false,
        }
    }

    fn text(body: &'static str) -> Self {
        Self {
            status: 200,
            content_type: "text/plain",
            body: Body::Static(body),
            cors: true,
        }
    }

    fn json(body: String) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: Body::Json(body),
            cors: true,
        }
    }

    fn no_content() -> Self {
        Self {
            status: 204,
            content_type: "image/x-icon",
            body: Body::Empty,
            cors: false,
        }
    }

    fn not_found() -> Self {
        Self {
            status: 404,
            content_type: "text/plain",
            body: Body::Static("Not found"),
            cors: false,
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Dispatch
// ───────────────────────────────────────────────────────────────

/// Route one request to the session core and produce the response value.
pub fn handle(
    req: &Request<'_>,
    controller: &mut SessionController,
    sensor: &mut impl SensorPort,
    clock: &impl ClockPort,
    sink: &mut impl EventSink,
) -> Response {
    if req.method != Method::Get {
        info!("HTTP | no handler for {:?} '{}'", req.method, req.path);
        return Response::not_found();
    }

    match req.path {
        "/" => Response::html(assets::INDEX_HTML),
        "/start" => {
            controller.handle_command(SessionCommand::Start, clock.now_ms(), sink);
            Response::text("Session started")
        }
        "/stop" => {
            controller.handle_command(SessionCommand::Stop, clock.now_ms(), sink);
            Response::text("Session stopped")
        }
        "/resistance" => {
            let snapshot = controller.status(clock.now_ms(), sensor, sink);
            Response::json(snapshot.to_json().to_string())
        }
        "/favicon.ico" => Response::no_content(),
        other => {
            info!("HTTP | no handler for '{}'", other);
            Response::not_found()
        }
    }
}
