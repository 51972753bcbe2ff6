//! Wire-level tests: drive the transport-decoupled router and assert on the
//! exact JSON documents a polling client sees.

use gsrmon::app::service::SessionController;
use gsrmon::server::{Body, Method, Request, Response, handle};
use gsrmon::stages::StageTable;

use crate::mocks::{FakeClock, RecordingSink, ScriptedSensor};

struct Harness {
    ctrl: SessionController,
    sensor: ScriptedSensor,
    clock: FakeClock,
    sink: RecordingSink,
}

impl Harness {
    fn new() -> Self {
        Self {
            ctrl: SessionController::new(StageTable::default()),
            sensor: ScriptedSensor::with_raw(2048),
            clock: FakeClock::at(0),
            sink: RecordingSink::new(),
        }
    }

    fn get(&mut self, path: &str) -> Response {
        handle(
            &Request {
                method: Method::Get,
                path,
            },
            &mut self.ctrl,
            &mut self.sensor,
            &self.clock,
            &mut self.sink,
        )
    }

    fn get_json(&mut self, path: &str) -> serde_json::Value {
        let resp = self.get(path);
        assert_eq!(resp.status, 200);
        assert_eq!(resp.content_type, "application/json");
        let Body::Json(body) = resp.body else {
            panic!("expected JSON body from {path}");
        };
        serde_json::from_str(&body).expect("well-formed JSON")
    }
}

#[test]
fn idle_device_reports_empty_object() {
    let mut h = Harness::new();
    assert_eq!(h.get_json("/resistance"), serde_json::json!({}));
}

#[test]
fn active_session_wire_document() {
    let mut h = Harness::new();
    h.get("/start");
    h.clock.set(3_000);

    let v = h.get_json("/resistance");
    assert_eq!(v["elapsed"], 3);
    assert_eq!(v["remaining"], 17);
    assert_eq!(v["stage"], "Calibration");
    assert_eq!(v["description"], "Calibration (20 seconds)");
    assert_eq!(v["stageDuration"], 20);
    // raw 2048 through the 10 kOhm divider, rounded to 2 decimals.
    assert_eq!(v["value"], 9_995.12);
}

#[test]
fn completion_latches_finished_document() {
    let mut h = Harness::new();
    h.get("/start");

    h.clock.set(500_000);
    assert_eq!(
        h.get_json("/resistance"),
        serde_json::json!({ "finished": true })
    );

    // Still finished on later polls, with no restart in between.
    h.clock.set(700_000);
    assert_eq!(
        h.get_json("/resistance"),
        serde_json::json!({ "finished": true })
    );
}

#[test]
fn stop_collapses_to_empty_object() {
    let mut h = Harness::new();
    h.get("/start");
    h.clock.set(2_000);
    let resp = h.get("/stop");
    assert_eq!(resp.body, Body::Static("Session stopped"));

    h.clock.set(3_000);
    assert_eq!(h.get_json("/resistance"), serde_json::json!({}));
}

#[test]
fn commands_are_idempotent_on_the_wire() {
    let mut h = Harness::new();
    h.get("/stop");
    h.get("/stop");
    assert_eq!(h.get_json("/resistance"), serde_json::json!({}));

    h.get("/start");
    h.clock.set(1_000);
    h.get("/start"); // restart discards 1 s of progress
    h.clock.set(2_000);
    let v = h.get_json("/resistance");
    assert_eq!(v["elapsed"], 1);
}

#[test]
fn api_routes_carry_cors_header_flag() {
    let mut h = Harness::new();
    assert!(h.get("/start").cors);
    assert!(h.get("/stop").cors);
    assert!(h.get("/resistance").cors);
    assert!(!h.get("/").cors);
    assert!(!h.get("/favicon.ico").cors);
}

#[test]
fn unknown_route_is_404_and_harmless() {
    let mut h = Harness::new();
    h.get("/start");
    let resp = h.get("/does-not-exist");
    assert_eq!(resp.status, 404);
    // The stray request did not disturb the running session.
    h.clock.set(1_000);
    let v = h.get_json("/resistance");
    assert_eq!(v["stage"], "Calibration");
}
