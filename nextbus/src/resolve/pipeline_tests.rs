//! Scenario tests for the four-stage lookup.

use super::*;
use crate::metro::{Gateway, TransportError};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Mutex;

fn now() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(1_533_074_400_000).unwrap()
}

fn vendor_time(offset_secs: i64) -> String {
    format!("/Date({}-0500)/", now().timestamp_millis() + offset_secs * 1000)
}

/// In-memory gateway that records every path it is asked for.
struct MockGateway {
    documents: HashMap<String, Value>,
    failing: Option<String>,
    requests: Mutex<Vec<String>>,
}

impl MockGateway {
    fn new() -> Self {
        Self {
            documents: HashMap::new(),
            failing: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn with(mut self, path: &str, document: Value) -> Self {
        self.documents.insert(path.to_string(), document);
        self
    }

    /// Make `path` fail as if the network were down.
    fn failing_at(mut self, path: &str) -> Self {
        self.failing = Some(path.to_string());
        self
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Gateway for MockGateway {
    async fn fetch_json(&self, path: &str) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(path.to_string());

        if self.failing.as_deref() == Some(path) {
            return Err(TransportError::Status {
                status: 503,
                message: "Service Unavailable".to_string(),
            });
        }

        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| TransportError::Status {
                status: 404,
                message: format!("not found: {path}"),
            })
    }
}

/// Routes 4, 14 and two flavours of 21; route 21 runs east/west only.
fn metro() -> MockGateway {
    MockGateway::new()
        .with(
            "/Routes",
            json!([
                {"Description": "4 - Lyndale Av - Bryant Av - Southtown - 46th St", "ProviderID": "8", "Route": "4"},
                {"Description": "14 - Bloomington Av - Robbinsdale", "ProviderID": "8", "Route": "14"},
                {"Description": "21 - Uptown - Lake St - Selby  Av", "ProviderID": "8", "Route": "21"},
                {"Description": "921 - Express - Lake St", "ProviderID": "8", "Route": "921"}
            ]),
        )
        .with(
            "/Directions/21",
            json!([
                {"Text": "EASTBOUND", "Value": "2"},
                {"Text": "WESTBOUND", "Value": "3"}
            ]),
        )
        .with(
            "/Directions/4",
            json!([
                {"Text": "SOUTHBOUND", "Value": "1"},
                {"Text": "NORTHBOUND", "Value": "4"}
            ]),
        )
        .with(
            "/Stops/21/2",
            json!([
                {"Text": "Uptown Transit Station", "Value": "UPTR"},
                {"Text": "Lake St and Hiawatha Ave", "Value": "LAHI"},
                {"Text": "Snelling Ave and University Ave", "Value": "SNUN"},
                {"Text": "Snelling Ave and Selby Ave", "Value": "SNSE"}
            ]),
        )
        .with(
            "/Stops/4/1",
            json!([
                {"Text": "Lake St  and Lyndale Ave", "Value": "LALY"},
                {"Text": "Franklin Ave and Lyndale Ave", "Value": "FRLY"}
            ]),
        )
        .with(
            "/21/2/SNUN",
            json!([
                {"Actual": true, "DepartureText": "Due", "DepartureTime": vendor_time(-20)},
                {"Actual": true, "DepartureText": "4 Min", "DepartureTime": vendor_time(240)},
                {"Actual": false, "DepartureText": "10:38", "DepartureTime": vendor_time(1800)}
            ]),
        )
        .with(
            "/4/1/LALY",
            json!([
                {"DepartureText": "Due", "DepartureTime": vendor_time(-60)},
                {"DepartureText": "Due", "DepartureTime": vendor_time(-5)}
            ]),
        )
        .with(
            "/4/1/FRLY",
            json!([
                {"DepartureText": "1 Min", "DepartureTime": vendor_time(70)}
            ]),
        )
}

async fn run(gateway: &MockGateway, route: &str, stop: &str, direction: &str) -> String {
    let nextbus = NextBus::new(gateway);
    nextbus
        .next_bus(&Query::new(route, stop, direction), now(), false)
        .await
}

#[tokio::test]
async fn resolves_to_countdown() {
    let gateway = metro();
    let result = run(&gateway, "#21", "University", "east").await;

    assert_eq!(result, "4 Minutes");
    assert_eq!(
        gateway.requests(),
        ["/Routes", "/Directions/21", "/Stops/21/2", "/21/2/SNUN"]
    );
}

#[tokio::test]
async fn single_minute_is_singular() {
    let gateway = metro();
    let result = run(&gateway, "Bryant", "Franklin", "south").await;
    assert_eq!(result, "1 Minute");
}

#[tokio::test]
async fn verbose_returns_vendor_text() {
    let gateway = metro();
    let nextbus = NextBus::new(&gateway);
    let result = nextbus
        .next_bus(&Query::new("#21", "University", "EAST"), now(), true)
        .await;
    assert_eq!(result, "4 Min");
}

#[tokio::test]
async fn resolve_exposes_structured_departure() {
    let gateway = metro();
    let nextbus = NextBus::new(&gateway);
    let resolution = nextbus
        .resolve(&Query::new("#21", "University", "east"), now())
        .await
        .unwrap();

    match resolution {
        Resolution::Arriving(next) => {
            assert!(next.departure.actual);
            assert!((next.minutes - 4.0).abs() < 1e-9);
        }
        other => panic!("expected an arrival, got {other:?}"),
    }
}

#[tokio::test]
async fn no_route_match_stops_after_first_fetch() {
    let gateway = metro();
    let result = run(&gateway, "927", "Marquette", "east").await;

    assert_eq!(result, "NO MATCH ON ROUTE");
    assert_eq!(gateway.requests(), ["/Routes"]);
}

#[tokio::test]
async fn ambiguous_route_lists_descriptions_in_order() {
    let gateway = metro();
    let result = run(&gateway, "Lake St", "Snelling", "east").await;

    assert_eq!(
        result,
        "MULTIPLE MATCHES ON ROUTE: 21 - Uptown - Lake St - Selby  Av, 921 - Express - Lake St"
    );
    assert_eq!(gateway.requests(), ["/Routes"]);
}

#[tokio::test]
async fn bare_route_number_is_ambiguous() {
    let gateway = metro();
    let result = run(&gateway, "21", "Snelling", "West").await;
    assert!(result.starts_with("MULTIPLE MATCHES ON ROUTE:"));
}

#[tokio::test]
async fn wrong_direction_for_route() {
    let gateway = metro();
    let result = run(&gateway, "#21", "Snelling", "North").await;

    assert_eq!(result, "NO MATCH ON DIRECTION");
    assert_eq!(gateway.requests(), ["/Routes", "/Directions/21"]);
}

#[tokio::test]
async fn ambiguous_direction() {
    let gateway = metro();
    let result = run(&gateway, "#21", "Snelling", "t").await;
    assert_eq!(result, "MULTIPLE MATCHES ON DIRECTION: EASTBOUND, WESTBOUND");

    let result = run(&gateway, "#21", "Snelling", "#any").await;
    assert_eq!(result, "MULTIPLE MATCHES ON DIRECTION: EASTBOUND, WESTBOUND");
}

#[tokio::test]
async fn no_stop_match() {
    let gateway = metro();
    let result = run(&gateway, "#21", "54th St", "East").await;
    assert_eq!(result, "NO MATCH ON STOP");
}

#[tokio::test]
async fn ambiguous_stop() {
    let gateway = metro();
    let result = run(&gateway, "#21", "Snelling", "East").await;

    assert_eq!(
        result,
        "MULTIPLE MATCHES ON STOP: Snelling Ave and University Ave, Snelling Ave and Selby Ave"
    );
    assert_eq!(
        gateway.requests(),
        ["/Routes", "/Directions/21", "/Stops/21/2"]
    );
}

#[tokio::test]
async fn stop_match_collapses_vendor_spacing() {
    let gateway = metro();
    let nextbus = NextBus::new(&gateway);
    let result = nextbus
        .resolve(&Query::new("Bryant", "lake st and", "south"), now())
        .await;

    assert!(matches!(result, Ok(Resolution::NoFurtherService)));
}

#[tokio::test]
async fn no_further_service_is_empty() {
    let gateway = metro();
    let result = run(&gateway, "Bryant", "Lake St", "south").await;
    assert_eq!(result, "");
}

#[tokio::test]
async fn transport_failure_at_any_stage_is_network_error() {
    for path in ["/Routes", "/Directions/21", "/Stops/21/2", "/21/2/SNUN"] {
        let gateway = metro().failing_at(path);
        let result = run(&gateway, "#21", "University", "east").await;

        assert_eq!(result, "NETWORK ERROR", "failure at {path}");
        assert_eq!(gateway.requests().last().map(String::as_str), Some(path));
    }
}

#[tokio::test]
async fn malformed_records_are_unknown_error() {
    let gateway = metro().with("/Directions/21", json!({"Message": "An error has occurred."}));
    let result = run(&gateway, "#21", "University", "east").await;
    assert_eq!(result, "UNKNOWN ERROR");
}

#[tokio::test]
async fn malformed_timestamp_is_unknown_error() {
    let gateway = metro().with(
        "/21/2/SNUN",
        json!([{"DepartureText": "Due", "DepartureTime": "10:08"}]),
    );
    let nextbus = NextBus::new(&gateway);
    let result = nextbus
        .resolve(&Query::new("#21", "University", "east"), now())
        .await;

    assert!(matches!(
        result,
        Err(LookupError::Unknown(UnexpectedData::Timestamp(_)))
    ));
    assert_eq!(render(&result, false), "UNKNOWN ERROR");
}

#[tokio::test]
async fn structured_errors_carry_stage_and_candidates() {
    let gateway = metro();
    let nextbus = NextBus::new(&gateway);
    let result = nextbus
        .resolve(&Query::new("#21", "#any", "west"), now())
        .await;

    // Route 21 westbound has no stop list in the mock
    assert!(matches!(result, Err(LookupError::Transport(_))));

    let result = nextbus
        .resolve(&Query::new("#21", "#any", "east"), now())
        .await;
    match result {
        Err(LookupError::Ambiguous { stage, candidates }) => {
            assert_eq!(stage, Stage::Stop);
            assert_eq!(candidates.len(), 4);
            assert_eq!(candidates[0], "Uptown Transit Station");
        }
        other => panic!("expected ambiguous stop, got {other:?}"),
    }
}

#[tokio::test]
async fn bundled_sample_set_resolves() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/nextrip");
    let nextbus = NextBus::new(crate::metro::FixtureGateway::new(dir).unwrap());

    let result = nextbus
        .next_bus(&Query::new("#21", "university", "EAST"), now(), false)
        .await;
    assert_eq!(result, "4 Minutes");

    let result = nextbus
        .next_bus(&Query::new("lake st", "lake st and", "east"), now(), false)
        .await;
    assert_eq!(
        result,
        "MULTIPLE MATCHES ON STOP: Lake St  and Hennepin Ave, Lake St and Hiawatha Ave"
    );

    let result = nextbus
        .next_bus(&Query::new("METRO", "#any", "north"), now(), false)
        .await;
    assert_eq!(result, "MULTIPLE MATCHES ON ROUTE: METRO Blue Line, METRO Green Line");
}

#[tokio::test]
async fn odd_offset_suffix_still_counts_down() {
    let millis = now().timestamp_millis() + 240_000;
    let gateway = metro().with(
        "/21/2/SNUN",
        json!([
            {"DepartureText": "4 Min", "DepartureTime": format!("/Date({millis}-05:00)/")}
        ]),
    );

    let result = run(&gateway, "#21", "University", "east").await;
    assert_eq!(result, "4 Minutes");
}
