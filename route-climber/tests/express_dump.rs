//! End-to-end extraction from a serialized host application

use route_climber::{
    AncestorMatch, ClimbErrorCode, ClimberConfig, Method, array_from_value, structure_from_value,
};
use serde_json::{Value, json};

const ROOT_MOUNT: &str = r"/^\/?(?=\/|$)/i";

fn layer(name: &str, regexp: &str, handle: Value, route: Value) -> Value {
    json!({
        "constructor": "Layer",
        "name": name,
        "regexp": regexp,
        "keys": [],
        "handle": handle,
        "route": route,
    })
}

fn route(path: &str, regexp: &str, method: &str, stack: &[&str]) -> Value {
    let stack: Vec<Value> = stack
        .iter()
        .map(|name| layer(name, r"/^\/?$/i", json!({}), Value::Null))
        .collect();
    layer(
        "bound dispatch",
        regexp,
        json!({}),
        json!({ "path": path, "methods": { method: true }, "stack": stack }),
    )
}

/// An application with the host's built-in middleware, one root-level
/// middleware and a sub-router mounted at `/sub`.
fn app_dump() -> Value {
    let sub = json!({
        "name": "router",
        "stack": [
            layer("middleware2", ROOT_MOUNT, json!({ "description": "checks the session" }), Value::Null),
            route("/foo", r"/^\/foo\/?$/i", "get", &["middleware3", "getFooHandle"]),
        ],
    });
    json!({
        "_router": {
            "name": "router",
            "stack": [
                layer("query", ROOT_MOUNT, json!({ "hideInClimber": true }), Value::Null),
                layer("expressInit", ROOT_MOUNT, json!({ "hideInClimber": true }), Value::Null),
                layer("middleware1", ROOT_MOUNT, json!({}), Value::Null),
                layer("router", r"/^\/sub\/?(?=\/|$)/i", sub, Value::Null),
                route("/subscribe", r"/^\/subscribe\/?$/i", "post", &["postSubscribe"]),
            ],
        },
    })
}

#[test]
fn structure_of_express_app() {
    let table = structure_from_value(&app_dump(), &ClimberConfig::default()).unwrap();

    assert_eq!(
        table.urls().collect::<Vec<_>>(),
        vec!["/", "/sub", "/sub/foo", "/subscribe"]
    );
    let root = table.get("/", Method::Put).unwrap();
    assert_eq!(root.middlewares.len(), 1);
    assert_eq!(root.middlewares[0].name, "middleware1");

    let sub = table.get("/sub", Method::Get).unwrap();
    assert_eq!(sub.middlewares[0].description.as_deref(), Some("checks the session"));
    assert!(sub.handler.is_none());
}

#[test]
fn array_of_express_app() {
    let records = array_from_value(&app_dump(), &ClimberConfig::default()).unwrap();
    let summary: Vec<(String, Method, Vec<String>, Option<String>)> = records
        .into_iter()
        .map(|record| {
            (
                record.url,
                record.method,
                record.middlewares.into_iter().map(|m| m.name).collect(),
                record.handler.map(|h| h.name),
            )
        })
        .collect();

    // each ancestor is prepended in table order, so "/sub" lands ahead of "/"
    assert_eq!(
        summary,
        vec![
            (
                "/sub/foo".to_string(),
                Method::Get,
                vec![
                    "middleware2".to_string(),
                    "middleware1".to_string(),
                    "middleware3".to_string(),
                ],
                Some("getFooHandle".to_string()),
            ),
            (
                "/subscribe".to_string(),
                Method::Post,
                vec!["middleware2".to_string(), "middleware1".to_string()],
                Some("postSubscribe".to_string()),
            ),
        ]
    );
}

#[test]
fn segment_matching_stops_sibling_inheritance() {
    let config = ClimberConfig::new().with_ancestor_match(AncestorMatch::SegmentPrefix);
    let records = array_from_value(&app_dump(), &config).unwrap();
    let subscribe = records.iter().find(|r| r.url == "/subscribe").unwrap();
    let names: Vec<&str> = subscribe.middlewares.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["middleware1"]);
}

#[test]
fn base_path_is_prepended() {
    let config = ClimberConfig::new().with_base_path("/api");
    let table = structure_from_value(&app_dump(), &config).unwrap();
    assert!(table.get("/api/sub/foo", Method::Get).is_some());
    assert!(table.get("/api", Method::Delete).is_some());
}

#[test]
fn non_router_dump_is_rejected() {
    let err = structure_from_value(&json!({ "listen": {} }), &ClimberConfig::default()).unwrap_err();
    assert_eq!(err.code, ClimbErrorCode::UnrecognizedNodeKind);
}
