use postman_client::{build_request, Config, Method};
use serde_json::json;

#[test]
fn descriptor_always_carries_content_type_and_api_key() {
    let config = Config::new("PMAK-test");
    let req = build_request(&config, Method::Get, "/workspaces", None, None).unwrap();

    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url.as_str(), "https://api.postman.com/workspaces");
    assert_eq!(
        req.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(
        req.headers.get("X-Api-Key").map(String::as_str),
        Some("PMAK-test")
    );
    assert!(req.body.is_empty());
}

#[test]
fn missing_api_key_yields_empty_header_not_an_error() {
    let config = Config::new("");
    let req = build_request(&config, Method::Get, "/me", None, None).unwrap();
    assert_eq!(req.headers.get("X-Api-Key").map(String::as_str), Some(""));
}

#[test]
fn path_already_carries_the_query_string() {
    let config = Config::new("k");
    let req = build_request(
        &config,
        Method::Get,
        "/collections?workspace=w1&name=My+API",
        None,
        None,
    )
    .unwrap();
    assert_eq!(req.url.query(), Some("workspace=w1&name=My+API"));
    assert_eq!(req.url.path(), "/collections");
}

#[test]
fn body_present_only_when_provided() {
    let config = Config::new("k");
    let payload = json!({ "workspace": { "name": "svc", "type": "team" } });
    let req = build_request(&config, Method::Post, "/workspaces", Some(&payload), None).unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
    assert_eq!(sent, payload);

    let req = build_request(&config, Method::Delete, "/workspaces/w1", None, None).unwrap();
    assert!(req.body.is_empty());
}

#[test]
fn single_extra_header_is_included() {
    let config = Config::new("k");
    let req = build_request(
        &config,
        Method::Post,
        "/specs/s1/generations",
        Some(&json!({ "name": "gen" })),
        Some(("Prefer", "respond-async")),
    )
    .unwrap();
    assert_eq!(
        req.headers.get("Prefer").map(String::as_str),
        Some("respond-async")
    );
    assert_eq!(req.headers.len(), 3);
}

#[test]
fn base_url_override_trims_trailing_slash() {
    let config = Config::new("k").with_base_url("http://localhost:9090/");
    let req = build_request(&config, Method::Get, "/me", None, None).unwrap();
    assert_eq!(req.url.as_str(), "http://localhost:9090/me");
}
