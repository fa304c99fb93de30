//! Client tests against an in-process LibreNMS stand-in
//!
//! An axum server bound to 127.0.0.1:0 serves canned LibreNMS envelopes and
//! rejects requests that do not carry the fixed client headers.

use axum::extract::{Path, Query, Request};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use librenms_client::common::{ACCEPT_LANGUAGE_VALUE, ACCEPT_VALUE, USER_AGENT_VALUE};
use librenms_client::{
    DeviceFilter, DeviceGroupMember, GraphWindow, LibreNmsClient, LibreNmsClientTrait,
    LibreNmsError, LocationFilter,
};
use serde_json::{Value, json};
use std::collections::HashMap;

const TOKEN: &str = "test-token";

const GRAPH_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="640" height="240" viewBox="0 0 640 240"><rect width="10" height="10"/></svg>"#;
const STRIPPED_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 640 240"><rect width="10" height="10"/></svg>"#;

fn devices() -> Value {
    json!([
        {"device_id": 1, "hostname": "10.0.0.1", "sysName": "core-sw1", "status": 1,
         "hardware": "Cisco 3750", "features": "IPBASE", "version": "12.2(55)SE", "location": "NYC, Rack1"},
        {"device_id": 2, "hostname": "10.0.0.2", "sysName": "core-sw2", "status": 0,
         "hardware": "Cisco 3750", "features": "IPBASE", "version": "12.2(55)SE", "location": "NYC, Rack2"},
        {"device_id": 3, "hostname": "10.1.0.1", "sysName": "edge-rtr1", "status": 1,
         "hardware": "Juniper MX104", "features": null, "version": "17.3R3", "location": "LA"},
    ])
}

fn error_envelope(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"status": "error", "message": message}))).into_response()
}

async fn require_headers(request: Request, next: Next) -> Response {
    let expected = [
        ("x-auth-token", TOKEN),
        ("content-type", "application/json"),
        ("accept-language", ACCEPT_LANGUAGE_VALUE),
        ("user-agent", USER_AGENT_VALUE),
        ("accept", ACCEPT_VALUE),
    ];
    for (name, value) in expected {
        let received = request.headers().get(name).and_then(|v| v.to_str().ok());
        if received != Some(value) {
            return error_envelope(StatusCode::UNAUTHORIZED, "Unauthenticated.");
        }
    }
    next.run(request).await
}

async fn locations() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "locations": [
            {"id": 1, "location": "NYC, Rack1", "lat": 40.71, "lng": -74.0},
            {"id": 2, "location": "NYC, Rack2", "lat": null, "lng": null},
            {"id": 3, "location": "LA", "timestamp": "2024-01-01 00:00:00"},
        ],
        "count": 3,
    }))
}

async fn search_devices(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("type").map(String::as_str) != Some("location") {
        return error_envelope(StatusCode::BAD_REQUEST, "unsupported search type");
    }
    let query = params.get("query").cloned().unwrap_or_default();
    let matched: Vec<Value> = devices()
        .as_array()
        .into_iter()
        .flatten()
        .filter(|d| d["location"].as_str().is_some_and(|l| l.contains(&query)))
        .cloned()
        .collect();
    Json(json!({"status": "ok", "devices": matched, "count": matched.len()})).into_response()
}

async fn all_devices() -> Json<Value> {
    Json(json!({"status": "ok", "devices": devices(), "count": 3}))
}

async fn read_device(Path(hostname): Path<String>) -> Response {
    match hostname.as_str() {
        "ghost" => Json(json!({"status": "ok", "devices": []})).into_response(),
        "garbled" => (StatusCode::INTERNAL_SERVER_ERROR, "<html>Whoops</html>").into_response(),
        "missing" => error_envelope(StatusCode::NOT_FOUND, "Device missing does not exist"),
        _ => {
            let found: Vec<Value> = devices()
                .as_array()
                .into_iter()
                .flatten()
                .filter(|d| d["hostname"] == json!(hostname))
                .cloned()
                .collect();
            Json(json!({"status": "ok", "devices": found})).into_response()
        }
    }
}

async fn add_device(Json(body): Json<Value>) -> String {
    let hostname = body["hostname"].as_str().unwrap_or_default();
    json!({"status": "ok", "message": format!("Device {} (4) has been added successfully", hostname)}).to_string()
}

async fn delete_device(Path(hostname): Path<String>) -> String {
    json!({"status": "ok", "message": format!("Removed device {}\n", hostname)}).to_string()
}

async fn update_device(Path(hostname): Path<String>, Json(body): Json<Value>) -> String {
    json!({"status": "ok", "message": format!("Device {} {} field has been updated", hostname, body["field"])}).to_string()
}

async fn device_ports(
    Path(hostname): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let columns = params.get("columns").cloned().unwrap_or_default();
    Json(json!({
        "status": "ok",
        "ports": [
            {"ifName": "Gi1/0/1", "ifAlias": format!("{} uplink", hostname), "requested": columns},
            {"ifName": "Gi1/0/2", "ifAlias": "", "requested": columns},
        ],
    }))
}

async fn device_ip(Path(hostname): Path<String>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "addresses": [
            {"ipv4_address_id": 1, "ipv4_address": hostname, "ipv4_prefixlen": 24, "port_id": 10, "context_name": ""},
        ],
    }))
}

async fn networks() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "ip_networks": [
            {"ipv4_network_id": 1, "ipv4_network": "10.0.0.0/24", "context_name": ""},
            {"ipv4_network_id": 2, "ipv4_network": "10.1.0.0/30", "context_name": null},
        ],
        "count": 2,
    }))
}

async fn device_groups() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "groups": [{"id": 1, "name": "Switches", "desc": "Access layer", "type": "dynamic"}],
        "count": 1,
    }))
}

async fn group_members(Path(group): Path<String>) -> Response {
    if group != "Switches" {
        return error_envelope(StatusCode::NOT_FOUND, "Device group not found");
    }
    Json(json!({"status": "ok", "devices": [{"device_id": 1}, {"device_id": 2}], "count": 2})).into_response()
}

async fn read_port(Path(port_id): Path<u64>) -> Json<Value> {
    if port_id == 404 {
        return Json(json!({"status": "ok", "port": []}));
    }
    Json(json!({"status": "ok", "port": [{"port_id": port_id, "device_id": 1, "ifName": "Gi1/0/1"}]}))
}

async fn search_ports(Path(query): Path<String>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "ports": [{"port_id": 10, "ifAlias": format!("{} to core", query)}],
    }))
}

async fn search_ports_in(Path((field, query)): Path<(String, String)>) -> Response {
    if field != "ifAlias" {
        return error_envelope(StatusCode::BAD_REQUEST, "unsupported search field");
    }
    Json(json!({
        "status": "ok",
        "ports": [{"port_id": 11, "ifAlias": query}],
    }))
    .into_response()
}

async fn port_group_graph(
    Path(description): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if description != "transit" || params.get("width").map(String::as_str) != Some("640") {
        return error_envelope(StatusCode::NOT_FOUND, "No port group");
    }
    GRAPH_SVG.into_response()
}

async fn port_graph(
    Path((hostname, ifname, graph_type)): Path<(String, String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let window_ok = params.get("width").map(String::as_str) == Some("640")
        && params.get("height").map(String::as_str) == Some("240")
        && params.get("from").map(String::as_str) == Some("-1d")
        && params.get("to").map(String::as_str) == Some("now");
    if hostname != "10.0.0.1" || ifname != "Gi1/0/1" || graph_type != "port_bits" || !window_ok {
        return error_envelope(StatusCode::NOT_FOUND, "No graph");
    }
    GRAPH_SVG.into_response()
}

async fn wireless_graph(Path((hostname, graph_type)): Path<(String, String)>) -> Response {
    if hostname != "ap-1" || graph_type != "clients" {
        return error_envelope(StatusCode::NOT_FOUND, "No graph");
    }
    GRAPH_SVG.into_response()
}

fn router() -> Router {
    Router::new()
        .route("/api/v0/resources/locations", get(locations))
        .route("/api/v0/resources/ip/networks", get(networks))
        .route("/api/v0/devices", get(search_devices).post(add_device))
        .route("/api/v0/devices/", get(all_devices))
        .route(
            "/api/v0/devices/{hostname}",
            get(read_device).delete(delete_device).patch(update_device),
        )
        .route("/api/v0/devices/{hostname}/ports", get(device_ports))
        .route("/api/v0/devices/{hostname}/ip", get(device_ip))
        .route("/api/v0/devices/{hostname}/ports/{ifname}/{graph_type}", get(port_graph))
        .route("/api/v0/devices/{hostname}/graphs/wireless/{graph_type}", get(wireless_graph))
        .route("/api/v0/devicegroups", get(device_groups))
        .route("/api/v0/devicegroups/{group}", get(group_members))
        .route("/api/v0/ports/{port_id}", get(read_port))
        .route("/api/v0/ports/search/{query}", get(search_ports))
        .route("/api/v0/ports/search/{field}/{query}", get(search_ports_in))
        .route("/api/v0/portgroups/{description}", get(port_group_graph))
        .layer(middleware::from_fn(require_headers))
}

/// Start the stand-in server and return its address ("127.0.0.1:port")
async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, router()).await.expect("Test server failed");
    });

    addr.to_string()
}

async fn client() -> LibreNmsClient {
    let addr = start_server().await;
    LibreNmsClient::new(format!("http://{}", addr), TOKEN).expect("Failed to create client")
}

#[tokio::test]
async fn test_host_without_scheme_gets_http() {
    let addr = start_server().await;
    let client = LibreNmsClient::new(&addr, TOKEN).expect("Failed to create client");

    assert_eq!(client.base_url(), format!("http://{}/api/v0/", addr));
    let devices = client.list_all_devices().await.expect("Failed to list devices");
    assert_eq!(devices.len(), 3);
}

#[tokio::test]
async fn test_read_locations_and_site_names() {
    let client = client().await;

    let locations = client.read_locations().await.expect("Failed to read locations");
    assert_eq!(locations.len(), 3);
    assert_eq!(locations[2].extra.get("timestamp"), Some(&json!("2024-01-01 00:00:00")));

    let sites = LocationFilter::new().first_comma_filter(&locations);
    assert_eq!(sites, vec!["LA", "NYC"]);
}

#[tokio::test]
async fn test_location_search() {
    let client = client().await;

    let devices = client.location_search("NYC, Rack2").await.expect("Failed to search");
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].hostname, "10.0.0.2");
}

#[tokio::test]
async fn test_list_all_devices_then_filter() {
    let client = client().await;

    let devices = client.list_all_devices().await.expect("Failed to list devices");
    assert_eq!(devices[0].sys_name.as_deref(), Some("core-sw1"));
    assert_eq!(devices[2].features, None);

    let filter = DeviceFilter::new(devices);
    let cisco: Vec<&str> = filter
        .hardware_filter(&["Cisco"])
        .into_iter()
        .map(|d| d.hostname.as_str())
        .collect();
    assert_eq!(cisco, vec!["10.0.0.1"]);

    let in_10: Vec<&str> = filter
        .ip_filter(&["10."])
        .into_iter()
        .map(|d| d.hostname.as_str())
        .collect();
    assert_eq!(in_10, vec!["10.0.0.1", "10.1.0.1"]);
}

#[tokio::test]
async fn test_read_device() {
    let client = client().await;

    let device = client.read_device("10.1.0.1").await.expect("Failed to read device");
    assert_eq!(device.device_id, Some(3));
    assert_eq!(device.location.as_deref(), Some("LA"));
    assert!(device.is_up());
}

#[tokio::test]
async fn test_read_device_empty_array() {
    let client = client().await;

    let err = client.read_device("ghost").await.unwrap_err();
    assert!(matches!(err, LibreNmsError::EmptyResult(_)), "got {err:?}");
}

#[tokio::test]
async fn test_read_device_error_envelope() {
    let client = client().await;

    let err = client.read_device("missing").await.unwrap_err();
    match err {
        LibreNmsError::MissingField { path, field } => {
            assert_eq!(path, "devices/missing");
            assert_eq!(field, "devices");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_read_device_not_json() {
    let client = client().await;

    let err = client.read_device("garbled").await.unwrap_err();
    assert!(matches!(err, LibreNmsError::Serialization(_)), "got {err:?}");
}

#[tokio::test]
async fn test_wrong_token_surfaces_as_missing_field() {
    let addr = start_server().await;
    let client = LibreNmsClient::new(&addr, "wrong-token").expect("Failed to create client");

    let err = client.list_all_devices().await.unwrap_err();
    assert!(matches!(err, LibreNmsError::MissingField { field: "devices", .. }), "got {err:?}");
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);

    let client = LibreNmsClient::new(addr.to_string(), TOKEN).expect("Failed to create client");
    let err = client.read_locations().await.unwrap_err();
    assert!(matches!(err, LibreNmsError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn test_read_device_ports() {
    let client = client().await;

    let ports = client
        .read_device_ports("10.0.0.1", "ifName,ifAlias")
        .await
        .expect("Failed to read ports");
    assert_eq!(ports.len(), 2);
    assert_eq!(ports[0].if_name.as_deref(), Some("Gi1/0/1"));
    assert_eq!(ports[0].if_alias.as_deref(), Some("10.0.0.1 uplink"));
    assert_eq!(ports[0].extra.get("requested"), Some(&json!("ifName,ifAlias")));
}

#[tokio::test]
async fn test_ipv4_networks_and_addresses() {
    let client = client().await;

    let networks = client.ipv4_networks().await.expect("Failed to list networks");
    assert_eq!(networks.len(), 2);
    assert_eq!(networks[1].ipv4_network, "10.1.0.0/30");
    assert_eq!(networks[1].context_name, None);

    let addresses = client
        .device_ip_addresses("10.0.0.1")
        .await
        .expect("Failed to list addresses");
    assert_eq!(addresses[0].ipv4_address.as_deref(), Some("10.0.0.1"));
    assert_eq!(addresses[0].ipv4_prefixlen, Some(24));
    assert_eq!(addresses[0].port_id, Some(10));
}

#[tokio::test]
async fn test_device_groups() {
    let client = client().await;

    let members = client
        .device_group_members("Switches")
        .await
        .expect("Failed to read group");
    assert_eq!(
        members,
        vec![DeviceGroupMember { device_id: 1 }, DeviceGroupMember { device_id: 2 }]
    );

    let err = client.device_group_members("Routers").await.unwrap_err();
    assert!(matches!(err, LibreNmsError::MissingField { .. }));

    let groups = client.device_groups().await.expect("Failed to list groups");
    assert_eq!(groups["status"], json!("ok"));
    assert_eq!(groups["groups"][0]["name"], json!("Switches"));
}

#[tokio::test]
async fn test_ports() {
    let client = client().await;

    let port = client.read_port(10).await.expect("Failed to read port");
    assert_eq!(port.port_id, Some(10));
    assert_eq!(port.device_id, Some(1));

    let err = client.read_port(404).await.unwrap_err();
    assert!(matches!(err, LibreNmsError::EmptyResult(_)), "got {err:?}");

    let found = client.search_ports("uplink").await.expect("Failed to search ports");
    assert_eq!(found[0].if_alias.as_deref(), Some("uplink to core"));
}

#[tokio::test]
async fn test_search_ports_in_one_field() {
    let client = client().await;

    let found = client
        .search_ports("ifAlias/to core")
        .await
        .expect("Failed to search ports by field");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].port_id, Some(11));
    assert_eq!(found[0].if_alias.as_deref(), Some("to core"));
}

#[tokio::test]
async fn test_port_group_graph_is_unmodified() {
    let client = client().await;

    let svg = client
        .port_group_graph("transit", 640, 240)
        .await
        .expect("Failed to get graph");
    assert_eq!(svg, GRAPH_SVG);
}

#[tokio::test]
async fn test_port_graph_is_stripped() {
    let client = client().await;
    let window = GraphWindow {
        width: 640,
        height: 240,
        from: "-1d".to_string(),
        to: "now".to_string(),
    };

    let svg = client
        .port_graph("10.0.0.1", "Gi1/0/1", "port_bits", &window)
        .await
        .expect("Failed to get graph");
    assert_eq!(svg, STRIPPED_SVG);
}

#[tokio::test]
async fn test_wireless_graph_is_stripped() {
    let client = client().await;

    let svg = client
        .wireless_graph("ap-1", "clients")
        .await
        .expect("Failed to get graph");
    assert_eq!(svg, STRIPPED_SVG);
}

#[tokio::test]
async fn test_device_writes_return_raw_body() {
    let client = client().await;

    let added = client
        .add_device(&json!({"hostname": "10.0.0.9", "version": "v2c", "community": "public"}))
        .await
        .expect("Failed to add device");
    let added: Value = serde_json::from_str(&added).expect("add reply is JSON");
    assert_eq!(added["message"], json!("Device 10.0.0.9 (4) has been added successfully"));

    let updated = client
        .update_device("10.0.0.9", &json!({"field": "notes", "data": "lab"}))
        .await
        .expect("Failed to update device");
    assert!(updated.contains(r#"Device 10.0.0.9 \"notes\" field has been updated"#));

    let deleted = client.delete_device("10.0.0.9").await.expect("Failed to delete device");
    assert!(deleted.contains("Removed device 10.0.0.9"));
}

#[tokio::test]
async fn test_client_behind_trait_object() {
    let client: Box<dyn LibreNmsClientTrait> = Box::new(client().await);

    assert!(client.base_url().ends_with("/api/v0/"));
    let locations = client.read_locations().await.expect("Failed to read locations");
    assert_eq!(locations[0].location, "NYC, Rack1");
}
