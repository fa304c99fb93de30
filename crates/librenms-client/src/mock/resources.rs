//! Resource operations for MockLibreNmsClient
//!
//! Handles locations, ports, IPv4 networks and addresses, device groups, and graphs

use super::devices::{find_device, missing};
use super::{MockLibreNmsClient, lock};
use crate::endpoints;
use crate::error::LibreNmsError;
use crate::models::*;
use crate::svg::strip_graph_sizing;
use serde_json::{Value, json};

pub async fn read_locations(client: &MockLibreNmsClient) -> Result<Vec<Location>, LibreNmsError> {
    Ok(lock(&client.locations).clone())
}

/// Ports of a device, reduced to the requested columns
pub async fn read_device_ports(client: &MockLibreNmsClient, hostname: &str, columns: &str) -> Result<Vec<Port>, LibreNmsError> {
    let device = find_device(client, hostname)
        .ok_or_else(|| missing(endpoints::device_ports(hostname, columns), "ports"))?;

    let wanted: Vec<&str> = columns
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();

    lock(&client.ports)
        .iter()
        .filter(|p| p.device_id.is_some() && p.device_id == device.device_id)
        .map(|port| select_columns(port, &wanted))
        .collect()
}

fn select_columns(port: &Port, wanted: &[&str]) -> Result<Port, LibreNmsError> {
    if wanted.is_empty() {
        return Ok(port.clone());
    }
    let mut record = serde_json::to_value(port)?;
    if let Some(fields) = record.as_object_mut() {
        fields.retain(|key, _| wanted.contains(&key.as_str()));
    }
    Ok(serde_json::from_value(record)?)
}

pub async fn ipv4_networks(client: &MockLibreNmsClient) -> Result<Vec<IpNetwork>, LibreNmsError> {
    Ok(lock(&client.ip_networks).clone())
}

pub async fn device_ip_addresses(client: &MockLibreNmsClient, hostname: &str) -> Result<Vec<IpAddress>, LibreNmsError> {
    let device = find_device(client, hostname)
        .ok_or_else(|| missing(endpoints::device_ip(hostname), "addresses"))?;
    Ok(lock(&client.ip_addresses)
        .get(&device.hostname)
        .cloned()
        .unwrap_or_default())
}

pub async fn device_group_members(client: &MockLibreNmsClient, group: &str) -> Result<Vec<DeviceGroupMember>, LibreNmsError> {
    lock(&client.device_groups)
        .get(group)
        .cloned()
        .ok_or_else(|| missing(endpoints::device_group(group), "devices"))
}

pub async fn device_groups(client: &MockLibreNmsClient) -> Result<Value, LibreNmsError> {
    let groups = lock(&client.device_groups);
    let listed: Vec<Value> = groups
        .keys()
        .enumerate()
        .map(|(i, name)| json!({"id": i + 1, "name": name, "desc": ""}))
        .collect();
    Ok(json!({"status": "ok", "groups": listed, "count": groups.len()}))
}

pub async fn read_port(client: &MockLibreNmsClient, port_id: u64) -> Result<Port, LibreNmsError> {
    lock(&client.ports)
        .iter()
        .find(|p| p.port_id == Some(port_id))
        .cloned()
        .ok_or_else(|| LibreNmsError::EmptyResult(format!("{} returned no `port` records", endpoints::port(port_id))))
}

/// Ports whose ifName, ifDescr or ifAlias contains `query`
///
/// `"ifAlias/uplink"` searches only the named column.
pub async fn search_ports(client: &MockLibreNmsClient, query: &str) -> Result<Vec<Port>, LibreNmsError> {
    let (column, needle) = match query.split_once('/') {
        Some((column, needle)) => (Some(column), needle),
        None => (None, query),
    };
    Ok(lock(&client.ports)
        .iter()
        .filter(|p| {
            [("ifName", &p.if_name), ("ifDescr", &p.if_descr), ("ifAlias", &p.if_alias)]
                .into_iter()
                .filter(|(name, _)| column.is_none_or(|c| c == *name))
                .any(|(_, field)| field.as_deref().is_some_and(|v| v.contains(needle)))
        })
        .cloned()
        .collect())
}

fn graph(client: &MockLibreNmsClient, path: &str) -> String {
    lock(&client.graphs).get(path).cloned().unwrap_or_else(|| {
        json!({"status": "error", "message": "No graph found"}).to_string()
    })
}

pub async fn port_group_graph(client: &MockLibreNmsClient, description: &str, width: u32, height: u32) -> Result<String, LibreNmsError> {
    Ok(graph(client, &endpoints::port_group_graph(description, width, height)))
}

pub async fn port_graph(client: &MockLibreNmsClient, hostname: &str, ifname: &str, graph_type: &str, window: &GraphWindow) -> Result<String, LibreNmsError> {
    let svg = graph(client, &endpoints::port_graph(hostname, ifname, graph_type, window));
    Ok(strip_graph_sizing(&svg))
}

pub async fn wireless_graph(client: &MockLibreNmsClient, hostname: &str, graph_type: &str) -> Result<String, LibreNmsError> {
    let svg = graph(client, &endpoints::wireless_graph(hostname, graph_type));
    Ok(strip_graph_sizing(&svg))
}
