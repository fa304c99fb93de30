//! Device operations for MockLibreNmsClient
//!
//! Handles device reads, location search, and device add/update/delete.
//! Lookups that LibreNMS answers with an error envelope fail the same way the
//! real client does (`MissingField`); writes return the JSON text LibreNMS
//! would send, including error messages.

use super::{MockLibreNmsClient, lock};
use crate::endpoints;
use crate::error::LibreNmsError;
use crate::models::*;
use serde_json::{Value, json};

/// Whether `key` names `device` (by hostname or numeric device ID)
pub(crate) fn is_device(device: &Device, key: &str) -> bool {
    device.hostname == key || device.device_id.map(|id| id.to_string()).as_deref() == Some(key)
}

pub(crate) fn find_device(client: &MockLibreNmsClient, key: &str) -> Option<Device> {
    lock(&client.devices).iter().find(|d| is_device(d, key)).cloned()
}

pub(crate) fn missing(path: String, field: &'static str) -> LibreNmsError {
    LibreNmsError::MissingField { path, field }
}

fn reply(status: &str, message: String) -> String {
    json!({"status": status, "message": message}).to_string()
}

pub async fn location_search(client: &MockLibreNmsClient, query: &str) -> Result<Vec<Device>, LibreNmsError> {
    let devices = lock(&client.devices);
    Ok(devices
        .iter()
        .filter(|d| d.location.as_deref().is_some_and(|l| l.contains(query)))
        .cloned()
        .collect())
}

pub async fn list_all_devices(client: &MockLibreNmsClient) -> Result<Vec<Device>, LibreNmsError> {
    Ok(lock(&client.devices).clone())
}

pub async fn read_device(client: &MockLibreNmsClient, hostname: &str) -> Result<Device, LibreNmsError> {
    find_device(client, hostname).ok_or_else(|| missing(endpoints::device(hostname), "devices"))
}

pub async fn add_device(client: &MockLibreNmsClient, request: &Value) -> Result<String, LibreNmsError> {
    let Some(hostname) = request.get("hostname").and_then(Value::as_str) else {
        return Ok(reply("error", "Missing the device hostname".to_string()));
    };

    if find_device(client, hostname).is_some() {
        return Ok(reply("error", format!("Already have device {}", hostname)));
    }

    // `version` in an add request is the SNMP version, stored as `snmpver`
    let mut record = request.clone();
    if let Some(snmp_version) = record.as_object_mut().and_then(|r| r.remove("version")) {
        record["snmpver"] = snmp_version;
    }
    let mut device: Device = serde_json::from_value(record)?;
    let id = client.next_id();
    device.device_id = Some(id);
    device.status = STATUS_UP;
    lock(&client.devices).push(device);

    Ok(reply("ok", format!("Device {} ({}) has been added successfully", hostname, id)))
}

pub async fn delete_device(client: &MockLibreNmsClient, hostname: &str) -> Result<String, LibreNmsError> {
    let mut devices = lock(&client.devices);
    let Some(index) = devices.iter().position(|d| is_device(d, hostname)) else {
        return Ok(reply("error", format!("Device {} not found", hostname)));
    };

    let removed = devices.remove(index);
    Ok(json!({
        "status": "ok",
        "message": format!("Removed device {}\n", removed.hostname),
        "devices": [removed],
    })
    .to_string())
}

/// Apply `{"field": …, "data": …}` (single values or parallel arrays)
pub async fn update_device(client: &MockLibreNmsClient, hostname: &str, request: &Value) -> Result<String, LibreNmsError> {
    let updates = match (request.get("field"), request.get("data")) {
        (Some(Value::String(field)), Some(data)) => vec![(field.clone(), data.clone())],
        (Some(Value::Array(fields)), Some(Value::Array(data))) if fields.len() == data.len() => fields
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .zip(data.iter().cloned())
            .collect(),
        _ => return Ok(reply("error", "Invalid field/data in update request".to_string())),
    };

    let mut devices = lock(&client.devices);
    let Some(device) = devices.iter_mut().find(|d| is_device(d, hostname)) else {
        return Ok(reply("error", format!("Device {} not found", hostname)));
    };

    let mut record = serde_json::to_value(&*device)?;
    for (field, data) in &updates {
        record[field.as_str()] = data.clone();
    }
    *device = serde_json::from_value(record)?;

    let message = match updates.as_slice() {
        [(field, _)] => format!("Device {} field has been updated", field),
        _ => "Device fields have been updated".to_string(),
    };
    Ok(reply("ok", message))
}
