//! Envelope unwrapping
//!
//! Most LibreNMS read endpoints answer with an object such as
//! `{"status": "ok", "devices": [...], "count": 2}`. The field holding the
//! payload is named per endpoint and does not always match the path
//! (`devicegroups/{group}` answers with `devices`).

use crate::error::LibreNmsError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Take `field` out of a decoded response body and deserialize it
pub fn take_field<T: DeserializeOwned>(
    mut body: Value,
    path: &str,
    field: &'static str,
) -> Result<T, LibreNmsError> {
    let value = body
        .get_mut(field)
        .map(Value::take)
        .ok_or_else(|| LibreNmsError::MissingField {
            path: path.to_string(),
            field,
        })?;

    serde_json::from_value(value).map_err(LibreNmsError::Serialization)
}

/// Take the first element of the array held in `field`
pub fn take_first<T: DeserializeOwned>(
    body: Value,
    path: &str,
    field: &'static str,
) -> Result<T, LibreNmsError> {
    let records: Vec<T> = take_field(body, path, field)?;
    records.into_iter().next().ok_or_else(|| {
        LibreNmsError::EmptyResult(format!("{} returned no `{}` records", path, field))
    })
}
