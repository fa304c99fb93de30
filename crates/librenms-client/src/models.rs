//! LibreNMS API models
//!
//! These models cover the fields this crate reads from the LibreNMS v0 API.
//! Every record keeps the remaining columns in `extra`, so round-tripping a
//! record through the client does not drop data the API returned.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Device status value LibreNMS uses for a device that is up
pub const STATUS_UP: i64 = 1;

/// Device record (from `devices`, `devices/{hostname}` and location search)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Numeric device ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<u64>,
    /// Hostname or IP the device was added with
    #[serde(default)]
    pub hostname: String,
    #[serde(default, rename = "sysName", skip_serializing_if = "Option::is_none")]
    /// SNMP sysName
    pub sys_name: Option<String>,
    /// 1 = up, 0 = down. Older LibreNMS releases send a boolean.
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: i64,
    /// Hardware model (e.g., "WS-C3750G-24TS")
    #[serde(default)]
    pub hardware: Option<String>,
    /// Feature set (e.g., "IPBASE")
    #[serde(default)]
    pub features: Option<String>,
    /// OS version
    #[serde(default)]
    pub version: Option<String>,
    /// Location string
    #[serde(default)]
    pub location: Option<String>,
    /// Detected OS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    /// Remaining columns
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Device {
    /// Whether LibreNMS reports the device as up
    pub fn is_up(&self) -> bool {
        self.status == STATUS_UP
    }
}

/// Location record (from `resources/locations`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Location ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Free-form location string, commonly "City, Building, Floor"
    pub location: String,
    /// Latitude, number or string as stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<Value>,
    /// Longitude, number or string as stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<Value>,
    /// Remaining columns
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Port record
///
/// Every column is optional because `devices/{hostname}/ports` only returns
/// the columns the caller asked for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Port {
    /// Port ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_id: Option<u64>,
    /// Owning device
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<u64>,
    /// Interface name (e.g., "Gi1/0/1")
    #[serde(default, rename = "ifName", skip_serializing_if = "Option::is_none")]
    pub if_name: Option<String>,
    /// Interface description
    #[serde(default, rename = "ifDescr", skip_serializing_if = "Option::is_none")]
    pub if_descr: Option<String>,
    /// Interface alias, usually the configured description
    #[serde(default, rename = "ifAlias", skip_serializing_if = "Option::is_none")]
    pub if_alias: Option<String>,
    /// Remaining columns
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// IPv4 network (from `resources/ip/networks`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpNetwork {
    /// Network ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4_network_id: Option<u64>,
    /// e.g., "10.0.0.0/24"
    pub ipv4_network: String,
    /// VRF context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_name: Option<String>,
    /// Remaining columns
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Address assigned to a device port (from `devices/{hostname}/ip`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpAddress {
    /// Port the address is on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_id: Option<u64>,
    /// IPv4 address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4_address: Option<String>,
    /// IPv4 prefix length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4_prefixlen: Option<u8>,
    /// IPv6 address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6_address: Option<String>,
    /// IPv6 prefix length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6_prefixlen: Option<u8>,
    /// Remaining columns
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Member of a device group (from `devicegroups/{group}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceGroupMember {
    /// Member device ID
    pub device_id: u64,
}

/// Size and time range of a port graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphWindow {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Start of the range, as LibreNMS accepts it (unix time or relative, e.g. "-1d")
    pub from: String,
    /// End of the range (e.g., "now")
    pub to: String,
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawStatus {
        Int(i64),
        Bool(bool),
        Text(String),
        Null(()),
    }

    Ok(match RawStatus::deserialize(deserializer)? {
        RawStatus::Int(n) => n,
        RawStatus::Bool(up) => i64::from(up),
        RawStatus::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("device status {:?} is not a number", s)))?,
        RawStatus::Null(()) => 0,
    })
}
