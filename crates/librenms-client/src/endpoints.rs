//! Endpoint paths, relative to the `/api/v0/` base URL
//!
//! Caller-supplied path segments are percent-encoded; LibreNMS expects
//! interface names such as `Gi0/1` in encoded form.

use crate::common::{build_query_string, encode_segment};
use crate::models::GraphWindow;

/// All locations
pub const LOCATIONS: &str = "resources/locations";
/// Full device list (LibreNMS routes the trailing slash separately)
pub const ALL_DEVICES: &str = "devices/";
/// Device collection, used for search and add
pub const DEVICES: &str = "devices";
/// All IPv4 networks
pub const IPV4_NETWORKS: &str = "resources/ip/networks";
/// All device groups
pub const DEVICE_GROUPS: &str = "devicegroups";

/// Devices at a location
pub fn location_search(query: &str) -> String {
    format!("{}?{}", DEVICES, build_query_string(&[("type", "location"), ("query", query)]))
}

/// One device by hostname or IP
pub fn device(hostname: &str) -> String {
    format!("devices/{}", encode_segment(hostname))
}

/// Ports of a device, limited to `columns`
pub fn device_ports(hostname: &str, columns: &str) -> String {
    format!(
        "devices/{}/ports?{}",
        encode_segment(hostname),
        build_query_string(&[("columns", columns)])
    )
}

/// Addresses assigned to a device
pub fn device_ip(hostname: &str) -> String {
    format!("devices/{}/ip", encode_segment(hostname))
}

/// Members of a device group
pub fn device_group(group: &str) -> String {
    format!("devicegroups/{}", encode_segment(group))
}

/// One port by ID
pub fn port(port_id: u64) -> String {
    format!("ports/{}", port_id)
}

/// Port search
///
/// `/` in `query` stays a path separator, so `"ifAlias/uplink"` searches
/// only the `ifAlias` column. Each piece between separators is encoded.
pub fn port_search(query: &str) -> String {
    let pieces: Vec<String> = query.split('/').map(encode_segment).collect();
    format!("ports/search/{}", pieces.join("/"))
}

/// Port group graph at a fixed size
pub fn port_group_graph(description: &str, width: u32, height: u32) -> String {
    format!(
        "portgroups/{}?width={}&height={}",
        encode_segment(description),
        width,
        height
    )
}

/// Graph of one device port
pub fn port_graph(hostname: &str, ifname: &str, graph_type: &str, window: &GraphWindow) -> String {
    let width = window.width.to_string();
    let height = window.height.to_string();
    format!(
        "devices/{}/ports/{}/{}?{}",
        encode_segment(hostname),
        encode_segment(ifname),
        encode_segment(graph_type),
        build_query_string(&[
            ("width", width.as_str()),
            ("height", height.as_str()),
            ("from", window.from.as_str()),
            ("to", window.to.as_str()),
        ])
    )
}

/// Wireless graph of a device
pub fn wireless_graph(hostname: &str, graph_type: &str) -> String {
    format!(
        "devices/{}/graphs/wireless/{}",
        encode_segment(hostname),
        encode_segment(graph_type)
    )
}
