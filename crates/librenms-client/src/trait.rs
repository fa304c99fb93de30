//! LibreNmsClient trait for mocking
//!
//! This trait abstracts the LibreNmsClient so code built on top of it can be
//! unit tested against `MockLibreNmsClient`.

use crate::error::LibreNmsError;
use crate::models::*;
use serde_json::Value;

/// Trait for LibreNMS API client operations
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait LibreNmsClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    // Devices and locations
    /// All locations
    async fn read_locations(&self) -> Result<Vec<Location>, LibreNmsError>;
    /// Devices whose location matches `query`
    async fn location_search(&self, query: &str) -> Result<Vec<Device>, LibreNmsError>;
    /// Every device
    async fn list_all_devices(&self) -> Result<Vec<Device>, LibreNmsError>;
    /// One device by hostname or IP
    async fn read_device(&self, hostname: &str) -> Result<Device, LibreNmsError>;
    /// Ports of a device, limited to `columns` (e.g., "ifName,ifAlias")
    async fn read_device_ports(&self, hostname: &str, columns: &str) -> Result<Vec<Port>, LibreNmsError>;

    // Addressing
    /// All IPv4 networks
    async fn ipv4_networks(&self) -> Result<Vec<IpNetwork>, LibreNmsError>;
    /// Addresses assigned to a device
    async fn device_ip_addresses(&self, hostname: &str) -> Result<Vec<IpAddress>, LibreNmsError>;

    // Device groups
    /// Members of a device group
    async fn device_group_members(&self, group: &str) -> Result<Vec<DeviceGroupMember>, LibreNmsError>;
    /// All device groups, as returned
    async fn device_groups(&self) -> Result<Value, LibreNmsError>;

    // Ports
    /// One port by ID
    async fn read_port(&self, port_id: u64) -> Result<Port, LibreNmsError>;
    /// Ports matching `query`; `"field/query"` searches one column
    async fn search_ports(&self, query: &str) -> Result<Vec<Port>, LibreNmsError>;

    // Graphs
    /// Port group graph SVG, unmodified
    async fn port_group_graph(&self, description: &str, width: u32, height: u32) -> Result<String, LibreNmsError>;
    /// Port graph SVG with its sizing stripped
    async fn port_graph(&self, hostname: &str, ifname: &str, graph_type: &str, window: &GraphWindow) -> Result<String, LibreNmsError>;
    /// Wireless graph SVG with its sizing stripped
    async fn wireless_graph(&self, hostname: &str, graph_type: &str) -> Result<String, LibreNmsError>;

    // Device writes
    /// Add a device; returns the raw response body
    async fn add_device(&self, request: &Value) -> Result<String, LibreNmsError>;
    /// Delete a device; returns the raw response body
    async fn delete_device(&self, hostname: &str) -> Result<String, LibreNmsError>;
    /// Update device fields; returns the raw response body
    async fn update_device(&self, hostname: &str, request: &Value) -> Result<String, LibreNmsError>;
}
