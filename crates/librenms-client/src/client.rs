//! LibreNMS API client
//!
//! One method per LibreNMS v0 endpoint. Each method performs a single HTTP
//! request and unwraps the envelope field that endpoint answers with.

use crate::common::HttpClient;
use crate::common::envelope::{take_field, take_first};
use crate::config::LibreNmsConfig;
use crate::endpoints;
use crate::error::LibreNmsError;
use crate::librenms_trait::LibreNmsClientTrait;
use crate::models::*;
use crate::svg::strip_graph_sizing;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// LibreNMS API client
#[derive(Debug, Clone)]
pub struct LibreNmsClient {
    http: HttpClient,
}

impl LibreNmsClient {
    /// Create a new LibreNMS client
    ///
    /// # Arguments
    /// * `host` - LibreNMS host, with or without scheme (e.g., "10.0.0.5" or "https://nms.example.net")
    /// * `token` - API token, sent as `X-Auth-Token`
    ///
    /// No timeout is configured; use [`LibreNmsClient::with_client`] to supply a
    /// transport with one.
    pub fn new(host: impl AsRef<str>, token: impl AsRef<str>) -> Result<Self, LibreNmsError> {
        let client = Client::builder().build().map_err(LibreNmsError::Http)?;
        Self::with_client(client, host, token)
    }

    /// Create a client on top of a pre-configured `reqwest::Client`
    pub fn with_client(
        client: Client,
        host: impl AsRef<str>,
        token: impl AsRef<str>,
    ) -> Result<Self, LibreNmsError> {
        let http = HttpClient::new(client, host.as_ref(), token.as_ref())?;
        debug!("LibreNMS client for {}", http.base_url());
        Ok(Self { http })
    }

    /// Create a client from a [`LibreNmsConfig`]
    pub fn from_config(config: &LibreNmsConfig) -> Result<Self, LibreNmsError> {
        Self::new(&config.host, &config.token)
    }

    /// Get the base URL (e.g., "http://10.0.0.5/api/v0/")
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// List all locations
    pub async fn read_locations(&self) -> Result<Vec<Location>, LibreNmsError> {
        let body = self.http.get_json(endpoints::LOCATIONS).await?;
        take_field(body, endpoints::LOCATIONS, "locations")
    }

    /// Search devices by location
    ///
    /// LibreNMS matches `query` against the device location string.
    pub async fn location_search(&self, query: &str) -> Result<Vec<Device>, LibreNmsError> {
        let path = endpoints::location_search(query);
        let body = self.http.get_json(&path).await?;
        take_field(body, &path, "devices")
    }

    /// List all devices
    pub async fn list_all_devices(&self) -> Result<Vec<Device>, LibreNmsError> {
        let body = self.http.get_json(endpoints::ALL_DEVICES).await?;
        take_field(body, endpoints::ALL_DEVICES, "devices")
    }

    /// Get a device by hostname
    ///
    /// # Returns
    /// * `Ok(Device)` - The first record of the `devices` array
    /// * `Err(LibreNmsError::EmptyResult)` - If the array is empty
    pub async fn read_device(&self, hostname: &str) -> Result<Device, LibreNmsError> {
        let path = endpoints::device(hostname);
        let body = self.http.get_json(&path).await?;
        take_first(body, &path, "devices")
    }

    /// Get the ports of a device
    ///
    /// # Arguments
    /// * `hostname` - Device hostname or ID
    /// * `columns` - Comma-separated port columns to return (e.g., "ifName,ifAlias,ifOperStatus")
    pub async fn read_device_ports(&self, hostname: &str, columns: &str) -> Result<Vec<Port>, LibreNmsError> {
        let path = endpoints::device_ports(hostname, columns);
        let body = self.http.get_json(&path).await?;
        take_field(body, &path, "ports")
    }

    /// List IPv4 networks
    pub async fn ipv4_networks(&self) -> Result<Vec<IpNetwork>, LibreNmsError> {
        let body = self.http.get_json(endpoints::IPV4_NETWORKS).await?;
        take_field(body, endpoints::IPV4_NETWORKS, "ip_networks")
    }

    /// List the IP addresses configured on a device
    pub async fn device_ip_addresses(&self, hostname: &str) -> Result<Vec<IpAddress>, LibreNmsError> {
        let path = endpoints::device_ip(hostname);
        let body = self.http.get_json(&path).await?;
        take_field(body, &path, "addresses")
    }

    /// List the devices in a device group
    pub async fn device_group_members(&self, group: &str) -> Result<Vec<DeviceGroupMember>, LibreNmsError> {
        let path = endpoints::device_group(group);
        let body = self.http.get_json(&path).await?;
        take_field(body, &path, "devices")
    }

    /// List device groups (raw decoded body)
    pub async fn device_groups(&self) -> Result<Value, LibreNmsError> {
        self.http.get_json(endpoints::DEVICE_GROUPS).await
    }

    /// Get a port by ID
    pub async fn read_port(&self, port_id: u64) -> Result<Port, LibreNmsError> {
        let path = endpoints::port(port_id);
        let body = self.http.get_json(&path).await?;
        take_first(body, &path, "port")
    }

    /// Search ports; `"ifAlias/uplink"` searches only the `ifAlias` column
    pub async fn search_ports(&self, query: &str) -> Result<Vec<Port>, LibreNmsError> {
        let path = endpoints::port_search(query);
        let body = self.http.get_json(&path).await?;
        take_field(body, &path, "ports")
    }

    /// Get a port group graph, unmodified
    pub async fn port_group_graph(&self, description: &str, width: u32, height: u32) -> Result<String, LibreNmsError> {
        self.http
            .get_text(&endpoints::port_group_graph(description, width, height))
            .await
    }

    /// Get a port graph with its fixed width/height removed
    ///
    /// # Arguments
    /// * `hostname` - Device hostname or ID
    /// * `ifname` - Interface name (e.g., "Gi1/0/1"); encoded by the client
    /// * `graph_type` - Graph type (e.g., "port_bits")
    /// * `window` - Requested size and time range
    pub async fn port_graph(
        &self,
        hostname: &str,
        ifname: &str,
        graph_type: &str,
        window: &GraphWindow,
    ) -> Result<String, LibreNmsError> {
        let svg = self
            .http
            .get_text(&endpoints::port_graph(hostname, ifname, graph_type, window))
            .await?;
        Ok(strip_graph_sizing(&svg))
    }

    /// Get a wireless graph with its fixed width/height removed
    pub async fn wireless_graph(&self, hostname: &str, graph_type: &str) -> Result<String, LibreNmsError> {
        let svg = self
            .http
            .get_text(&endpoints::wireless_graph(hostname, graph_type))
            .await?;
        Ok(strip_graph_sizing(&svg))
    }

    /// Add a device
    ///
    /// `request` is sent as-is, e.g. `{"hostname": "10.0.0.9", "version": "v2c", "community": "public"}`.
    /// Returns the raw response body.
    pub async fn add_device(&self, request: &Value) -> Result<String, LibreNmsError> {
        self.http.post(endpoints::DEVICES, request).await
    }

    /// Delete a device, returning the raw response body
    pub async fn delete_device(&self, hostname: &str) -> Result<String, LibreNmsError> {
        self.http.delete(&endpoints::device(hostname)).await
    }

    /// Update device fields
    ///
    /// `request` is sent as-is, e.g. `{"field": "notes", "data": "moved to rack 4"}`.
    /// Returns the raw response body.
    pub async fn update_device(&self, hostname: &str, request: &Value) -> Result<String, LibreNmsError> {
        self.http.patch(&endpoints::device(hostname), request).await
    }
}

#[async_trait::async_trait]
impl LibreNmsClientTrait for LibreNmsClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn read_locations(&self) -> Result<Vec<Location>, LibreNmsError> {
        self.read_locations().await
    }

    async fn location_search(&self, query: &str) -> Result<Vec<Device>, LibreNmsError> {
        self.location_search(query).await
    }

    async fn list_all_devices(&self) -> Result<Vec<Device>, LibreNmsError> {
        self.list_all_devices().await
    }

    async fn read_device(&self, hostname: &str) -> Result<Device, LibreNmsError> {
        self.read_device(hostname).await
    }

    async fn read_device_ports(&self, hostname: &str, columns: &str) -> Result<Vec<Port>, LibreNmsError> {
        self.read_device_ports(hostname, columns).await
    }

    async fn ipv4_networks(&self) -> Result<Vec<IpNetwork>, LibreNmsError> {
        self.ipv4_networks().await
    }

    async fn device_ip_addresses(&self, hostname: &str) -> Result<Vec<IpAddress>, LibreNmsError> {
        self.device_ip_addresses(hostname).await
    }

    async fn device_group_members(&self, group: &str) -> Result<Vec<DeviceGroupMember>, LibreNmsError> {
        self.device_group_members(group).await
    }

    async fn device_groups(&self) -> Result<Value, LibreNmsError> {
        self.device_groups().await
    }

    async fn read_port(&self, port_id: u64) -> Result<Port, LibreNmsError> {
        self.read_port(port_id).await
    }

    async fn search_ports(&self, query: &str) -> Result<Vec<Port>, LibreNmsError> {
        self.search_ports(query).await
    }

    async fn port_group_graph(&self, description: &str, width: u32, height: u32) -> Result<String, LibreNmsError> {
        self.port_group_graph(description, width, height).await
    }

    async fn port_graph(&self, hostname: &str, ifname: &str, graph_type: &str, window: &GraphWindow) -> Result<String, LibreNmsError> {
        self.port_graph(hostname, ifname, graph_type, window).await
    }

    async fn wireless_graph(&self, hostname: &str, graph_type: &str) -> Result<String, LibreNmsError> {
        self.wireless_graph(hostname, graph_type).await
    }

    async fn add_device(&self, request: &Value) -> Result<String, LibreNmsError> {
        self.add_device(request).await
    }

    async fn delete_device(&self, hostname: &str) -> Result<String, LibreNmsError> {
        self.delete_device(hostname).await
    }

    async fn update_device(&self, hostname: &str, request: &Value) -> Result<String, LibreNmsError> {
        self.update_device(hostname, request).await
    }
}
