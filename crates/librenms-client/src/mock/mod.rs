//! Mock LibreNmsClient for unit testing
//!
//! This module provides a mock implementation of LibreNmsClientTrait that can be used
//! in unit tests without requiring a running LibreNMS instance.
//!
//! The mock is organized into domain-specific modules:
//! - `devices.rs` - device reads, location search, add/update/delete
//! - `resources.rs` - locations, ports, IP resources, device groups, graphs

mod devices;
mod resources;

use crate::error::LibreNmsError;
use crate::librenms_trait::LibreNmsClientTrait;
use crate::models::*;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Mock LibreNmsClient for testing
///
/// This mock stores resources in memory. Reads answer the way LibreNMS would
/// for the stored data; writes change the store and return LibreNMS-style
/// JSON messages.
#[derive(Debug, Clone)]
pub struct MockLibreNmsClient {
    pub(crate) base_url: String,
    // In-memory storage for resources
    pub(crate) devices: Arc<Mutex<Vec<Device>>>,
    pub(crate) locations: Arc<Mutex<Vec<Location>>>,
    pub(crate) ports: Arc<Mutex<Vec<Port>>>,
    pub(crate) ip_networks: Arc<Mutex<Vec<IpNetwork>>>,
    pub(crate) ip_addresses: Arc<Mutex<HashMap<String, Vec<IpAddress>>>>,
    pub(crate) device_groups: Arc<Mutex<BTreeMap<String, Vec<DeviceGroupMember>>>>,
    // Graph bodies keyed by request path
    pub(crate) graphs: Arc<Mutex<HashMap<String, String>>>,
    // Counter for generating device IDs
    pub(crate) next_id: Arc<Mutex<u64>>,
}

impl MockLibreNmsClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            devices: Arc::new(Mutex::new(Vec::new())),
            locations: Arc::new(Mutex::new(Vec::new())),
            ports: Arc::new(Mutex::new(Vec::new())),
            ip_networks: Arc::new(Mutex::new(Vec::new())),
            ip_addresses: Arc::new(Mutex::new(HashMap::new())),
            device_groups: Arc::new(Mutex::new(BTreeMap::new())),
            graphs: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    /// Insert a device into the mock store (for test setup)
    ///
    /// A device without `device_id` gets the next free ID.
    pub fn insert_device(&self, mut device: Device) {
        let id = device.device_id.unwrap_or_else(|| self.next_id());
        device.device_id = Some(id);
        self.bump_next_id(id);
        lock(&self.devices).push(device);
    }

    /// Add a location to the mock store (for test setup)
    pub fn add_location(&self, location: Location) {
        lock(&self.locations).push(location);
    }

    /// Add a port to the mock store (for test setup)
    pub fn add_port(&self, port: Port) {
        lock(&self.ports).push(port);
    }

    /// Add an IPv4 network to the mock store (for test setup)
    pub fn add_ip_network(&self, network: IpNetwork) {
        lock(&self.ip_networks).push(network);
    }

    /// Set the addresses reported for a device (for test setup)
    pub fn set_ip_addresses(&self, hostname: impl Into<String>, addresses: Vec<IpAddress>) {
        lock(&self.ip_addresses).insert(hostname.into(), addresses);
    }

    /// Set the members of a device group (for test setup)
    pub fn set_device_group(&self, group: impl Into<String>, device_ids: &[u64]) {
        let members = device_ids
            .iter()
            .map(|&device_id| DeviceGroupMember { device_id })
            .collect();
        lock(&self.device_groups).insert(group.into(), members);
    }

    /// Set the body returned for a graph request path (for test setup)
    ///
    /// Build `path` with the `endpoints` helpers, e.g. `endpoints::wireless_graph("ap-1", "clients")`.
    pub fn set_graph(&self, path: impl Into<String>, body: impl Into<String>) {
        lock(&self.graphs).insert(path.into(), body.into());
    }

    /// Snapshot of the stored devices
    pub fn devices(&self) -> Vec<Device> {
        lock(&self.devices).clone()
    }

    /// Generate next ID
    pub(crate) fn next_id(&self) -> u64 {
        let mut id = lock(&self.next_id);
        let current = *id;
        *id += 1;
        current
    }

    fn bump_next_id(&self, used: u64) {
        let mut id = lock(&self.next_id);
        if *id <= used {
            *id = used + 1;
        }
    }
}

/// Lock a store, recovering the data if a panicking test poisoned it
pub(crate) fn lock<T>(store: &Mutex<T>) -> MutexGuard<'_, T> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait::async_trait]
impl LibreNmsClientTrait for MockLibreNmsClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn read_locations(&self) -> Result<Vec<Location>, LibreNmsError> {
        resources::read_locations(self).await
    }

    // Device reads - delegated to devices module
    async fn location_search(&self, query: &str) -> Result<Vec<Device>, LibreNmsError> {
        devices::location_search(self, query).await
    }

    async fn list_all_devices(&self) -> Result<Vec<Device>, LibreNmsError> {
        devices::list_all_devices(self).await
    }

    async fn read_device(&self, hostname: &str) -> Result<Device, LibreNmsError> {
        devices::read_device(self, hostname).await
    }

    // Ports, addressing, groups and graphs - delegated to resources module
    async fn read_device_ports(&self, hostname: &str, columns: &str) -> Result<Vec<Port>, LibreNmsError> {
        resources::read_device_ports(self, hostname, columns).await
    }

    async fn ipv4_networks(&self) -> Result<Vec<IpNetwork>, LibreNmsError> {
        resources::ipv4_networks(self).await
    }

    async fn device_ip_addresses(&self, hostname: &str) -> Result<Vec<IpAddress>, LibreNmsError> {
        resources::device_ip_addresses(self, hostname).await
    }

    async fn device_group_members(&self, group: &str) -> Result<Vec<DeviceGroupMember>, LibreNmsError> {
        resources::device_group_members(self, group).await
    }

    async fn device_groups(&self) -> Result<Value, LibreNmsError> {
        resources::device_groups(self).await
    }

    async fn read_port(&self, port_id: u64) -> Result<Port, LibreNmsError> {
        resources::read_port(self, port_id).await
    }

    async fn search_ports(&self, query: &str) -> Result<Vec<Port>, LibreNmsError> {
        resources::search_ports(self, query).await
    }

    async fn port_group_graph(&self, description: &str, width: u32, height: u32) -> Result<String, LibreNmsError> {
        resources::port_group_graph(self, description, width, height).await
    }

    async fn port_graph(&self, hostname: &str, ifname: &str, graph_type: &str, window: &GraphWindow) -> Result<String, LibreNmsError> {
        resources::port_graph(self, hostname, ifname, graph_type, window).await
    }

    async fn wireless_graph(&self, hostname: &str, graph_type: &str) -> Result<String, LibreNmsError> {
        resources::wireless_graph(self, hostname, graph_type).await
    }

    // Device writes - delegated to devices module
    async fn add_device(&self, request: &Value) -> Result<String, LibreNmsError> {
        devices::add_device(self, request).await
    }

    async fn delete_device(&self, hostname: &str) -> Result<String, LibreNmsError> {
        devices::delete_device(self, hostname).await
    }

    async fn update_device(&self, hostname: &str, request: &Value) -> Result<String, LibreNmsError> {
        devices::update_device(self, hostname, request).await
    }
}
