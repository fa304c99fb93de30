//! LibreNMS REST API Client
//!
//! A Rust client library for the LibreNMS v0 API, plus in-memory filters
//! for the device and location lists it returns.
//!
//! # Example
//!
//! ```no_run
//! use librenms_client::{DeviceFilter, LibreNmsClient, LocationFilter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client; "http://" is added when the host has no scheme
//! let client = LibreNmsClient::new("librenms.lan", "your-api-token")?;
//!
//! // Up Cisco devices
//! let devices = client.list_all_devices().await?;
//! let filter = DeviceFilter::new(devices);
//! let cisco = filter.hardware_filter(&["Cisco"]);
//!
//! // Site names ("NYC, Rack1" -> "NYC")
//! let locations = client.read_locations().await?;
//! let sites = LocationFilter::new().first_comma_filter(&locations);
//! # let _ = (cisco, sites);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Devices**: list, search by location, read, add, update, delete
//! - **Ports and addressing**: device ports, port search, IPv4 networks, device addresses
//! - **Graphs**: port, port group and wireless graphs, with fixed SVG sizing removed
//!   for port and wireless graphs
//! - **Filters**: up-devices, hardware/feature/version/hostname prefix filters, site names
//! - **Mocking**: `MockLibreNmsClient` behind the `test-util` feature

pub mod client;
pub mod common;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod filter;
pub mod models;
pub mod svg;
#[path = "trait.rs"]
pub mod librenms_trait;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::LibreNmsClient;
pub use common::HttpClient;
pub use config::LibreNmsConfig;
pub use error::LibreNmsError;
pub use filter::{DeviceFilter, LocationFilter, site_name};
pub use librenms_trait::LibreNmsClientTrait;
pub use models::*;
pub use svg::strip_graph_sizing;
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockLibreNmsClient;
