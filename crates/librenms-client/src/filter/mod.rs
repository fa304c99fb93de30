//! In-memory filters over API results
//!
//! - `device.rs` - `DeviceFilter`: up-filter plus hardware/feature/version/IP prefix filters
//! - `location.rs` - `LocationFilter`: site names from location strings

mod device;
mod location;

pub use device::DeviceFilter;
pub use location::{LocationFilter, site_name};
