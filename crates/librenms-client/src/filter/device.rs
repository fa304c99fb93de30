//! Device list filters

use crate::models::Device;

/// Prefix filters over a device list
///
/// The list is narrowed to up devices once, at construction, unless
/// `filter_up` is false. Each filter returns a new list; a device appears
/// once per candidate prefix it matches, so overlapping candidates produce
/// duplicates.
#[derive(Debug, Clone, Default)]
pub struct DeviceFilter {
    devices: Vec<Device>,
}

impl DeviceFilter {
    /// Keep only up devices
    pub fn new(devices: Vec<Device>) -> Self {
        Self::with_options(devices, true)
    }

    /// Keep only up devices if `filter_up` is set, otherwise the full list in input order
    pub fn with_options(devices: Vec<Device>, filter_up: bool) -> Self {
        let devices = if filter_up {
            up_devices(devices)
        } else {
            devices
        };
        Self { devices }
    }

    /// Devices with `status == 1`, in input order
    pub fn up_filter(devices: &[Device]) -> Vec<Device> {
        up_devices(devices.iter().cloned())
    }

    /// The retained device list
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Devices whose hardware starts with any of `prefixes`
    pub fn hardware_filter<S: AsRef<str>>(&self, prefixes: &[S]) -> Vec<&Device> {
        self.field_filter(|d| d.hardware.as_deref(), prefixes)
    }

    /// Devices whose features start with any of `prefixes`
    pub fn feature_filter<S: AsRef<str>>(&self, prefixes: &[S]) -> Vec<&Device> {
        self.field_filter(|d| d.features.as_deref(), prefixes)
    }

    /// Devices whose version starts with any of `prefixes`
    pub fn version_filter<S: AsRef<str>>(&self, prefixes: &[S]) -> Vec<&Device> {
        self.field_filter(|d| d.version.as_deref(), prefixes)
    }

    /// Devices whose hostname starts with any of `prefixes` (e.g., "10.20.")
    pub fn ip_filter<S: AsRef<str>>(&self, prefixes: &[S]) -> Vec<&Device> {
        self.prefix_matches(|d| Some(d.hostname.as_str()), prefixes)
    }

    // Devices with an empty or missing field never match.
    fn field_filter<S, F>(&self, field: F, prefixes: &[S]) -> Vec<&Device>
    where
        S: AsRef<str>,
        F: Fn(&Device) -> Option<&str>,
    {
        self.prefix_matches(|d| field(d).filter(|value| !value.is_empty()), prefixes)
    }

    fn prefix_matches<S, F>(&self, field: F, prefixes: &[S]) -> Vec<&Device>
    where
        S: AsRef<str>,
        F: Fn(&Device) -> Option<&str>,
    {
        let mut matched = Vec::new();
        for device in &self.devices {
            let Some(value) = field(device) else {
                continue;
            };
            for prefix in prefixes {
                if value.starts_with(prefix.as_ref()) {
                    matched.push(device);
                }
            }
        }
        matched
    }
}

fn up_devices(devices: impl IntoIterator<Item = Device>) -> Vec<Device> {
    devices.into_iter().filter(Device::is_up).collect()
}
