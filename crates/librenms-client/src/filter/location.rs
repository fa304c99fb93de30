//! Location list filter

use crate::models::Location;
use std::collections::BTreeSet;

/// The part of a location string before its first comma
///
/// "NYC, Rack1" gives "NYC"; a string without a comma is returned whole.
pub fn site_name(location: &str) -> &str {
    location.split(',').next().unwrap_or(location)
}

/// Reduces LibreNMS locations to a sorted list of site names
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationFilter;

impl LocationFilter {
    /// Create a location filter
    pub fn new() -> Self {
        Self
    }

    /// Site names of `locations`, deduplicated and sorted
    pub fn first_comma_filter(&self, locations: &[Location]) -> Vec<String> {
        locations
            .iter()
            .map(|l| site_name(&l.location))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
