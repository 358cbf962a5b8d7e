//! Filter, search, sort and aggregate statistics over a vehicle collection
//!
//! The query engine never owns the collection. It owns only the transient
//! `(filters, search term)` state and derives a filtered, sorted view plus
//! directory-wide statistics from whatever slice it is handed. The same
//! `(collection, filters, term)` triple always produces the same output.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::entities::vehicle::{MediaType, MediaVehicle};

/// Inclusive numeric range constraint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeFilter<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd> RangeFilter<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Whether the value lies within `[min, max]`
    pub fn contains(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Structured filter criteria, AND-combined.
///
/// An absent or empty field imposes no constraint.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    /// Media types to include; empty means all
    pub types: Vec<MediaType>,

    /// Inclusive base-rate range
    pub price_range: Option<RangeFilter<f64>>,

    /// Inclusive average-reach range
    pub reach: Option<RangeFilter<u64>>,

    /// Target-audience labels; matches when any appears on the vehicle
    pub demographics: Vec<String>,

    /// Coverage labels; matches when any appears on the vehicle
    pub location: Vec<String>,

    /// Accepted but not consulted by matching (reserved filter capability)
    pub availability: Option<bool>,

    /// Accepted but not consulted by matching (reserved filter capability)
    pub time_slot: Option<String>,

    /// Lifecycle flag the vehicle must equal
    pub active: Option<bool>,
}

/// Directory-wide aggregate statistics.
///
/// Always computed over the full collection, independent of any filter or
/// search state. Averages over an empty collection are 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryStats {
    pub total: usize,
    pub active: usize,
    pub average_reach: u64,
    pub average_price: u64,
    pub type_distribution: BTreeMap<MediaType, usize>,
}

/// Derives a filtered, sorted vehicle view from externally-settable
/// filter and search state.
#[derive(Debug, Clone, Default)]
pub struct VehicleQuery {
    filters: SearchFilters,
    search_term: String,
}

impl VehicleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the free-text search term wholesale
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Replace the structured filters wholesale; callers merge fields
    /// themselves if they want partial updates
    pub fn set_filters(&mut self, filters: SearchFilters) {
        self.filters = filters;
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    /// Whether a vehicle passes the search term and every active filter
    pub fn matches(&self, vehicle: &MediaVehicle) -> bool {
        if !self.search_term.is_empty() {
            let term = self.search_term.to_lowercase();
            let matches_search = vehicle.name.to_lowercase().contains(&term)
                || vehicle.description.to_lowercase().contains(&term)
                || vehicle.media_type.as_str().to_lowercase().contains(&term);
            if !matches_search {
                return false;
            }
        }

        let filters = &self.filters;

        if !filters.types.is_empty() && !filters.types.contains(&vehicle.media_type) {
            return false;
        }

        if let Some(range) = &filters.price_range {
            if !range.contains(&vehicle.pricing.base_rate) {
                return false;
            }
        }

        if let Some(range) = &filters.reach {
            if !range.contains(&vehicle.reach.average_reach) {
                return false;
            }
        }

        if !filters.demographics.is_empty()
            && !filters
                .demographics
                .iter()
                .any(|demo| vehicle.reach.target_audience.contains(demo))
        {
            return false;
        }

        if !filters.location.is_empty()
            && !filters
                .location
                .iter()
                .any(|loc| vehicle.reach.geographic_coverage.contains(loc))
        {
            return false;
        }

        if let Some(active) = filters.active {
            if vehicle.active != active {
                return false;
            }
        }

        // `availability` and `time_slot` never constrain matching
        true
    }

    /// The filtered collection, stably sorted: active vehicles first, then
    /// newest `created_at` first. Equal keys keep collection order.
    pub fn results<'a>(&self, vehicles: &'a [MediaVehicle]) -> Vec<&'a MediaVehicle> {
        let mut matched: Vec<&MediaVehicle> =
            vehicles.iter().filter(|v| self.matches(v)).collect();
        matched.sort_by(|a, b| {
            b.active
                .cmp(&a.active)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        matched
    }
}

/// Aggregate statistics over the whole (unfiltered) collection.
///
/// Averages are rounded to the nearest integer, ties away from zero.
pub fn directory_stats(vehicles: &[MediaVehicle]) -> DirectoryStats {
    let mut type_distribution = BTreeMap::new();
    for vehicle in vehicles {
        *type_distribution.entry(vehicle.media_type).or_insert(0) += 1;
    }

    let (average_reach, average_price) = if vehicles.is_empty() {
        (0, 0)
    } else {
        let count = vehicles.len() as f64;
        let reach_sum: f64 = vehicles.iter().map(|v| v.reach.average_reach as f64).sum();
        let price_sum: f64 = vehicles.iter().map(|v| v.pricing.base_rate).sum();
        (
            (reach_sum / count).round() as u64,
            (price_sum / count).round() as u64,
        )
    };

    DirectoryStats {
        total: vehicles.len(),
        active: vehicles.iter().filter(|v| v.active).count(),
        average_reach,
        average_price,
        type_distribution,
    }
}
