//! The media vehicle record and its version log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::identity::VehicleId;
use crate::entities::pricing::PricingInfo;
use crate::entities::reach::ReachMetrics;
use crate::entities::specs::MediaSpecifications;

/// Advertising channel a vehicle belongs to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaType {
    Tv,
    Radio,
    Digital,
    Print,
    Ooh,
}

impl MediaType {
    /// Get the string representation of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Tv => "TV",
            MediaType::Radio => "RADIO",
            MediaType::Digital => "DIGITAL",
            MediaType::Print => "PRINT",
            MediaType::Ooh => "OOH",
        }
    }

    /// Get all valid media types
    pub fn all() -> &'static [MediaType] {
        &[
            MediaType::Tv,
            MediaType::Radio,
            MediaType::Digital,
            MediaType::Print,
            MediaType::Ooh,
        ]
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TV" => Ok(MediaType::Tv),
            "RADIO" => Ok(MediaType::Radio),
            "DIGITAL" => Ok(MediaType::Digital),
            "PRINT" => Ok(MediaType::Print),
            "OOH" => Ok(MediaType::Ooh),
            _ => Err(format!(
                "Unknown media type: '{}' (valid: TV, RADIO, DIGITAL, PRINT, OOH)",
                s
            )),
        }
    }
}

/// A bookable time slot on a vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot identifier, unique within the vehicle
    pub id: String,

    /// Slot start time (e.g. "19:00")
    pub start_time: String,

    /// Slot end time
    pub end_time: String,

    /// Remaining bookable units
    pub availability: u32,

    /// Multiplier applied to the base rate for this slot
    pub price_multiplier: f64,

    /// Content restrictions for the slot
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restrictions: Vec<String>,
}

/// One recorded field change within a version transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    /// Top-level field name that changed
    pub field: String,

    /// Serialized value before the change
    pub old_value: serde_json::Value,

    /// Serialized value after the change
    pub new_value: serde_json::Value,
}

/// Immutable snapshot of what changed at a version transition.
///
/// Entries are appended to a vehicle's history once and never mutated
/// or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Version number the transition produced
    pub version: u32,

    /// When the change set was recorded
    pub timestamp: DateTime<Utc>,

    /// Field-level changes, in declared field order
    pub changes: Vec<FieldChange>,

    /// Who made the change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
}

/// A purchasable advertising placement (a TV slot, a billboard, a podcast
/// spot, ...).
///
/// Invariant: `version == version_history.len() + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaVehicle {
    /// Unique identifier
    pub id: VehicleId,

    /// Display name
    pub name: String,

    /// Advertising channel
    #[serde(rename = "type")]
    pub media_type: MediaType,

    /// Free-text description
    pub description: String,

    /// Whether the vehicle is currently offered
    pub active: bool,

    /// Current version number, starts at 1
    #[serde(default = "default_version")]
    pub version: u32,

    /// Append-only log of version transitions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub version_history: Vec<VersionEntry>,

    /// Audience reach metrics
    pub reach: ReachMetrics,

    /// Pricing information
    pub pricing: PricingInfo,

    /// Type-specific technical attributes
    #[serde(default)]
    pub specifications: MediaSpecifications,

    /// Bookable time slots, when the channel has them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slots: Option<Vec<TimeSlot>>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

fn default_version() -> u32 {
    1
}
