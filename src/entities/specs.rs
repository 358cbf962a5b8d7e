//! Type-specific technical specifications

use serde::{Deserialize, Serialize};

/// Technical attributes of a media vehicle.
///
/// A loose bag: which fields are meaningful depends on the media type
/// (dimensions for a billboard, broadcast network for a TV slot), and no
/// cross-field invariants are enforced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaSpecifications {
    /// Creative format (e.g. "HD Video", "Audio", "Digital Display")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,

    /// Physical or pixel dimensions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,

    /// Spot duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    /// Accepted file types
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_types: Vec<String>,

    /// Maximum creative file size, in megabytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<u64>,

    /// Display resolution (e.g. "4K")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,

    /// Print color profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_profile: Option<String>,

    /// Print bleed area
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bleed_area: Option<String>,

    /// Physical placement location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Typical viewing distance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewing_distance: Option<String>,

    /// Whether the placement is illuminated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illumination: Option<bool>,

    /// Broadcast network carrying the spot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broadcast_network: Option<String>,

    /// Broadcast frequency (e.g. "Weekly")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,

    /// Coverage label (e.g. "Global")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<String>,

    /// Technical delivery requirements
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technical_requirements: Vec<String>,

    /// Content restrictions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restrictions: Vec<String>,
}
