//! Audience reach metrics

use serde::{Deserialize, Serialize};

/// Engagement data for one audience segment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemographicSegment {
    /// Segment label (e.g. "Adults 25-54")
    pub segment: String,

    /// Share of the audience, in percent
    pub percentage: f64,

    /// Engagement rate for the segment, in percent
    pub engagement_rate: f64,

    /// Typical income bracket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_income: Option<String>,
}

/// Seasonal reach multiplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalTrend {
    /// Season label (e.g. "Q4", "Summer")
    pub season: String,

    /// Multiplier applied to average reach during the season
    pub reach_multiplier: f64,

    /// Time slots that perform best in the season
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub popular_time_slots: Vec<String>,
}

/// Reach metrics for a media vehicle.
///
/// `target_audience` and `geographic_coverage` are matched as sets by the
/// query engine; their stored order is display order only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReachMetrics {
    /// Estimated number of people exposed per placement
    pub average_reach: u64,

    /// Audience labels the vehicle targets
    #[serde(default)]
    pub target_audience: Vec<String>,

    /// Geographic labels the vehicle covers
    #[serde(default)]
    pub geographic_coverage: Vec<String>,

    /// Primary demographic label
    #[serde(default)]
    pub primary_demographic: String,

    /// Secondary demographic label
    #[serde(default)]
    pub secondary_demographic: String,

    /// Hours of peak exposure
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub peak_hours: Vec<String>,

    /// Daily impression count, where measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impressions_per_day: Option<u64>,

    /// Per-segment engagement breakdown
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub demographic_breakdown: Vec<DemographicSegment>,

    /// Seasonal reach multipliers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seasonal_trends: Vec<SeasonalTrend>,
}

impl Default for ReachMetrics {
    fn default() -> Self {
        Self {
            average_reach: 0,
            target_audience: Vec::new(),
            geographic_coverage: Vec::new(),
            primary_demographic: String::new(),
            secondary_demographic: String::new(),
            peak_hours: Vec::new(),
            impressions_per_day: None,
            demographic_breakdown: Vec::new(),
            seasonal_trends: Vec::new(),
        }
    }
}
