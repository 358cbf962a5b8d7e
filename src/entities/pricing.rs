//! Pricing information: base rate, rate card, discounts, bulk tiers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One price-by-duration option on a vehicle's rate card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateCardItem {
    /// Booked duration (e.g. "30s", "1 month")
    pub duration: String,

    /// Price for the duration
    pub price: f64,

    /// Time slot the price applies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,

    /// Placement position (e.g. "front page")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Premium placement flag
    #[serde(default)]
    pub premium: bool,
}

/// Discount rule category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
    Volume,
    Seasonal,
    EarlyBooking,
    Loyalty,
}

impl std::fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscountKind::Volume => write!(f, "VOLUME"),
            DiscountKind::Seasonal => write!(f, "SEASONAL"),
            DiscountKind::EarlyBooking => write!(f, "EARLY_BOOKING"),
            DiscountKind::Loyalty => write!(f, "LOYALTY"),
        }
    }
}

/// A discount that can apply to a booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountRule {
    /// Discount category
    #[serde(rename = "type")]
    pub kind: DiscountKind,

    /// Discount size, in percent
    pub percentage: f64,

    /// Human-readable conditions for the discount
    #[serde(default)]
    pub conditions: String,

    /// Expiry of the discount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,

    /// Minimum spend required to qualify
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_spend: Option<f64>,

    /// Whether the discount combines with others
    #[serde(default)]
    pub stackable: bool,
}

/// Unit-threshold discount tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkPricingTier {
    /// Units required to reach the tier
    pub minimum_units: u32,

    /// Discount at the tier, in percent
    pub discount_percentage: f64,

    /// Minimum spend required to reach the tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_spend: Option<f64>,
}

/// Pricing information for a media vehicle.
///
/// `Default` produces the shell used when only a base rate is known
/// (CSV import): USD, one-day minimum booking, empty rate card,
/// discounts and bulk tiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingInfo {
    /// Base rate per minimum booking period, non-negative
    pub base_rate: f64,

    /// ISO currency code
    pub currency: String,

    /// Minimum booking period, in days
    pub minimum_booking_period: u32,

    /// Price-by-duration options
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rate_card: Vec<RateCardItem>,

    /// Applicable discount rules
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discounts: Vec<DiscountRule>,

    /// Bulk pricing tiers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bulk_pricing: Vec<BulkPricingTier>,
}

impl Default for PricingInfo {
    fn default() -> Self {
        Self {
            base_rate: 0.0,
            currency: "USD".to_string(),
            minimum_booking_period: 1,
            rate_card: Vec::new(),
            discounts: Vec::new(),
            bulk_pricing: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_kind_serializes_screaming_snake() {
        let yaml = serde_yml::to_string(&DiscountKind::EarlyBooking).unwrap();
        assert_eq!(yaml.trim(), "EARLY_BOOKING");
    }

    #[test]
    fn test_default_pricing_shell() {
        let pricing = PricingInfo::default();
        assert_eq!(pricing.currency, "USD");
        assert_eq!(pricing.minimum_booking_period, 1);
        assert!(pricing.rate_card.is_empty());
        assert!(pricing.discounts.is_empty());
        assert!(pricing.bulk_pricing.is_empty());
    }
}
