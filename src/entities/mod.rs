//! Entity types for the media vehicle directory

pub mod pricing;
pub mod reach;
pub mod samples;
pub mod specs;
pub mod vehicle;

pub use pricing::{BulkPricingTier, DiscountKind, DiscountRule, PricingInfo, RateCardItem};
pub use reach::{DemographicSegment, ReachMetrics, SeasonalTrend};
pub use specs::MediaSpecifications;
pub use vehicle::{FieldChange, MediaType, MediaVehicle, TimeSlot, VersionEntry};
