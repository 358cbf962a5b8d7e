//! Demonstration vehicles seeded by `mvd init --samples`

use chrono::Utc;

use crate::core::identity::VehicleId;
use crate::entities::pricing::{PricingInfo, RateCardItem};
use crate::entities::reach::ReachMetrics;
use crate::entities::specs::MediaSpecifications;
use crate::entities::vehicle::{MediaType, MediaVehicle};

/// Three demonstration listings, one per major channel family.
pub fn sample_vehicles() -> Vec<MediaVehicle> {
    let now = Utc::now();

    vec![
        MediaVehicle {
            id: VehicleId::new(),
            name: "Prime Time TV Spot".to_string(),
            media_type: MediaType::Tv,
            description: "Premium television advertising slot during peak evening hours \
                          with nationwide coverage."
                .to_string(),
            active: true,
            version: 1,
            version_history: Vec::new(),
            reach: ReachMetrics {
                average_reach: 1_500_000,
                target_audience: vec!["Adults 25-54".to_string(), "Urban".to_string()],
                geographic_coverage: vec!["National".to_string()],
                primary_demographic: "Adults 25-54".to_string(),
                secondary_demographic: "Adults 18-24".to_string(),
                peak_hours: vec!["19:00-23:00".to_string()],
                ..Default::default()
            },
            pricing: PricingInfo {
                base_rate: 15_000.0,
                minimum_booking_period: 7,
                rate_card: vec![RateCardItem {
                    duration: "30s".to_string(),
                    price: 15_000.0,
                    time_slot: Some("Prime Time".to_string()),
                    position: None,
                    premium: true,
                }],
                ..Default::default()
            },
            specifications: MediaSpecifications {
                format: "HD Video".to_string(),
                duration: Some(30),
                broadcast_network: Some("National Network".to_string()),
                technical_requirements: vec!["1920x1080".to_string(), "H.264".to_string()],
                ..Default::default()
            },
            time_slots: None,
            created_at: now,
            updated_at: now,
        },
        MediaVehicle {
            id: VehicleId::new(),
            name: "Digital Billboard - Times Square".to_string(),
            media_type: MediaType::Ooh,
            description: "High-impact digital billboard located in the heart of Times \
                          Square, NYC."
                .to_string(),
            active: true,
            version: 1,
            version_history: Vec::new(),
            reach: ReachMetrics {
                average_reach: 500_000,
                target_audience: vec![
                    "All Demographics".to_string(),
                    "Tourists".to_string(),
                    "Urban".to_string(),
                ],
                geographic_coverage: vec!["New York City".to_string()],
                primary_demographic: "Adults 18-65".to_string(),
                secondary_demographic: "Tourists".to_string(),
                impressions_per_day: Some(500_000),
                ..Default::default()
            },
            pricing: PricingInfo {
                base_rate: 25_000.0,
                minimum_booking_period: 30,
                rate_card: vec![RateCardItem {
                    duration: "1 month".to_string(),
                    price: 25_000.0,
                    time_slot: None,
                    position: None,
                    premium: true,
                }],
                ..Default::default()
            },
            specifications: MediaSpecifications {
                format: "Digital Display".to_string(),
                dimensions: Some("40ft x 60ft".to_string()),
                resolution: Some("4K".to_string()),
                location: Some("Times Square, NYC".to_string()),
                illumination: Some(true),
                viewing_distance: Some("50-500ft".to_string()),
                ..Default::default()
            },
            time_slots: None,
            created_at: now,
            updated_at: now,
        },
        MediaVehicle {
            id: VehicleId::new(),
            name: "Premium Podcast Integration".to_string(),
            media_type: MediaType::Radio,
            description: "Native advertising integration within top-rated business and \
                          tech podcasts."
                .to_string(),
            active: true,
            version: 1,
            version_history: Vec::new(),
            reach: ReachMetrics {
                average_reach: 250_000,
                target_audience: vec!["Professionals".to_string(), "Tech-savvy".to_string()],
                geographic_coverage: vec!["Global".to_string()],
                primary_demographic: "Professionals 25-45".to_string(),
                secondary_demographic: "Tech Enthusiasts".to_string(),
                ..Default::default()
            },
            pricing: PricingInfo {
                base_rate: 5_000.0,
                minimum_booking_period: 1,
                rate_card: vec![RateCardItem {
                    duration: "60s".to_string(),
                    price: 5_000.0,
                    time_slot: None,
                    position: None,
                    premium: false,
                }],
                ..Default::default()
            },
            specifications: MediaSpecifications {
                format: "Audio".to_string(),
                duration: Some(60),
                frequency: Some("Weekly".to_string()),
                coverage: Some("Global".to_string()),
                ..Default::default()
            },
            time_slots: None,
            created_at: now,
            updated_at: now,
        },
    ]
}
