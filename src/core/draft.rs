//! Partially specified vehicles and the validation gate to full records

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use crate::core::identity::VehicleId;
use crate::entities::pricing::PricingInfo;
use crate::entities::reach::ReachMetrics;
use crate::entities::specs::MediaSpecifications;
use crate::entities::vehicle::{MediaType, MediaVehicle, TimeSlot};

/// A vehicle under construction (form input, CSV row).
///
/// Every field is optional until [`VehicleDraft::promote`] turns the draft
/// into a full [`MediaVehicle`]. Validation reports problems as a list of
/// messages and never rejects by panicking.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VehicleDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reach: Option<ReachMetrics>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifications: Option<MediaSpecifications>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_slots: Option<Vec<TimeSlot>>,
}

impl VehicleDraft {
    /// Check the minimum fields required for a draft to become a record.
    ///
    /// Returns human-readable error messages in a fixed order; an empty
    /// list means the draft is promotable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
            errors.push("Name is required".to_string());
        }
        if self.media_type.is_none() {
            errors.push("Type is required".to_string());
        }
        if self
            .description
            .as_deref()
            .map_or(true, |d| d.trim().is_empty())
        {
            errors.push("Description is required".to_string());
        }
        if self.reach.as_ref().map_or(true, |r| r.average_reach == 0) {
            errors.push("Average reach is required".to_string());
        }
        if self.pricing.as_ref().map_or(true, |p| p.base_rate <= 0.0) {
            errors.push("Base rate is required".to_string());
        }

        errors
    }

    /// Promote the draft to a full record with a fresh identity.
    ///
    /// The new vehicle starts at version 1 with an empty history and both
    /// timestamps set to now. Fails with the same messages [`validate`]
    /// reports.
    ///
    /// [`validate`]: VehicleDraft::validate
    pub fn promote(self) -> Result<MediaVehicle, DraftError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(DraftError { errors });
        }

        let now = Utc::now();
        Ok(MediaVehicle {
            id: VehicleId::new(),
            // validate() guarantees the required fields are present
            name: self.name.unwrap_or_default(),
            media_type: self.media_type.unwrap_or(MediaType::Tv),
            description: self.description.unwrap_or_default(),
            active: self.active.unwrap_or(true),
            version: 1,
            version_history: Vec::new(),
            reach: self.reach.unwrap_or_default(),
            pricing: self.pricing.unwrap_or_default(),
            specifications: self.specifications.unwrap_or_default(),
            time_slots: self.time_slots,
            created_at: now,
            updated_at: now,
        })
    }
}

/// A draft failed validation during promotion
#[derive(Debug, Error)]
#[error("invalid vehicle: {}", errors.join(", "))]
pub struct DraftError {
    /// The messages [`VehicleDraft::validate`] produced
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> VehicleDraft {
        VehicleDraft {
            name: Some("Morning Drive Radio".to_string()),
            media_type: Some(MediaType::Radio),
            description: Some("Drive-time radio spot".to_string()),
            reach: Some(ReachMetrics {
                average_reach: 80_000,
                ..Default::default()
            }),
            pricing: Some(PricingInfo {
                base_rate: 1_200.0,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_draft_reports_all_errors_in_order() {
        let errors = VehicleDraft::default().validate();
        assert_eq!(
            errors,
            vec![
                "Name is required",
                "Type is required",
                "Description is required",
                "Average reach is required",
                "Base rate is required",
            ]
        );
    }

    #[test]
    fn test_complete_draft_is_valid() {
        assert!(complete_draft().validate().is_empty());
    }

    #[test]
    fn test_whitespace_name_rejected() {
        let mut draft = complete_draft();
        draft.name = Some("   ".to_string());
        assert_eq!(draft.validate(), vec!["Name is required"]);
    }

    #[test]
    fn test_zero_reach_rejected() {
        let mut draft = complete_draft();
        draft.reach = Some(ReachMetrics::default());
        assert_eq!(draft.validate(), vec!["Average reach is required"]);
    }

    #[test]
    fn test_zero_base_rate_rejected() {
        let mut draft = complete_draft();
        draft.pricing = Some(PricingInfo::default());
        assert_eq!(draft.validate(), vec!["Base rate is required"]);
    }

    #[test]
    fn test_validate_does_not_consume_draft() {
        let draft = complete_draft();
        let _ = draft.validate();
        // still usable afterwards
        assert!(draft.promote().is_ok());
    }

    #[test]
    fn test_promote_initializes_bookkeeping() {
        let vehicle = complete_draft().promote().unwrap();
        assert_eq!(vehicle.version, 1);
        assert!(vehicle.version_history.is_empty());
        assert!(vehicle.active);
        assert_eq!(vehicle.created_at, vehicle.updated_at);
    }

    #[test]
    fn test_promote_invalid_draft_fails() {
        let err = VehicleDraft::default().promote().unwrap_err();
        assert_eq!(err.errors.len(), 5);
    }
}
