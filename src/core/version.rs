//! Field-level change tracking between vehicle revisions
//!
//! Changes are detected against an explicit, ordered list of top-level
//! fields rather than by iterating serialized keys at runtime. Each field
//! declares how it is compared: most compare by deep structural equality
//! of their serialized form; reach metrics compare the audience and
//! coverage label lists as sets, since their order is display-only.

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;

use crate::entities::reach::ReachMetrics;
use crate::entities::vehicle::{FieldChange, MediaVehicle, VersionEntry};

/// Every diffable top-level field of [`MediaVehicle`], in record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VehicleField {
    Id,
    Name,
    Type,
    Description,
    Active,
    Version,
    VersionHistory,
    Reach,
    Pricing,
    Specifications,
    TimeSlots,
    CreatedAt,
    UpdatedAt,
}

impl VehicleField {
    const ALL: [VehicleField; 13] = [
        VehicleField::Id,
        VehicleField::Name,
        VehicleField::Type,
        VehicleField::Description,
        VehicleField::Active,
        VehicleField::Version,
        VehicleField::VersionHistory,
        VehicleField::Reach,
        VehicleField::Pricing,
        VehicleField::Specifications,
        VehicleField::TimeSlots,
        VehicleField::CreatedAt,
        VehicleField::UpdatedAt,
    ];

    fn name(self) -> &'static str {
        match self {
            VehicleField::Id => "id",
            VehicleField::Name => "name",
            VehicleField::Type => "type",
            VehicleField::Description => "description",
            VehicleField::Active => "active",
            VehicleField::Version => "version",
            VehicleField::VersionHistory => "version_history",
            VehicleField::Reach => "reach",
            VehicleField::Pricing => "pricing",
            VehicleField::Specifications => "specifications",
            VehicleField::TimeSlots => "time_slots",
            VehicleField::CreatedAt => "created_at",
            VehicleField::UpdatedAt => "updated_at",
        }
    }

    fn snapshot(self, vehicle: &MediaVehicle) -> Value {
        match self {
            VehicleField::Id => json(&vehicle.id),
            VehicleField::Name => json(&vehicle.name),
            VehicleField::Type => json(&vehicle.media_type),
            VehicleField::Description => json(&vehicle.description),
            VehicleField::Active => json(&vehicle.active),
            VehicleField::Version => json(&vehicle.version),
            VehicleField::VersionHistory => json(&vehicle.version_history),
            VehicleField::Reach => json(&vehicle.reach),
            VehicleField::Pricing => json(&vehicle.pricing),
            VehicleField::Specifications => json(&vehicle.specifications),
            VehicleField::TimeSlots => json(&vehicle.time_slots),
            VehicleField::CreatedAt => json(&vehicle.created_at),
            VehicleField::UpdatedAt => json(&vehicle.updated_at),
        }
    }

    fn changed(self, old: &MediaVehicle, new: &MediaVehicle) -> bool {
        match self {
            VehicleField::Reach => !reach_equivalent(&old.reach, &new.reach),
            _ => self.snapshot(old) != self.snapshot(new),
        }
    }
}

fn json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Reach metrics equality: audience and coverage labels as sets, the rest
/// structurally.
fn reach_equivalent(a: &ReachMetrics, b: &ReachMetrics) -> bool {
    fn label_set(labels: &[String]) -> BTreeSet<&str> {
        labels.iter().map(String::as_str).collect()
    }

    if label_set(&a.target_audience) != label_set(&b.target_audience) {
        return false;
    }
    if label_set(&a.geographic_coverage) != label_set(&b.geographic_coverage) {
        return false;
    }

    let without_labels = |metrics: &ReachMetrics| {
        let mut stripped = metrics.clone();
        stripped.target_audience.clear();
        stripped.geographic_coverage.clear();
        json(&stripped)
    };
    without_labels(a) == without_labels(b)
}

/// Build the version entry describing the transition from `old` to `new`.
///
/// Neither input is mutated; the caller appends the entry to the stored
/// record's history and bumps its version (see [`commit_update`]).
/// Diffing a record against itself yields an entry with no changes and
/// `version = old.version + 1`.
pub fn build_version_entry(
    old: &MediaVehicle,
    new: &MediaVehicle,
    modified_by: Option<String>,
) -> VersionEntry {
    let mut changes = Vec::new();

    for field in VehicleField::ALL {
        if field.changed(old, new) {
            changes.push(FieldChange {
                field: field.name().to_string(),
                old_value: field.snapshot(old),
                new_value: field.snapshot(new),
            });
        }
    }

    VersionEntry {
        version: old.version + 1,
        timestamp: Utc::now(),
        changes,
        modified_by,
    }
}

/// Outcome of folding an edited record back into the directory
#[derive(Debug)]
pub struct UpdateOutcome {
    /// The record to store
    pub vehicle: MediaVehicle,

    /// The history entry that was appended, or `None` when nothing changed
    pub entry: Option<VersionEntry>,
}

/// Fold an edited copy of `old` back into a storable record.
///
/// The change set is computed before any bookkeeping is touched, so
/// `updated_at` churn never shows up in the history. When at least one
/// field differs, the entry is appended, the version is bumped and
/// `updated_at` is stamped; otherwise the edited record is returned
/// unchanged with no new history entry.
pub fn commit_update(
    old: &MediaVehicle,
    edited: MediaVehicle,
    modified_by: Option<String>,
) -> UpdateOutcome {
    let entry = build_version_entry(old, &edited, modified_by);
    if entry.changes.is_empty() {
        return UpdateOutcome {
            vehicle: edited,
            entry: None,
        };
    }

    let mut vehicle = edited;
    vehicle.version = entry.version;
    vehicle.version_history = old.version_history.clone();
    vehicle.version_history.push(entry.clone());
    vehicle.updated_at = Utc::now();

    UpdateOutcome {
        vehicle,
        entry: Some(entry),
    }
}
