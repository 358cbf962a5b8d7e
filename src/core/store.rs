//! Loading and saving vehicle files
//!
//! Vehicles live as `MV-<ULID>.mvd.yaml` files under the project's
//! `vehicles/` directory. Commands load the whole collection into memory,
//! operate on it, and write records back wholesale.

use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::core::project::{Project, VEHICLE_FILE_SUFFIX};
use crate::entities::vehicle::MediaVehicle;

/// Load every parseable vehicle in the project.
///
/// Files that fail to parse are reported on stderr and skipped; one broken
/// file never hides the rest of the directory.
pub fn load_all(project: &Project) -> Vec<MediaVehicle> {
    let mut vehicles = Vec::new();
    let dir = project.vehicles_dir();
    if !dir.exists() {
        return vehicles;
    }

    for entry in WalkDir::new(&dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().to_string_lossy().ends_with(VEHICLE_FILE_SUFFIX))
    {
        match fs::read_to_string(entry.path())
            .map_err(|e| e.to_string())
            .and_then(|content| {
                serde_yml::from_str::<MediaVehicle>(&content).map_err(|e| e.to_string())
            }) {
            Ok(vehicle) => vehicles.push(vehicle),
            Err(e) => {
                eprintln!("! Failed to parse {}: {}", entry.path().display(), e);
            }
        }
    }

    vehicles
}

/// Find a vehicle file by full ID or unique ID prefix.
///
/// Returns the path of the first file whose stem starts with the given
/// string (case-insensitive on the `MV-` prefix side).
pub fn find_vehicle_file(project: &Project, id: &str) -> Option<PathBuf> {
    let dir = project.vehicles_dir();
    if !dir.exists() {
        return None;
    }

    let needle = id.to_uppercase();
    for entry in WalkDir::new(&dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().to_string_lossy().ends_with(VEHICLE_FILE_SUFFIX))
    {
        let file_name = entry.file_name().to_string_lossy().to_uppercase();
        if file_name.starts_with(&needle) {
            return Some(entry.path().to_path_buf());
        }
    }

    None
}

/// Load a single vehicle by ID or ID prefix, with its file path
pub fn load_vehicle(project: &Project, id: &str) -> Result<Option<(PathBuf, MediaVehicle)>> {
    if let Some(path) = find_vehicle_file(project, id) {
        let content = fs::read_to_string(&path).into_diagnostic()?;
        let vehicle: MediaVehicle = serde_yml::from_str(&content).into_diagnostic()?;
        return Ok(Some((path, vehicle)));
    }
    Ok(None)
}

/// Write a vehicle record to its canonical file path
pub fn save_vehicle(project: &Project, vehicle: &MediaVehicle) -> Result<PathBuf> {
    let path = project.vehicle_path(&vehicle.id);
    let yaml = serde_yml::to_string(vehicle).into_diagnostic()?;
    fs::write(&path, yaml).into_diagnostic()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::samples::sample_vehicles;
    use tempfile::tempdir;

    fn test_project() -> (tempfile::TempDir, Project) {
        let tmp = tempdir().unwrap();
        let project = Project::init(tmp.path()).unwrap();
        (tmp, project)
    }

    #[test]
    fn test_load_all_empty_project() {
        let (_tmp, project) = test_project();
        assert!(load_all(&project).is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let (_tmp, project) = test_project();
        let vehicle = sample_vehicles().remove(0);

        let path = save_vehicle(&project, &vehicle).unwrap();
        assert!(path.is_file());

        let loaded = load_all(&project);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, vehicle.id);
        assert_eq!(loaded[0].name, vehicle.name);
    }

    #[test]
    fn test_find_by_id_prefix() {
        let (_tmp, project) = test_project();
        let vehicle = sample_vehicles().remove(0);
        save_vehicle(&project, &vehicle).unwrap();

        let full = vehicle.id.to_string();
        let prefix = &full[..10];

        assert!(find_vehicle_file(&project, &full).is_some());
        assert!(find_vehicle_file(&project, prefix).is_some());
        assert!(find_vehicle_file(&project, "MV-0000000000").is_none());
    }

    #[test]
    fn test_load_vehicle_missing_returns_none() {
        let (_tmp, project) = test_project();
        assert!(load_vehicle(&project, "MV-MISSING").unwrap().is_none());
    }

    #[test]
    fn test_broken_file_is_skipped() {
        let (_tmp, project) = test_project();
        let vehicle = sample_vehicles().remove(0);
        save_vehicle(&project, &vehicle).unwrap();

        fs::write(
            project.vehicles_dir().join("MV-BROKEN.mvd.yaml"),
            "not: [valid: vehicle",
        )
        .unwrap();

        assert_eq!(load_all(&project).len(), 1);
    }
}
