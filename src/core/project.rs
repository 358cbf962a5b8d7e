//! Directory project discovery and structure

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::identity::VehicleId;

/// Extension carried by every vehicle file
pub const VEHICLE_FILE_SUFFIX: &str = ".mvd.yaml";

/// Represents an MVD directory project
#[derive(Debug)]
pub struct Project {
    /// Root directory of the project (parent of .mvd/)
    root: PathBuf,
}

impl Project {
    /// Find project root by walking up from the current directory
    pub fn discover() -> Result<Self, ProjectError> {
        let current =
            std::env::current_dir().map_err(|e| ProjectError::IoError(e.to_string()))?;
        Self::discover_from(&current)
    }

    /// Find project root by walking up from the given directory
    pub fn discover_from(start: &Path) -> Result<Self, ProjectError> {
        let mut current = start
            .canonicalize()
            .map_err(|e| ProjectError::IoError(e.to_string()))?;

        loop {
            let mvd_dir = current.join(".mvd");
            if mvd_dir.is_dir() {
                return Ok(Self { root: current });
            }

            if !current.pop() {
                return Err(ProjectError::NotFound {
                    searched_from: start.to_path_buf(),
                });
            }
        }
    }

    /// Create a new project structure at the given path
    pub fn init(path: &Path) -> Result<Self, ProjectError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        let mvd_dir = root.join(".mvd");
        if mvd_dir.exists() {
            return Err(ProjectError::AlreadyExists(root.clone()));
        }

        Self::create_structure(&root)?;
        Ok(Self { root })
    }

    /// Force initialization even if .mvd/ exists
    pub fn init_force(path: &Path) -> Result<Self, ProjectError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        Self::create_structure(&root)?;
        Ok(Self { root })
    }

    fn create_structure(root: &Path) -> Result<(), ProjectError> {
        std::fs::create_dir_all(root.join(".mvd"))
            .map_err(|e| ProjectError::IoError(e.to_string()))?;
        std::fs::create_dir_all(root.join("vehicles"))
            .map_err(|e| ProjectError::IoError(e.to_string()))?;

        let config_path = root.join(".mvd/config.yaml");
        std::fs::write(&config_path, Self::default_config())
            .map_err(|e| ProjectError::IoError(e.to_string()))?;

        Ok(())
    }

    fn default_config() -> &'static str {
        r#"# MVD Project Configuration

# Default author recorded in vehicle version history
# author: ""

# Editor to use for `mvd edit` (default: $EDITOR)
# editor: ""

# Default output format (auto, yaml, tsv, json, csv, md, id)
# default_format: auto
"#
    }

    /// Get the project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the .mvd configuration directory
    pub fn mvd_dir(&self) -> PathBuf {
        self.root.join(".mvd")
    }

    /// Get the directory holding vehicle files
    pub fn vehicles_dir(&self) -> PathBuf {
        self.root.join("vehicles")
    }

    /// Get the file path for a vehicle ID
    pub fn vehicle_path(&self, id: &VehicleId) -> PathBuf {
        self.vehicles_dir()
            .join(format!("{}{}", id, VEHICLE_FILE_SUFFIX))
    }
}

/// Errors that can occur working with projects
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("no MVD project found (searched from {searched_from}); run `mvd init` first")]
    NotFound { searched_from: PathBuf },

    #[error("MVD project already exists at {0}")]
    AlreadyExists(PathBuf),

    #[error("I/O error: {0}")]
    IoError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_structure() {
        let tmp = tempdir().unwrap();
        let project = Project::init(tmp.path()).unwrap();

        assert!(project.mvd_dir().is_dir());
        assert!(project.vehicles_dir().is_dir());
        assert!(project.mvd_dir().join("config.yaml").is_file());
    }

    #[test]
    fn test_init_twice_fails() {
        let tmp = tempdir().unwrap();
        Project::init(tmp.path()).unwrap();

        let err = Project::init(tmp.path()).unwrap_err();
        assert!(matches!(err, ProjectError::AlreadyExists(_)));
    }

    #[test]
    fn test_discover_from_nested_directory() {
        let tmp = tempdir().unwrap();
        Project::init(tmp.path()).unwrap();

        let nested = tmp.path().join("vehicles");
        let project = Project::discover_from(&nested).unwrap();
        assert_eq!(
            project.root().canonicalize().unwrap(),
            tmp.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_discover_outside_project_fails() {
        let tmp = tempdir().unwrap();
        let err = Project::discover_from(tmp.path()).unwrap_err();
        assert!(matches!(err, ProjectError::NotFound { .. }));
    }

    #[test]
    fn test_vehicle_path_uses_id_and_suffix() {
        let tmp = tempdir().unwrap();
        let project = Project::init(tmp.path()).unwrap();
        let id = VehicleId::new();

        let path = project.vehicle_path(&id);
        assert!(path.starts_with(project.vehicles_dir()));
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .ends_with(".mvd.yaml"));
    }
}
