//! Vehicle identity system using prefixed ULIDs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use ulid::Ulid;

/// Prefix carried by every vehicle ID
pub const VEHICLE_ID_PREFIX: &str = "MV";

/// A unique media vehicle identifier (`MV-<ULID>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VehicleId(Ulid);

impl VehicleId {
    /// Create a new random VehicleId
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Create a VehicleId from an existing ULID
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Get the ULID component
    pub fn ulid(&self) -> Ulid {
        self.0
    }

    /// Parse a VehicleId from a string
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        s.parse()
    }
}

impl Default for VehicleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", VEHICLE_ID_PREFIX, self.0)
    }
}

impl FromStr for VehicleId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, ulid_str) = s
            .split_once('-')
            .ok_or_else(|| IdParseError::MissingDelimiter(s.to_string()))?;

        if !prefix.eq_ignore_ascii_case(VEHICLE_ID_PREFIX) {
            return Err(IdParseError::InvalidPrefix(prefix.to_string()));
        }

        let ulid = Ulid::from_string(ulid_str)
            .map_err(|e| IdParseError::InvalidUlid(ulid_str.to_string(), e.to_string()))?;

        Ok(Self(ulid))
    }
}

impl Serialize for VehicleId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for VehicleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing vehicle IDs
#[derive(Debug, Error)]
pub enum IdParseError {
    #[error("invalid vehicle ID prefix: '{0}' (expected MV)")]
    InvalidPrefix(String),

    #[error("missing '-' delimiter in vehicle ID: '{0}'")]
    MissingDelimiter(String),

    #[error("invalid ULID '{0}': {1}")]
    InvalidUlid(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_id_generation() {
        let id = VehicleId::new();
        assert!(id.to_string().starts_with("MV-"));
        assert_eq!(id.to_string().len(), 29); // MV- (3) + ULID (26) = 29
    }

    #[test]
    fn test_vehicle_id_roundtrip() {
        let original = VehicleId::new();
        let parsed = VehicleId::parse(&original.to_string()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_vehicle_id_case_insensitive_prefix() {
        let original = VehicleId::new();
        let lowered = original.to_string().replacen("MV-", "mv-", 1);
        assert_eq!(VehicleId::parse(&lowered).unwrap(), original);
    }

    #[test]
    fn test_vehicle_id_invalid_prefix() {
        let err = VehicleId::parse("XX-01HQ3K4N5M6P7R8S9T0UVWXYZ").unwrap_err();
        assert!(matches!(err, IdParseError::InvalidPrefix(_)));
    }

    #[test]
    fn test_vehicle_id_missing_delimiter() {
        let err = VehicleId::parse("MV01HQ3K4N5M6P7R8S9T0UVWXYZ").unwrap_err();
        assert!(matches!(err, IdParseError::MissingDelimiter(_)));
    }

    #[test]
    fn test_vehicle_id_invalid_ulid() {
        let err = VehicleId::parse("MV-notaulid").unwrap_err();
        assert!(matches!(err, IdParseError::InvalidUlid(_, _)));
    }

    #[test]
    fn test_vehicle_id_serde_roundtrip() {
        let original = VehicleId::new();
        let yaml = serde_yml::to_string(&original).unwrap();
        let parsed: VehicleId = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(original, parsed);
    }
}
