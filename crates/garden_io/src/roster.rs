//! Plant roster loading.
//!
//! The roster is a JSON document of the form
//! `{"plants": [{"name": .., "waterRequirement": .., "temperature": .., "parasites": [..]}]}`.
//! Anything that prevents reading it falls back to a small built-in garden.

use crate::error::{IoError, Result};
use crate::serialization::read_json_file;
use garden_data::PlantSpec;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GardenSpec {
    pub plants: Vec<PlantSpec>,
}

impl GardenSpec {
    pub fn validate(&self) -> Result<()> {
        for (i, plant) in self.plants.iter().enumerate() {
            if plant.name.trim().is_empty() {
                return Err(IoError::validation(format!("plant {i} has an empty name")));
            }
            if plant.water_requirement < 0 {
                return Err(IoError::validation(format!(
                    "plant {} has a negative water requirement",
                    plant.name
                )));
            }
        }
        Ok(())
    }
}

/// Where the roster in use came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    File(String),
    Defaults,
}

/// The garden used when no usable roster is available.
#[must_use]
pub fn default_plants() -> Vec<PlantSpec> {
    vec![
        PlantSpec::new("Rose", 22, 20, &["Aphids", "Caterpillar"]),
        PlantSpec::new("Tomato", 24, 18, &["Hornworm", "Whitefly"]),
        PlantSpec::new("Orange", 26, 22, &["Aphids", "Leafminer"]),
    ]
}

/// Reads and validates a roster file.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<GardenSpec> {
    let spec: GardenSpec = read_json_file(path)?;
    spec.validate()?;
    Ok(spec)
}

/// Reads a roster, substituting the default garden on any failure.
pub fn load_roster_or_default<P: AsRef<Path>>(path: P) -> (Vec<PlantSpec>, RosterSource) {
    let path = path.as_ref();
    match load_roster(path) {
        Ok(spec) => {
            tracing::info!(path = %path.display(), plants = spec.plants.len(), "Loaded plant roster");
            (spec.plants, RosterSource::File(path.display().to_string()))
        }
        Err(e) if e.is_not_found() => {
            tracing::warn!(path = %path.display(), "Roster not found, falling back to built-in defaults");
            (default_plants(), RosterSource::Defaults)
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to load roster, using defaults");
            (default_plants(), RosterSource::Defaults)
        }
    }
}
