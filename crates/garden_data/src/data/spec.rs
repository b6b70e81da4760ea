use serde::{Deserialize, Serialize};

/// One configured plant, in the shape the roster file uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantSpec {
    pub name: String,
    pub water_requirement: i32,
    pub temperature: i32,
    #[serde(default)]
    pub parasites: Vec<String>,
}

impl PlantSpec {
    #[must_use]
    pub fn new(name: &str, temperature: i32, water_requirement: i32, parasites: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            water_requirement,
            temperature,
            parasites: parasites.iter().map(|p| (*p).to_string()).collect(),
        }
    }
}
