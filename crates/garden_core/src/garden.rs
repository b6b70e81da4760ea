//! The garden arena.
//!
//! Plants are stored in insertion order and addressed by `PlantId`. Membership
//! is fixed once the engine starts processing events.

use garden_data::{Plant, PlantId, PlantSpec};
use std::collections::HashSet;
use thiserror::Error;

/// Alive/dead head count at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Census {
    pub alive: usize,
    pub dead: usize,
}

impl Census {
    #[must_use]
    pub fn total(&self) -> usize {
        self.alive + self.dead
    }
}

/// A state the garden should never reach.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("dead count fell from {before} to {after}: a plant was revived")]
    Revival { before: usize, after: usize },

    #[error("garden membership changed from {before} to {after} plants")]
    MembershipChanged { before: usize, after: usize },
}

/// A plant the garden refuses to admit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GardenError {
    #[error("plant {index} has an empty name")]
    EmptyName { index: usize },

    #[error("plant {name} has a negative water requirement ({requirement})")]
    NegativeRequirement { name: String, requirement: i32 },
}

#[derive(Debug, Clone, Default)]
pub struct Garden {
    plants: Vec<Plant>,
}

impl Garden {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a garden from configured plants, stopping at the first invalid one.
    pub fn from_specs(specs: &[PlantSpec]) -> Result<Self, GardenError> {
        let mut garden = Self::new();
        for spec in specs {
            garden.plant(
                spec.name.clone(),
                spec.temperature,
                spec.water_requirement,
                spec.parasites.clone(),
            )?;
        }
        Ok(garden)
    }

    /// Adds a plant and returns its identifier.
    ///
    /// Names must be non-blank and water requirements non-negative.
    pub fn plant(
        &mut self,
        name: impl Into<String>,
        temperature: i32,
        water_requirement: i32,
        vulnerabilities: Vec<String>,
    ) -> Result<PlantId, GardenError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GardenError::EmptyName {
                index: self.plants.len(),
            });
        }
        if water_requirement < 0 {
            return Err(GardenError::NegativeRequirement {
                name,
                requirement: water_requirement,
            });
        }
        let id = PlantId(self.plants.len() as u32);
        self.plants.push(Plant::new(
            id,
            name,
            temperature,
            water_requirement,
            vulnerabilities,
        ));
        Ok(id)
    }

    #[must_use]
    pub fn get(&self, id: PlantId) -> Option<&Plant> {
        self.plants.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: PlantId) -> Option<&mut Plant> {
        self.plants.get_mut(id.0 as usize)
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Plant> {
        self.plants.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn plants_mut(&mut self) -> impl Iterator<Item = &mut Plant> {
        self.plants.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    #[must_use]
    pub fn alive_names(&self) -> Vec<String> {
        self.names_where(true)
    }

    #[must_use]
    pub fn dead_names(&self) -> Vec<String> {
        self.names_where(false)
    }

    fn names_where(&self, alive: bool) -> Vec<String> {
        self.plants
            .iter()
            .filter(|p| p.is_alive() == alive)
            .map(|p| p.name.clone())
            .collect()
    }

    /// Every pest any plant is vulnerable to, first-seen order.
    #[must_use]
    pub fn known_pests(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.plants
            .iter()
            .flat_map(|p| p.vulnerabilities().iter())
            .filter(|pest| seen.insert(pest.as_str()))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn census(&self) -> Census {
        let alive = self.plants.iter().filter(|p| p.is_alive()).count();
        Census {
            alive,
            dead: self.plants.len() - alive,
        }
    }

    /// Compares the current census to an earlier one.
    #[must_use]
    pub fn audit(&self, before: &Census) -> Vec<InvariantViolation> {
        let now = self.census();
        let mut violations = Vec::new();
        if now.dead < before.dead {
            violations.push(InvariantViolation::Revival {
                before: before.dead,
                after: now.dead,
            });
        }
        if now.total() != before.total() {
            violations.push(InvariantViolation::MembershipChanged {
                before: before.total(),
                after: now.total(),
            });
        }
        violations
    }
}
