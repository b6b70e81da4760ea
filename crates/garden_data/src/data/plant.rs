use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle of a plant inside its garden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlantId(pub u32);

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a plant is still part of the living garden.
///
/// `Alive -> Dead` is the only transition; nothing leads back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LifeState {
    #[default]
    Alive,
    Dead,
}

/// Grid cell a presentation layer placed the plant in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub row: u16,
    pub col: u16,
}

/// A single garden member.
///
/// Fields that carry lifecycle invariants are private: the life state only
/// moves forward, the water level only grows, and a dead plant takes no writes.
#[derive(Debug, Clone, Serialize)]
pub struct Plant {
    id: PlantId,
    pub name: String,
    water_requirement: i32,
    current_water_level: i32,
    temperature: i32,
    vulnerabilities: Vec<String>,
    state: LifeState,
    pesticide_applied: bool,
    pub position: Option<Position>,
}

impl Plant {
    #[must_use]
    pub fn new(
        id: PlantId,
        name: impl Into<String>,
        temperature: i32,
        water_requirement: i32,
        vulnerabilities: Vec<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            water_requirement,
            current_water_level: 0,
            temperature,
            vulnerabilities,
            state: LifeState::Alive,
            pesticide_applied: false,
            position: None,
        }
    }

    #[must_use]
    pub fn with_position(mut self, row: u16, col: u16) -> Self {
        self.position = Some(Position { row, col });
        self
    }

    #[must_use]
    pub fn id(&self) -> PlantId {
        self.id
    }

    #[must_use]
    pub fn water_requirement(&self) -> i32 {
        self.water_requirement
    }

    #[must_use]
    pub fn current_water_level(&self) -> i32 {
        self.current_water_level
    }

    #[must_use]
    pub fn temperature(&self) -> i32 {
        self.temperature
    }

    #[must_use]
    pub fn vulnerabilities(&self) -> &[String] {
        &self.vulnerabilities
    }

    #[must_use]
    pub fn state(&self) -> LifeState {
        self.state
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.state == LifeState::Alive
    }

    #[must_use]
    pub fn is_pesticide_applied(&self) -> bool {
        self.pesticide_applied
    }

    #[must_use]
    pub fn is_vulnerable_to(&self, pest: &str) -> bool {
        self.vulnerabilities.iter().any(|p| p == pest)
    }

    /// Adds water and returns the new level. Saturates instead of wrapping.
    ///
    /// Negative amounts and dead plants leave the level untouched.
    pub fn add_water(&mut self, amount: i32) -> i32 {
        if self.is_alive() && amount > 0 {
            self.current_water_level = self.current_water_level.saturating_add(amount);
        }
        self.current_water_level
    }

    /// Returns `false` without writing if the plant is dead.
    pub fn set_temperature(&mut self, temperature: i32) -> bool {
        if self.is_alive() {
            self.temperature = temperature;
        }
        self.is_alive()
    }

    /// Returns `false` without writing if the plant is dead.
    pub fn mark_pesticide_applied(&mut self) -> bool {
        if self.is_alive() {
            self.pesticide_applied = true;
        }
        self.is_alive()
    }

    /// Moves the plant to `Dead`. Returns `false` if it already was.
    pub fn die(&mut self) -> bool {
        match self.state {
            LifeState::Alive => {
                self.state = LifeState::Dead;
                true
            }
            LifeState::Dead => false,
        }
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (water {}/{}, {} F, {:?})",
            self.id,
            self.name,
            self.current_water_level,
            self.water_requirement,
            self.temperature,
            self.state
        )
    }
}
