//! Plant lifecycle rules.
//!
//! Thresholds are flat: a plant is either inside the safe band or it dies.
//! A dead plant is frozen and every further mutation is rejected.

pub use garden_data::Plant;

/// Water level above `OVERWATER_FACTOR * water_requirement` kills the plant.
pub const OVERWATER_FACTOR: i32 = 2;
/// Coldest survivable temperature in °F (inclusive).
pub const MIN_SAFE_TEMPERATURE: i32 = 40;
/// Hottest survivable temperature in °F (inclusive).
pub const MAX_SAFE_TEMPERATURE: i32 = 120;

/// What a single mutation did to a plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Mutation written, plant still alive.
    Applied,
    /// Mutation written and it caused the transition to `Dead`.
    Killed,
    /// Plant was already dead, or the input was invalid; nothing written.
    Rejected,
}

impl Outcome {
    #[must_use]
    pub fn killed(self) -> bool {
        matches!(self, Outcome::Killed)
    }
}

#[must_use]
pub fn is_safe_temperature(temperature: i32) -> bool {
    (MIN_SAFE_TEMPERATURE..=MAX_SAFE_TEMPERATURE).contains(&temperature)
}

pub trait PlantLogic {
    fn water(&mut self, amount: i32) -> Outcome;
    fn adjust_temperature(&mut self, temperature: i32) -> Outcome;
    fn infest(&mut self, pest: &str) -> Outcome;
    fn apply_pesticide(&mut self) -> Outcome;
    fn kill(&mut self) -> Outcome;
    fn overwater_limit(&self) -> i32;
}

impl PlantLogic for Plant {
    fn water(&mut self, amount: i32) -> Outcome {
        if !self.is_alive() {
            tracing::debug!(plant = %self.name, amount, "Ignoring water on dead plant");
            return Outcome::Rejected;
        }
        if amount < 0 {
            tracing::debug!(plant = %self.name, amount, "Ignoring negative water amount");
            return Outcome::Rejected;
        }
        let level = self.add_water(amount);
        if level > self.overwater_limit() {
            self.die();
            tracing::warn!(plant = %self.name, level, "Plant drowned from overwatering");
            Outcome::Killed
        } else {
            Outcome::Applied
        }
    }

    fn adjust_temperature(&mut self, temperature: i32) -> Outcome {
        if !self.is_alive() {
            tracing::debug!(plant = %self.name, temperature, "Ignoring temperature on dead plant");
            return Outcome::Rejected;
        }
        self.set_temperature(temperature);
        if is_safe_temperature(temperature) {
            Outcome::Applied
        } else {
            self.die();
            tracing::warn!(plant = %self.name, temperature, "Plant killed by extreme temperature");
            Outcome::Killed
        }
    }

    fn infest(&mut self, pest: &str) -> Outcome {
        if !self.is_alive() {
            return Outcome::Rejected;
        }
        if self.is_vulnerable_to(pest) {
            self.kill()
        } else {
            Outcome::Applied
        }
    }

    fn apply_pesticide(&mut self) -> Outcome {
        if !self.is_alive() {
            return Outcome::Rejected;
        }
        self.mark_pesticide_applied();
        Outcome::Applied
    }

    fn kill(&mut self) -> Outcome {
        if self.die() {
            Outcome::Killed
        } else {
            Outcome::Rejected
        }
    }

    fn overwater_limit(&self) -> i32 {
        self.water_requirement().saturating_mul(OVERWATER_FACTOR)
    }
}
