use crate::config::clamp_probability;
use crate::garden::Garden;
use crate::lifecycle::{Outcome, PlantLogic};
use crate::report::EventReport;
use rand::Rng;

/// Chance that an unprotected, vulnerable plant dies from one attack.
pub const DEFAULT_KILL_CHANCE: f64 = 0.25;

#[derive(Debug, Clone, Copy)]
pub struct PestAttackController {
    kill_chance: f64,
}

impl Default for PestAttackController {
    fn default() -> Self {
        Self::new(DEFAULT_KILL_CHANCE)
    }
}

impl PestAttackController {
    /// `kill_chance` is clamped into `[0, 1]`; NaN counts as zero.
    #[must_use]
    pub fn new(kill_chance: f64) -> Self {
        Self {
            kill_chance: clamp_probability(kill_chance),
        }
    }

    #[must_use]
    pub fn kill_chance(&self) -> f64 {
        self.kill_chance
    }

    /// Resolves one pest attack against every plant.
    ///
    /// Each vulnerable plant rolls independently. Pesticide makes a plant
    /// fully immune and no roll is made for it.
    pub fn simulate_pest_attack<R: Rng>(
        &self,
        pest: &str,
        garden: &mut Garden,
        rng: &mut R,
    ) -> EventReport {
        tracing::info!(pest, "Simulating pest attack");
        let mut report = EventReport::default();

        for plant in garden.plants_mut() {
            if !plant.is_vulnerable_to(pest) {
                continue;
            }
            report.matched += 1;

            if !plant.is_alive() {
                report.record(Outcome::Rejected);
                continue;
            }
            if plant.is_pesticide_applied() {
                tracing::info!(plant = %plant.name, pest, "Pesticide protects plant from pest attack");
                report.protected += 1;
                continue;
            }

            if rng.gen_bool(self.kill_chance) {
                report.record(plant.kill());
                tracing::warn!(plant = %plant.name, pest, "Plant killed by pest attack");
            } else {
                report.record(Outcome::Applied);
                tracing::warn!(plant = %plant.name, pest, "Plant resisted pest attack and survived");
            }
        }

        if report.matched == 0 {
            tracing::info!(pest, "Pest did not affect any plants");
        }
        report
    }
}
