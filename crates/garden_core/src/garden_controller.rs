//! Orchestrator over the garden and its controllers.

use crate::config::{clamp_probability, GardenRng, RulesConfig};
use crate::controllers::{
    PestAttackController, PesticideController, RainController, TemperatureController,
};
use crate::garden::Garden;
use crate::report::EventReport;
use rand::Rng;
use serde::Serialize;

/// Result of a pest event routed through the orchestrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PestAttackReport {
    /// Pesticide was force-applied before the attack, and what it did.
    pub preempted: Option<EventReport>,
    pub attack: EventReport,
}

pub struct GardenController {
    garden: Garden,
    rules: RulesConfig,
    preemptive_chance: f64,
    rng: GardenRng,
    rain: RainController,
    temperature: TemperatureController,
    pest_attack: PestAttackController,
    pesticide: PesticideController,
}

impl GardenController {
    #[must_use]
    pub fn new(garden: Garden, rules: RulesConfig, rng: GardenRng) -> Self {
        let pest_attack = PestAttackController::new(rules.pest_kill_chance);
        Self {
            garden,
            preemptive_chance: clamp_probability(rules.preemptive_pesticide_chance),
            rules,
            rng,
            rain: RainController::new(),
            temperature: TemperatureController::new(),
            pest_attack,
            pesticide: PesticideController::new(),
        }
    }

    #[must_use]
    pub fn garden(&self) -> &Garden {
        &self.garden
    }

    pub fn garden_mut(&mut self) -> &mut Garden {
        &mut self.garden
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    #[must_use]
    pub fn into_garden(self) -> Garden {
        self.garden
    }

    pub fn simulate_rain(&mut self, amount: i32) -> EventReport {
        self.rain.simulate_rain(amount, &mut self.garden)
    }

    pub fn simulate_temperature(&mut self, temperature: i32) -> EventReport {
        self.temperature.adjust_temperature(temperature, &mut self.garden)
    }

    /// Runs a pest attack, possibly spraying pesticide first.
    ///
    /// The pre-emptive spray is a coin flip weighted by
    /// `RulesConfig::preemptive_pesticide_chance`, independent of the caller.
    pub fn simulate_pest_attack(&mut self, pest: &str) -> PestAttackReport {
        let preempted = if self.rng.gen_bool(self.preemptive_chance) {
            tracing::info!(pest, "Spraying pesticide ahead of pest attack");
            Some(self.pesticide.apply_pesticide(&mut self.garden))
        } else {
            None
        };

        let attack = self
            .pest_attack
            .simulate_pest_attack(pest, &mut self.garden, &mut self.rng);
        PestAttackReport { preempted, attack }
    }

    /// Applies pesticide directly, without the pre-emption roll.
    pub fn apply_pesticide(&mut self) -> EventReport {
        self.pesticide.apply_pesticide(&mut self.garden)
    }

    #[must_use]
    pub fn alive_plants(&self) -> Vec<String> {
        self.garden.alive_names()
    }

    #[must_use]
    pub fn dead_plants(&self) -> Vec<String> {
        self.garden.dead_names()
    }
}
