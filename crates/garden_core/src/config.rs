//! Rule configuration for the simulation engine.
//!
//! The flat survival thresholds are constants in `lifecycle`; only the
//! probabilistic policies and the random seed are tunable.
//!
//! ## Example `garden.toml`
//!
//! ```toml
//! pest_kill_chance = 0.25
//! preemptive_pesticide_chance = 0.5
//! seed = 42
//! ```

use crate::controllers::pest_attack::DEFAULT_KILL_CHANCE;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Random source used by every probabilistic rule.
pub type GardenRng = ChaCha8Rng;

/// Chance the orchestrator sprays pesticide right before a pest attack.
pub const DEFAULT_PREEMPTIVE_PESTICIDE_CHANCE: f64 = 0.5;

/// Clamps a probability into `[0, 1]`; NaN counts as zero.
#[must_use]
pub fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RulesConfig {
    /// Per-plant kill probability for an unprotected, vulnerable plant.
    pub pest_kill_chance: f64,
    /// Probability that `GardenController` force-applies pesticide before an attack.
    pub preemptive_pesticide_chance: f64,
    /// Fixed seed for reproducible runs; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            pest_kill_chance: DEFAULT_KILL_CHANCE,
            preemptive_pesticide_chance: DEFAULT_PREEMPTIVE_PESTICIDE_CHANCE,
            seed: None,
        }
    }
}

impl RulesConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.pest_kill_chance),
            "Pest kill chance must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.preemptive_pesticide_chance),
            "Preemptive pesticide chance must be in [0.0, 1.0]"
        );
        Ok(())
    }

    /// Parses and validates a TOML rules document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn rng(&self) -> GardenRng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}
