//! Day-stepping driver that feeds random daily weather and pests into the garden.

use crate::app::{GardenSimulator, GardenStatus, ShutdownManager};
use anyhow::Result;
use garden_core::config::clamp_probability;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Pests used when the roster names none.
pub const FALLBACK_PESTS: [&str; 5] = ["Aphids", "Caterpillar", "Whitefly", "Leafminer", "Hornworm"];

/// Default chance of a pest event on any given day.
pub const DEFAULT_PEST_PROBABILITY: f64 = 0.30;

#[derive(Debug, Clone)]
pub struct DriverConfig {
    pub days: u32,
    pub pest_probability: f64,
    pub tick: Duration,
    pub seed: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            days: 10,
            pest_probability: DEFAULT_PEST_PROBABILITY,
            tick: Duration::from_millis(1000),
            seed: None,
        }
    }
}

impl DriverConfig {
    /// Clamps the pest probability into `[0, 1]`; NaN falls back to the default.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.pest_probability = if self.pest_probability.is_nan() {
            DEFAULT_PEST_PROBABILITY
        } else {
            self.pest_probability.clamp(0.0, 1.0)
        };
        self
    }
}

/// Events scheduled for one simulated day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    pub temperature: i32,
    pub rain: Option<i32>,
    pub pest: Option<String>,
}

impl DayPlan {
    /// Draws one day: a mild temperature, rain half the time, and maybe a pest.
    ///
    /// `pest_probability` is clamped into `[0, 1]`; NaN means no pests.
    pub fn draw<R: Rng>(rng: &mut R, pest_probability: f64, pests: &[String]) -> Self {
        let temperature = rng.gen_range(50..=95);
        let rain = rng.gen_bool(0.5).then(|| rng.gen_range(1..=5));
        let pest = if rng.gen_bool(clamp_probability(pest_probability)) {
            pests.choose(rng).cloned()
        } else {
            None
        };
        Self {
            temperature,
            rain,
            pest,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSummary {
    pub days_run: u32,
    pub status: GardenStatus,
}

/// Runs the simulation for `config.days` days or until shutdown is requested.
pub async fn run(
    sim: &GardenSimulator,
    config: &DriverConfig,
    shutdown: &ShutdownManager,
) -> Result<DriverSummary> {
    let pest_probability = config.clone().normalized().pest_probability;
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut pests = sim.known_parasite_names().to_vec();
    if pests.is_empty() {
        pests = FALLBACK_PESTS.iter().map(|p| (*p).to_string()).collect();
        tracing::warn!(pests = ?pests, "Roster had no parasite names, using fallback list");
    }

    let mut days_run = 0;
    for day in 1..=config.days {
        if shutdown.is_shutdown_requested() {
            tracing::info!(day, "Stopping before day");
            break;
        }

        let plan = DayPlan::draw(&mut rng, pest_probability, &pests);
        drop(sim.temperature(plan.temperature)?);
        if let Some(amount) = plan.rain {
            drop(sim.rain(amount)?);
        }
        if let Some(pest) = &plan.pest {
            sim.parasites(pest).await?;
        }

        tokio::time::sleep(config.tick).await;
        days_run = day;
        tracing::info!(day, "---------------- End of Day -----------------");
    }

    let status = sim.get_status().await?;
    Ok(DriverSummary { days_run, status })
}
