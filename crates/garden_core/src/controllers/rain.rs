use super::sprinkler::SprinklerController;
use crate::garden::Garden;
use crate::lifecycle::PlantLogic;
use crate::report::EventReport;

/// Rainfall below this many units falls back to the sprinklers.
pub const RAINFALL_THRESHOLD: i32 = 5;

#[derive(Debug, Clone, Copy, Default)]
pub struct RainController {
    sprinklers: SprinklerController,
}

impl RainController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies rainfall to the garden.
    ///
    /// Insufficient rain is discarded and the sprinklers run instead; enough
    /// rain waters every plant with the full, unscaled amount.
    pub fn simulate_rain(&self, amount: i32, garden: &mut Garden) -> EventReport {
        tracing::info!(amount, "Simulating rain");

        if amount < RAINFALL_THRESHOLD {
            tracing::warn!(
                amount,
                threshold = RAINFALL_THRESHOLD,
                "Insufficient rainfall, activating sprinkler system"
            );
            return self.sprinklers.activate_sprinklers(garden);
        }

        let report: EventReport = garden.plants_mut().map(|plant| plant.water(amount)).collect();
        tracing::info!(amount, killed = report.killed, "Rainfall sufficient, all plants watered");
        report
    }
}
