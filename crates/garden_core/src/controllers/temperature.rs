use super::heating::HeatingController;
use crate::garden::Garden;
use crate::lifecycle::{PlantLogic, MAX_SAFE_TEMPERATURE, MIN_SAFE_TEMPERATURE};
use crate::report::EventReport;

#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureController {
    heating: HeatingController,
}

impl TemperatureController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the temperature the garden will actually experience.
    ///
    /// Cold snaps are replaced by the heating target; heat waves pass through.
    #[must_use]
    pub fn effective_temperature(&self, temperature: i32) -> i32 {
        if temperature < MIN_SAFE_TEMPERATURE {
            tracing::warn!(
                temperature,
                threshold = MIN_SAFE_TEMPERATURE,
                "Low temperature detected, activating heating system"
            );
            self.heating.activate_heating()
        } else {
            if temperature > MAX_SAFE_TEMPERATURE {
                tracing::warn!(temperature, "Extreme high temperature, plants may not survive");
            }
            temperature
        }
    }

    /// Applies a temperature event to every plant in the garden.
    pub fn adjust_temperature(&self, temperature: i32, garden: &mut Garden) -> EventReport {
        tracing::info!(temperature, "Adjusting temperature");
        let applied = self.effective_temperature(temperature);

        let report: EventReport = garden
            .plants_mut()
            .map(|plant| plant.adjust_temperature(applied))
            .collect();
        tracing::info!(
            temperature = applied,
            plants = report.touched(),
            killed = report.killed,
            "Temperature applied"
        );
        report
    }
}
