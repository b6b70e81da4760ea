use crate::garden::Garden;
use crate::lifecycle::PlantLogic;
use crate::report::EventReport;

/// Shared sprinkler line: every plant gets the same amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct SprinklerController;

impl SprinklerController {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waters every plant with the garden's average requirement.
    pub fn activate_sprinklers(&self, garden: &mut Garden) -> EventReport {
        let Some(amount) = average_water_requirement(garden) else {
            tracing::warn!("No plants available to water, sprinklers not activated");
            return EventReport::default();
        };

        tracing::info!(amount, plants = garden.len(), "Activating sprinklers");
        garden.plants_mut().map(|plant| plant.water(amount)).collect()
    }
}

/// Integer mean of all requirements, dead plants included. `None` when empty.
#[must_use]
pub fn average_water_requirement(garden: &Garden) -> Option<i32> {
    if garden.is_empty() {
        return None;
    }
    let total: i64 = garden
        .plants()
        .iter()
        .map(|p| i64::from(p.water_requirement()))
        .sum();
    let average = total / garden.len() as i64;
    Some(average.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}
