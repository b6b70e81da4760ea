use crate::garden::Garden;
use crate::lifecycle::{Outcome, PlantLogic};
use crate::report::EventReport;

#[derive(Debug, Clone, Copy, Default)]
pub struct PesticideController;

impl PesticideController {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Makes every living plant immune to pest attacks. Dead plants stay dead.
    pub fn apply_pesticide(&self, garden: &mut Garden) -> EventReport {
        tracing::info!("Applying pesticide to all plants");

        let mut report = EventReport::default();
        for plant in garden.plants_mut() {
            let outcome = plant.apply_pesticide();
            match outcome {
                Outcome::Rejected => {
                    tracing::info!(plant = %plant.name, "Skipping pesticide, plant is not alive");
                }
                _ => tracing::debug!(plant = %plant.name, "Pesticide applied"),
            }
            report.record(outcome);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::garden_with_requirements;
    use garden_data::PlantId;

    #[test]
    fn test_only_living_plants_are_treated() {
        let mut garden = garden_with_requirements(&[10, 10]);
        if let Some(p) = garden.get_mut(PlantId(1)) {
            p.die();
        }

        let report = PesticideController::new().apply_pesticide(&mut garden);

        assert!(garden.plants()[0].is_pesticide_applied());
        assert!(!garden.plants()[1].is_pesticide_applied());
        assert!(!garden.plants()[1].is_alive());
        assert_eq!(report.applied, 1);
        assert_eq!(report.rejected, 1);
    }

    #[test]
    fn test_reapplying_is_idempotent() {
        let mut garden = garden_with_requirements(&[10]);
        let controller = PesticideController::new();
        controller.apply_pesticide(&mut garden);
        controller.apply_pesticide(&mut garden);
        assert!(garden.plants()[0].is_pesticide_applied());
    }
}
