pub mod macros;

use garden_core::{Garden, GardenController, PlantSpec, RulesConfig};
use garden_sim_lib::app::GardenSimulator;

#[allow(dead_code)]
pub struct GardenBuilder {
    rules: RulesConfig,
    plants: Vec<PlantSpec>,
}

#[allow(dead_code)]
impl GardenBuilder {
    pub fn new() -> Self {
        Self {
            rules: RulesConfig {
                seed: Some(0),
                ..RulesConfig::default()
            },
            plants: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rules.seed = Some(seed);
        self
    }

    pub fn with_rules<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut RulesConfig),
    {
        modifier(&mut self.rules);
        self
    }

    pub fn with_plant(mut self, name: &str, water_requirement: i32, pests: &[&str]) -> Self {
        self.plants
            .push(PlantSpec::new(name, 70, water_requirement, pests));
        self
    }

    pub fn with_default_plants(mut self) -> Self {
        self.plants.extend(garden_io::default_plants());
        self
    }

    pub fn garden(&self) -> Garden {
        Garden::from_specs(&self.plants).expect("builder plants are valid")
    }

    pub fn build(self) -> GardenController {
        let garden = self.garden();
        let rng = self.rules.rng();
        GardenController::new(garden, self.rules, rng)
    }

    pub async fn build_simulator(self) -> GardenSimulator {
        let mut sim = GardenSimulator::new(self.rules);
        sim.initialize_with(&self.plants)
            .await
            .expect("builder plants are valid");
        sim
    }
}
