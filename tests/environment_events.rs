mod common;

use common::GardenBuilder;
use garden_core::{
    HeatingController, PesticideController, RainController, SprinklerController,
    TemperatureController,
};

#[test]
fn test_cold_snap_heats_every_plant_to_fifty() {
    let mut garden = GardenBuilder::new().with_default_plants().garden();
    let report = TemperatureController::new().adjust_temperature(30, &mut garden);

    assert!(garden.plants().iter().all(|p| p.temperature() == 50));
    assert_eq!(report.killed, 0);
    assert_census!(garden, 3, 0);
}

#[test]
fn test_heat_wave_applies_raw_value_and_kills() {
    let mut garden = GardenBuilder::new().with_default_plants().garden();
    TemperatureController::new().adjust_temperature(150, &mut garden);

    assert!(garden.plants().iter().all(|p| p.temperature() == 150));
    assert_census!(garden, 0, 3);
}

#[test]
fn test_light_rain_sprinkles_the_average() {
    let mut garden = GardenBuilder::new()
        .with_plant("Low", 10, &[])
        .with_plant("Mid", 20, &[])
        .with_plant("High", 30, &[])
        .garden();

    RainController::new().simulate_rain(3, &mut garden);

    let levels: Vec<i32> = garden.plants().iter().map(|p| p.current_water_level()).collect();
    assert_eq!(levels, vec![20, 20, 20]);
    assert_census!(garden, 3, 0);
}

#[test]
fn test_repeated_heavy_rain_drowns_in_requirement_order() {
    let mut garden = GardenBuilder::new()
        .with_plant("Cactus", 2, &[])
        .with_plant("Fern", 15, &[])
        .with_plant("Rice", 40, &[])
        .garden();
    let rain = RainController::new();

    rain.simulate_rain(6, &mut garden);
    assert_dead!(garden, "Cactus");
    assert_alive!(garden, "Fern");

    for _ in 0..5 {
        rain.simulate_rain(6, &mut garden);
    }
    assert_dead!(garden, "Fern");
    assert_alive!(garden, "Rice");

    let cactus = garden.find("Cactus").unwrap();
    assert_eq!(cactus.current_water_level(), 6, "dead plants are not watered");
}

#[test]
fn test_sprinkler_average_drowns_zero_requirement_plant() {
    let mut garden = GardenBuilder::new()
        .with_plant("Cactus", 0, &[])
        .with_plant("Fern", 10, &[])
        .garden();

    let report = RainController::new().simulate_rain(1, &mut garden);

    let levels: Vec<i32> = garden.plants().iter().map(|p| p.current_water_level()).collect();
    assert_eq!(levels, vec![5, 5]);
    assert_eq!(report.killed, 1);
    assert_dead!(garden, "Cactus");
    assert_alive!(garden, "Fern");
}

#[test]
fn test_all_zero_requirements_sprinkle_nothing() {
    let mut garden = GardenBuilder::new()
        .with_plant("Cactus", 0, &[])
        .with_plant("Agave", 0, &[])
        .garden();

    SprinklerController::new().activate_sprinklers(&mut garden);

    assert!(garden.plants().iter().all(|p| p.current_water_level() == 0));
    assert_census!(garden, 2, 0);
}

#[test]
fn test_negative_rain_counts_as_insufficient() {
    let mut garden = GardenBuilder::new().with_plant("Fern", 20, &[]).garden();
    let rain = RainController::new();
    rain.simulate_rain(12, &mut garden);

    rain.simulate_rain(-8, &mut garden);

    assert_eq!(garden.find("Fern").unwrap().current_water_level(), 32);
    assert_alive!(garden, "Fern");
}

#[test]
fn test_plant_killed_by_heat_cannot_be_rewritten() {
    let mut controller = GardenBuilder::new().with_plant("Fern", 10, &["Aphids"]).build();
    controller.simulate_temperature(150);

    for plant in controller.garden_mut().plants_mut() {
        plant.set_temperature(70);
        plant.add_water(5);
        plant.mark_pesticide_applied();
    }

    let fern = controller.garden().find("Fern").unwrap();
    assert!(!fern.is_alive());
    assert_eq!(fern.temperature(), 150);
    assert_eq!(fern.current_water_level(), 0);
    assert!(!fern.is_pesticide_applied());
}

#[test]
fn test_sprinklers_on_empty_garden_do_nothing() {
    let mut garden = GardenBuilder::new().garden();
    assert!(SprinklerController::new().activate_sprinklers(&mut garden).is_noop());
}

#[test]
fn test_controllers_are_usable_without_orchestrator() {
    let mut garden = GardenBuilder::new().with_default_plants().garden();
    assert_eq!(HeatingController::new().activate_heating(), 50);

    let report = PesticideController::new().apply_pesticide(&mut garden);
    assert_eq!(report.applied, 3);
    assert!(garden.plants().iter().all(|p| p.is_pesticide_applied()));
}
