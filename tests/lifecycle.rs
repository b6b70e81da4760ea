mod common;

use garden_core::{LifeState, Outcome, Plant, PlantId, PlantLogic};
use proptest::prelude::*;

fn plant(requirement: i32) -> Plant {
    Plant::new(PlantId(0), "Subject", 70, requirement, vec!["Aphids".into()])
}

#[derive(Debug, Clone)]
enum Event {
    Water(i32),
    Temperature(i32),
    Infest(bool),
    Pesticide,
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        (-60..60i32).prop_map(Event::Water),
        (-20..200i32).prop_map(Event::Temperature),
        any::<bool>().prop_map(Event::Infest),
        Just(Event::Pesticide),
    ]
}

fn apply(plant: &mut Plant, event: &Event) -> Outcome {
    match event {
        Event::Water(amount) => plant.water(*amount),
        Event::Temperature(t) => plant.adjust_temperature(*t),
        Event::Infest(matching) => plant.infest(if *matching { "Aphids" } else { "Locust" }),
        Event::Pesticide => plant.apply_pesticide(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn watering_past_twice_requirement_kills(requirement in 0..100i32, step in 1..30i32) {
        let mut p = plant(requirement);
        while p.current_water_level() <= requirement * 2 {
            p.water(step);
        }
        prop_assert_eq!(p.state(), LifeState::Dead);
    }

    #[test]
    fn death_is_permanent(events in prop::collection::vec(arb_event(), 1..60)) {
        let mut p = plant(20);
        let mut dead = false;
        for event in &events {
            let outcome = apply(&mut p, event);
            if dead {
                prop_assert_eq!(outcome, Outcome::Rejected);
                prop_assert!(!p.is_alive());
            }
            dead = dead || outcome.killed();
            prop_assert_eq!(dead, !p.is_alive());
        }
    }

    #[test]
    fn water_level_never_decreases(amounts in prop::collection::vec(-50..50i32, 1..40)) {
        let mut p = plant(500);
        let mut last = p.current_water_level();
        for amount in amounts {
            p.water(amount);
            prop_assert!(p.current_water_level() >= last);
            last = p.current_water_level();
        }
    }

    #[test]
    fn negative_water_is_rejected_without_effect(start in 0..40i32, amount in i32::MIN..0) {
        let mut p = plant(20);
        p.water(start);
        let before = (p.current_water_level(), p.state());
        prop_assert_eq!(p.water(amount), Outcome::Rejected);
        prop_assert_eq!((p.current_water_level(), p.state()), before);
    }

    #[test]
    fn frozen_dead_plant_keeps_fields(events in prop::collection::vec(arb_event(), 1..30)) {
        let mut p = plant(20);
        p.kill();
        let (water, temperature, pesticide) =
            (p.current_water_level(), p.temperature(), p.is_pesticide_applied());
        for event in &events {
            apply(&mut p, event);
        }
        prop_assert_eq!(p.current_water_level(), water);
        prop_assert_eq!(p.temperature(), temperature);
        prop_assert_eq!(p.is_pesticide_applied(), pesticide);
    }

    #[test]
    fn dead_plant_refuses_raw_setters(temperature in -50..250i32, amount in 1..100i32) {
        let mut p = plant(20);
        p.adjust_temperature(150);
        prop_assert!(!p.set_temperature(temperature));
        prop_assert!(!p.mark_pesticide_applied());
        prop_assert_eq!(p.add_water(amount), 0);
        prop_assert_eq!(p.temperature(), 150);
        prop_assert!(!p.is_pesticide_applied());
    }
}

#[test]
fn test_zero_requirement_plant_tolerates_no_water() {
    let mut p = plant(0);
    assert_eq!(p.overwater_limit(), 0);
    assert_eq!(p.water(0), Outcome::Applied);
    assert!(p.is_alive());
    assert_eq!(p.water(1), Outcome::Killed);
}
