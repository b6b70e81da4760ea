/// Asserts that the named plant exists and is alive.
#[macro_export]
macro_rules! assert_alive {
    ($garden:expr, $name:expr) => {
        let plant = $garden.find($name).expect("Plant not found in garden");
        assert!(plant.is_alive(), "Plant {} should be alive", $name);
    };
}

/// Asserts that the named plant exists and is dead.
#[macro_export]
macro_rules! assert_dead {
    ($garden:expr, $name:expr) => {
        let plant = $garden.find($name).expect("Plant not found in garden");
        assert!(!plant.is_alive(), "Plant {} should be dead", $name);
    };
}

/// Asserts the alive/dead head count of a garden.
#[macro_export]
macro_rules! assert_census {
    ($garden:expr, $alive:expr, $dead:expr) => {
        let census = $garden.census();
        assert_eq!(
            (census.alive, census.dead),
            ($alive, $dead),
            "Census mismatch"
        );
    };
}
