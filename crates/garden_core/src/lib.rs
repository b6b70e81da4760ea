//! # Garden Core
//!
//! The rule engine for the garden simulation.
//!
//! This crate contains:
//! - Plant lifecycle rules (watering, temperature, infestation)
//! - The six environmental controllers that turn events into mutations
//! - The `Garden` arena and the `GardenController` orchestrator
//! - Rule configuration and structured logging setup
//!
//! ## Example
//!
//! ```
//! use garden_core::{Garden, GardenController, RulesConfig};
//!
//! let mut garden = Garden::new();
//! garden.plant("Rose", 22, 20, vec!["Aphids".into()]).unwrap();
//!
//! let rules = RulesConfig { seed: Some(7), ..RulesConfig::default() };
//! let rng = rules.rng();
//! let mut controller = GardenController::new(garden, rules, rng);
//!
//! controller.simulate_temperature(30);
//! assert_eq!(controller.garden().plants()[0].temperature(), 50);
//! ```

/// Rule configuration and seeded randomness
pub mod config;
/// Environmental controllers (heating, sprinklers, rain, temperature, pests, pesticide)
pub mod controllers;
/// Garden arena with stable plant identifiers
pub mod garden;
/// Orchestrator owning the garden and the controllers
pub mod garden_controller;
/// Plant lifecycle rules
pub mod lifecycle;
/// Event counters and logging setup
pub mod metrics;
/// Per-event mutation summaries
pub mod report;

pub use config::{GardenRng, RulesConfig};
pub use controllers::{
    HeatingController, PestAttackController, PesticideController, RainController,
    SprinklerController, TemperatureController,
};
pub use garden::{Census, Garden, GardenError, InvariantViolation};
pub use garden_controller::{GardenController, PestAttackReport};
pub use garden_data::{LifeState, Plant, PlantId, PlantSpec, Position};
pub use lifecycle::{Outcome, PlantLogic};
pub use metrics::{init_logging, Metrics};
pub use report::EventReport;
