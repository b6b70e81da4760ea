//! Headless garden simulation: the action surface, the serialized command
//! worker and the day-stepping driver built on top of `garden_core`.

pub mod app;
pub mod driver;

pub use app::{DispatchError, GardenSimulator, GardenStatus, PlantRoster, ShutdownManager};
pub use driver::{DayPlan, DriverConfig, DriverSummary};
