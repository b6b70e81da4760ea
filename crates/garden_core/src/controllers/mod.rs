//! Environmental controllers.
//!
//! Each controller can be driven on its own (the presentation layer does this
//! for manual actions) or through `GardenController`.

/// Constant safe-temperature policy
pub mod heating;
/// Probabilistic pest resolution gated by pesticide immunity
pub mod pest_attack;
/// Immunity toggling for living plants
pub mod pesticide;
/// Rainfall sufficiency and sprinkler fallback
pub mod rain;
/// Uniform fallback watering
pub mod sprinkler;
/// Temperature safety and heating fallback
pub mod temperature;

pub use heating::HeatingController;
pub use pest_attack::PestAttackController;
pub use pesticide::PesticideController;
pub use rain::RainController;
pub use sprinkler::SprinklerController;
pub use temperature::TemperatureController;
