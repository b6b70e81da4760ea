//! # Garden IO
//!
//! Configuration sources for the garden simulation.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - JSON helpers with validation
//! - The plant roster loader with its built-in fallback garden
//! - The TOML rules loader

/// Error types and result aliases for I/O operations
pub mod error;
/// Plant roster loading and the default garden
pub mod roster;
/// Validated JSON helpers
pub mod serialization;
/// Rules configuration loading
pub mod settings;

pub use error::{IoError, Result};
pub use roster::{default_plants, load_roster, load_roster_or_default, GardenSpec, RosterSource};
pub use serialization::{from_json, read_json_file};
pub use settings::load_rules;
