//! Plain data types shared by every garden crate.
//!
//! Nothing in here mutates state according to simulation rules; the rules
//! live in `garden_core` and are attached through extension traits.

pub mod data;

pub use data::plant::{LifeState, Plant, PlantId, Position};
pub use data::spec::PlantSpec;
