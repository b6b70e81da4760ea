//! Core data structures for the garden simulation.

pub mod plant;
pub mod spec;
