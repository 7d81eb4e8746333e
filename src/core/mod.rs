//! Core simulation logic
//!
//! Data flows one direction: the catalog feeds the engine, the engine's
//! play counter feeds the statistics aggregator.

pub mod catalog;
pub mod engine;
pub mod loader;
pub mod stats;

pub use catalog::Catalog;
pub use engine::{PlayCounter, Simulation};
