//! Simulated surroundings for a routing module.
//!
//! The `sim` module stands in for the parts of a simulation the network layer
//! only talks to: a single-slot link that records what it was handed, and a
//! set of default node settings.

pub mod env;
pub mod link;

pub use self::link::SimLink;
