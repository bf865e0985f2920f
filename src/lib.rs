//! Objective Engine: randomized challenge objectives for games.
//!
//! Games describe challenges as weighted templates whose uppercase tokens
//! are filled from per-game pools. A medley composes several games into one
//! themed generator, with per-game exclusions and token-collision renaming.

pub mod core;
pub mod games;
pub mod schema;
