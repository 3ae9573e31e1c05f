//! Score engine.
//!
//! `ScoreEngine` defines:
//! - How points are awarded and taken away
//! - When a round is won
//! - How the stake escalates and resets
//!
//! It never touches storage or feedback backends directly.

pub mod engine;

pub use engine::{PointsOutcome, ScoreEngine, StakeOutcome};
