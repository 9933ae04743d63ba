//! League Convergence - promotion-only convergence engine for league pyramids
//!
//! Given two teams placed somewhere in a pyramid of divisions (division 1 on
//! top, each division below holding twice as many leagues), this crate works
//! out the first league both teams share and how many seasons of promotion
//! it takes to get there.
//!
//! ```
//! use league_convergence::{compute_convergence, Position};
//!
//! let result = compute_convergence(Position::new(4, 1), Position::new(3, 1)).unwrap();
//! assert_eq!((result.division, result.league, result.seasons), (2, 1, 2));
//! ```
//!
//! Python bindings are available with the `python` feature.

pub mod config;
pub mod engine;
pub mod error;
pub mod selftest;
pub mod structure;

#[cfg(feature = "python")]
mod python;

pub use config::{ConvergenceRule, EngineConfig, EngineSettings};
pub use engine::{
    compute_convergence, ConvergenceEngine, ConvergenceResult, ConvergenceTrace, SeasonStep,
};
pub use error::{ConvergenceError, Result};
pub use structure::{LeagueStructure, Position};
