//! Self-test harness
//!
//! Runs hand-picked reference cases and randomly generated position pairs
//! through an engine and checks every answer against the convergence rules.

mod cases;
mod checks;
mod runner;

pub use cases::*;
pub use checks::*;
pub use runner::*;
