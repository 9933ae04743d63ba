//! Convergence engine module

mod convergence;
mod search;
mod trace;
mod walk;


pub use convergence::*;
pub use trace::*;
