//! League pyramid module
//!
//! This module describes the fixed pyramid of divisions and leagues and the
//! positions teams occupy inside it.

mod position;
mod pyramid;

#[cfg(test)]
mod property_tests;

pub use position::*;
pub use pyramid::*;
