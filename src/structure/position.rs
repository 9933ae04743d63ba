//! Team positions and promotion arithmetic

use crate::error::{ConvergenceError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Accepts "3-2", "3/2", "3 2", "D3L2", "Division 3 League 2", "Division 3 - League 2"
static POSITION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(?:division|div|d)?\s*(\d+)\s*(?:[-/:,]|\s|league|l)\s*(?:league|l)?\s*(\d+)\s*$",
    )
    .expect("position pattern is valid")
});

/// A team's placement in the pyramid
///
/// Lower division numbers are higher tiers. Whether the position exists is
/// decided by a [`LeagueStructure`](super::LeagueStructure), not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub division: u32,
    pub league: u32,
}

impl Position {
    #[inline]
    pub const fn new(division: u32, league: u32) -> Self {
        Self { division, league }
    }

    /// Whether this position is in the top division
    #[inline]
    pub const fn is_top(&self) -> bool {
        self.division <= 1
    }

    /// The position one division up, or `None` from the top division.
    ///
    /// Two adjacent leagues feed one league above them, so league `l`
    /// promotes into league `ceil(l / 2)`.
    #[inline]
    pub fn promoted(&self) -> Option<Position> {
        if self.is_top() {
            return None;
        }
        Some(Position::new(self.division - 1, promoted_league(self.league)))
    }
}

/// League a team lands in after one promotion
#[inline]
pub fn promoted_league(league: u32) -> u32 {
    league.div_ceil(2)
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Division {} - League {}", self.division, self.league)
    }
}

impl FromStr for Position {
    type Err = ConvergenceError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = POSITION_PATTERN
            .captures(s)
            .ok_or_else(|| ConvergenceError::ParseError(format!("Unrecognized position: {:?}", s)))?;

        let number = |idx: usize| -> Result<u32> {
            caps[idx]
                .parse()
                .map_err(|_| ConvergenceError::ParseError(format!("Number out of range: {}", &caps[idx])))
        };

        Ok(Position::new(number(1)?, number(2)?))
    }
}
