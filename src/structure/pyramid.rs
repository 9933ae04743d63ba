//! League structure: division number to league count

use super::Position;
use crate::error::{ConvergenceError, Result};
use serde::Serialize;
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Number of divisions in the standard pyramid
pub const STANDARD_DIVISIONS: u32 = 8;

/// Deepest pyramid whose league counts still fit in a `u32`
pub const MAX_DIVISIONS: u32 = 32;

/// Immutable pyramid of divisions
///
/// Division 1 has a single league and every division below it has twice
/// the leagues of the one above, so promotion always maps two leagues onto
/// one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueStructure {
    /// League count per division, index 0 is division 1
    leagues: SmallVec<[u32; 8]>,
}

impl Default for LeagueStructure {
    fn default() -> Self {
        Self::standard()
    }
}

impl LeagueStructure {
    /// The standard 8-division pyramid: 1, 2, 4, ... 128 leagues
    pub fn standard() -> Self {
        Self::doubling(STANDARD_DIVISIONS)
    }

    /// A doubling pyramid with `divisions` divisions
    pub fn with_divisions(divisions: u32) -> Result<Self> {
        if divisions == 0 || divisions > MAX_DIVISIONS {
            return Err(ConvergenceError::InvalidStructure(format!(
                "division count must be between 1 and {}, got {}",
                MAX_DIVISIONS, divisions
            )));
        }
        Ok(Self::doubling(divisions))
    }

    fn doubling(divisions: u32) -> Self {
        Self {
            leagues: (0..divisions).map(|i| 1u32 << i).collect(),
        }
    }

    /// Build from league counts listed top division first
    pub fn from_counts(counts: &[u32]) -> Result<Self> {
        if counts.is_empty() {
            return Err(ConvergenceError::InvalidStructure(
                "at least one division is required".to_string(),
            ));
        }
        if counts.len() > MAX_DIVISIONS as usize {
            return Err(ConvergenceError::InvalidStructure(format!(
                "at most {} divisions are supported, got {}",
                MAX_DIVISIONS,
                counts.len()
            )));
        }
        if counts[0] != 1 {
            return Err(ConvergenceError::InvalidStructure(format!(
                "division 1 must have exactly 1 league, got {}",
                counts[0]
            )));
        }
        for (idx, pair) in counts.windows(2).enumerate() {
            if pair[1] != pair[0] * 2 {
                return Err(ConvergenceError::InvalidStructure(format!(
                    "division {} must have {} leagues (double division {}), got {}",
                    idx + 2,
                    pair[0] * 2,
                    idx + 1,
                    pair[1]
                )));
            }
        }

        Ok(Self {
            leagues: counts.iter().copied().collect(),
        })
    }

    /// Build from a division-keyed map such as `{1: 1, 2: 2, 3: 4}`
    pub fn from_map(map: &BTreeMap<u32, u32>) -> Result<Self> {
        for (expected, division) in (1u32..).zip(map.keys()) {
            if *division != expected {
                return Err(ConvergenceError::InvalidStructure(format!(
                    "divisions must be numbered 1..={} without gaps, found division {}",
                    map.len(),
                    division
                )));
            }
        }
        let counts: Vec<u32> = map.values().copied().collect();
        Self::from_counts(&counts)
    }

    /// Parse JSON in the form `{"1": 1, "2": 2, ...}`
    pub fn from_json(json: &str) -> Result<Self> {
        let map: BTreeMap<u32, u32> = serde_json::from_str(json)?;
        Self::from_map(&map)
    }

    #[inline]
    pub fn division_count(&self) -> u32 {
        self.leagues.len() as u32
    }

    /// League count of a division, `None` when the division does not exist
    #[inline]
    pub fn league_count(&self, division: u32) -> Option<u32> {
        let idx = division.checked_sub(1)?;
        self.leagues.get(idx as usize).copied()
    }

    /// League count of the bottom division
    #[inline]
    pub fn max_leagues(&self) -> u32 {
        self.leagues.last().copied().unwrap_or(1)
    }

    /// League counts, top division first
    pub fn counts(&self) -> &[u32] {
        &self.leagues
    }

    /// `(division, league count)` pairs, top division first
    pub fn divisions(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (1u32..).zip(self.leagues.iter().copied())
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        matches!(
            self.league_count(position.division),
            Some(count) if (1..=count).contains(&position.league)
        )
    }

    /// Check a position against this pyramid
    pub fn validate(&self, position: Position) -> Result<Position> {
        let count = self.league_count(position.division).ok_or_else(|| {
            ConvergenceError::InvalidPosition {
                division: position.division,
                league: position.league,
                reason: format!(
                    "division must be between 1 and {}",
                    self.division_count()
                ),
            }
        })?;

        if position.league == 0 || position.league > count {
            return Err(ConvergenceError::InvalidPosition {
                division: position.division,
                league: position.league,
                reason: format!(
                    "division {} has leagues 1 to {}",
                    position.division, count
                ),
            });
        }

        Ok(position)
    }
}
