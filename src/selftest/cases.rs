//! Hand-picked reference cases

use crate::config::ConvergenceRule;
use crate::engine::ConvergenceResult;
use crate::structure::Position;

/// A pair of starting positions with the answer expected under each rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownCase {
    pub description: &'static str,
    pub team_a: Position,
    pub team_b: Position,
    pub walk: ConvergenceResult,
    pub shortest: ConvergenceResult,
}

impl KnownCase {
    pub fn expected(&self, rule: ConvergenceRule) -> ConvergenceResult {
        match rule {
            ConvergenceRule::SynchronizedWalk => self.walk,
            ConvergenceRule::ShortestPath => self.shortest,
        }
    }
}

const fn outcome(division: u32, league: u32, seasons: u32) -> ConvergenceResult {
    ConvergenceResult {
        division,
        league,
        seasons,
    }
}

const KNOWN_CASES: [KnownCase; 5] = [
    KnownCase {
        description: "Same division, adjacent leagues",
        team_a: Position::new(3, 1),
        team_b: Position::new(3, 2),
        walk: outcome(2, 1, 1),
        shortest: outcome(2, 1, 1),
    },
    KnownCase {
        description: "Same division, non-adjacent leagues",
        team_a: Position::new(3, 1),
        team_b: Position::new(3, 3),
        walk: outcome(2, 2, 1),
        shortest: outcome(1, 1, 2),
    },
    KnownCase {
        description: "Different divisions, same relative league position",
        team_a: Position::new(4, 1),
        team_b: Position::new(3, 1),
        walk: outcome(2, 1, 2),
        shortest: outcome(3, 1, 1),
    },
    KnownCase {
        description: "Already together in the top division",
        team_a: Position::new(1, 1),
        team_b: Position::new(1, 1),
        walk: outcome(1, 1, 0),
        shortest: outcome(1, 1, 0),
    },
    KnownCase {
        description: "Multiple promotions across divisions",
        team_a: Position::new(5, 1),
        team_b: Position::new(3, 4),
        walk: outcome(2, 2, 3),
        shortest: outcome(1, 1, 4),
    },
];

/// Reference cases for the standard pyramid
pub fn known_cases() -> &'static [KnownCase] {
    &KNOWN_CASES
}
