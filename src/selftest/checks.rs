//! Rule checks and random case generation

use rand::Rng;
use smallvec::SmallVec;
use std::fmt;

use crate::engine::ConvergenceResult;
use crate::structure::{LeagueStructure, Position};

/// A convergence rule broken by a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Result division number exceeds a starting division number
    DivisionTooHigh,
    /// Result league does not exist in the result division
    LeagueOutOfRange,
    /// Fewer seasons than the division gap
    TooFewSeasons,
    /// Division 1 with a league other than 1
    TopDivisionLeague,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Violation::DivisionTooHigh => "Result division is too high",
            Violation::LeagueOutOfRange => "Invalid league number for division",
            Violation::TooFewSeasons => "Too few seasons for division difference",
            Violation::TopDivisionLeague => "Division 1 must be League 1",
        };
        f.write_str(text)
    }
}

/// Check a result against the rules every convergence must satisfy
pub fn verify(
    structure: &LeagueStructure,
    team_a: Position,
    team_b: Position,
    result: &ConvergenceResult,
) -> SmallVec<[Violation; 4]> {
    let mut violations = SmallVec::new();

    if result.division > team_a.division.min(team_b.division) {
        violations.push(Violation::DivisionTooHigh);
    }
    if !structure.contains(result.position()) {
        violations.push(Violation::LeagueOutOfRange);
    }
    if result.seasons < team_a.division.abs_diff(team_b.division) {
        violations.push(Violation::TooFewSeasons);
    }
    if result.division == 1 && result.league != 1 {
        violations.push(Violation::TopDivisionLeague);
    }

    violations
}

/// Uniformly random valid position
pub fn random_position<R: Rng>(rng: &mut R, structure: &LeagueStructure) -> Position {
    let division = rng.gen_range(1..=structure.division_count());
    let leagues = structure.league_count(division).unwrap_or(1);
    Position::new(division, rng.gen_range(1..=leagues))
}

/// Two independent random positions
pub fn generate_case<R: Rng>(
    rng: &mut R,
    structure: &LeagueStructure,
) -> (Position, Position) {
    (random_position(rng, structure), random_position(rng, structure))
}
