//! Main convergence engine

use super::search::shortest_path;
use super::walk::synchronized_walk;
use super::{ConvergenceResult, ConvergenceTrace};
use crate::config::{ConvergenceRule, EngineConfig};
use crate::error::Result;
use crate::structure::{LeagueStructure, Position};

/// Computes where and when two teams end up in the same league
///
/// The engine owns its pyramid and settings and never mutates them, so one
/// instance can serve any number of callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvergenceEngine {
    structure: LeagueStructure,
    config: EngineConfig,
}

impl ConvergenceEngine {
    pub fn new(structure: LeagueStructure, config: EngineConfig) -> Self {
        Self { structure, config }
    }

    pub fn structure(&self) -> &LeagueStructure {
        &self.structure
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// First shared position of both teams and the seasons it takes
    ///
    /// # Errors
    /// `InvalidPosition` if either position is outside the pyramid,
    /// `ConvergenceNotFound` if the season cap is hit first.
    pub fn compute(&self, team_a: Position, team_b: Position) -> Result<ConvergenceResult> {
        Ok(self.trace(team_a, team_b)?.result())
    }

    /// Same as [`compute`](Self::compute) but keeps every season played
    pub fn trace(&self, team_a: Position, team_b: Position) -> Result<ConvergenceTrace> {
        let team_a = self.structure.validate(team_a)?;
        let team_b = self.structure.validate(team_b)?;

        let trace = match self.config.rule {
            ConvergenceRule::SynchronizedWalk => {
                synchronized_walk(team_a, team_b, self.config.max_seasons)?
            }
            ConvergenceRule::ShortestPath => shortest_path(team_a, team_b, self.config.max_seasons)?,
        };

        tracing::debug!(
            rule = ?self.config.rule,
            team_a = %team_a,
            team_b = %team_b,
            seasons = trace.seasons(),
            "convergence computed"
        );
        Ok(trace)
    }

    /// Parse both positions from text, then compute
    pub fn compute_str(&self, team_a: &str, team_b: &str) -> Result<ConvergenceResult> {
        self.compute(team_a.parse()?, team_b.parse()?)
    }
}

/// Convergence on the standard pyramid with default settings
pub fn compute_convergence(team_a: Position, team_b: Position) -> Result<ConvergenceResult> {
    ConvergenceEngine::default().compute(team_a, team_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvergenceError;

    fn result(division: u32, league: u32, seasons: u32) -> ConvergenceResult {
        ConvergenceResult {
            division,
            league,
            seasons,
        }
    }

    #[test]
    fn test_reference_scenarios() {
        let cases = [
            ((3, 1), (3, 2), result(2, 1, 1)),
            ((3, 1), (3, 3), result(2, 2, 1)),
            ((4, 1), (3, 1), result(2, 1, 2)),
            ((1, 1), (1, 1), result(1, 1, 0)),
        ];
        for (a, b, expected) in cases {
            let got = compute_convergence(Position::new(a.0, a.1), Position::new(b.0, b.1)).unwrap();
            assert_eq!(got, expected, "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_invalid_positions_rejected() {
        let valid = Position::new(3, 1);
        for bad in [Position::new(3, 5), Position::new(0, 1), Position::new(9, 1)] {
            assert!(matches!(
                compute_convergence(bad, valid),
                Err(ConvergenceError::InvalidPosition { .. })
            ));
            assert!(matches!(
                compute_convergence(valid, bad),
                Err(ConvergenceError::InvalidPosition { .. })
            ));
        }
    }

    #[test]
    fn test_identical_invalid_positions_still_rejected() {
        let bad = Position::new(2, 3);
        assert!(compute_convergence(bad, bad).is_err());
    }

    #[test]
    fn test_shortest_path_rule() {
        let engine = ConvergenceEngine::new(
            LeagueStructure::standard(),
            EngineConfig::with_rule(ConvergenceRule::ShortestPath),
        );
        assert_eq!(
            engine.compute(Position::new(4, 1), Position::new(3, 1)).unwrap(),
            result(3, 1, 1)
        );
    }

    #[test]
    fn test_rules_diverge_on_distant_leagues() {
        let walk = ConvergenceEngine::default();
        let search = ConvergenceEngine::new(
            LeagueStructure::standard(),
            EngineConfig::with_rule(ConvergenceRule::ShortestPath),
        );
        let (a, b) = (Position::new(3, 1), Position::new(3, 3));

        // Walk merges into (2,2) after one season; (3,1) cannot reach it by
        // promotion, so the search climbs to the top instead
        assert_eq!(walk.compute(a, b).unwrap(), result(2, 2, 1));
        assert_eq!(search.compute(a, b).unwrap(), result(1, 1, 2));

        let walk_trace = walk.trace(a, b).unwrap();
        assert_eq!(walk_trace.steps[0].team_a, Position::new(2, 1));
        assert_eq!(walk_trace.merged_into, Some(Position::new(2, 2)));
        assert_eq!(search.trace(a, b).unwrap().merged_into, None);
    }

    #[test]
    fn test_custom_structure_bounds_positions() {
        let engine = ConvergenceEngine::new(
            LeagueStructure::with_divisions(3).unwrap(),
            EngineConfig::default(),
        );
        assert_eq!(
            engine.compute(Position::new(3, 4), Position::new(2, 1)).unwrap(),
            result(1, 1, 2)
        );
        assert!(engine.compute(Position::new(4, 1), Position::new(2, 1)).is_err());
    }

    #[test]
    fn test_season_cap_from_config() {
        let config = EngineConfig {
            max_seasons: 1,
            ..EngineConfig::default()
        };
        let engine = ConvergenceEngine::new(LeagueStructure::standard(), config);
        assert!(matches!(
            engine.compute(Position::new(4, 1), Position::new(3, 1)),
            Err(ConvergenceError::ConvergenceNotFound { limit: 1, .. })
        ));
    }

    #[test]
    fn test_compute_str() {
        let engine = ConvergenceEngine::default();
        assert_eq!(
            engine.compute_str("Division 4 - League 1", "3/1").unwrap(),
            result(2, 1, 2)
        );
        assert!(matches!(
            engine.compute_str("four-one", "3/1"),
            Err(ConvergenceError::ParseError(_))
        ));
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConvergenceEngine>();
    }
}
