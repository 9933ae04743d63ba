//! Calculation results and season-by-season traces

use crate::structure::Position;
use serde::Serialize;
use smallvec::SmallVec;

/// First shared position and the seasons needed to reach it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConvergenceResult {
    pub division: u32,
    pub league: u32,
    pub seasons: u32,
}

impl ConvergenceResult {
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.division, self.league)
    }
}

/// Both teams' positions at the end of one season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonStep {
    pub season: u32,
    pub team_a: Position,
    pub team_b: Position,
}

/// Full record of a calculation
///
/// A pyramid of N divisions never needs more than N seasons, so the steps
/// of the standard pyramid stay inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvergenceTrace {
    pub start_a: Position,
    pub start_b: Position,
    pub steps: SmallVec<[SeasonStep; 8]>,
    /// League both teams were merged into after the last season, when the
    /// rule merges teams that reach a division in different leagues
    pub merged_into: Option<Position>,
}

impl ConvergenceTrace {
    pub(crate) fn new(start_a: Position, start_b: Position) -> Self {
        Self {
            start_a,
            start_b,
            steps: SmallVec::new(),
            merged_into: None,
        }
    }

    pub(crate) fn record(&mut self, team_a: Position, team_b: Position) {
        let season = self.seasons() + 1;
        self.steps.push(SeasonStep {
            season,
            team_a,
            team_b,
        });
    }

    /// Place both teams in one league at the end of the last season
    pub(crate) fn merge(&mut self, meeting: Position) {
        self.merged_into = Some(meeting);
    }

    #[inline]
    pub fn seasons(&self) -> u32 {
        self.steps.len() as u32
    }

    /// Positions of both teams after the last season played
    pub fn current(&self) -> (Position, Position) {
        self.steps
            .last()
            .map(|step| (step.team_a, step.team_b))
            .unwrap_or((self.start_a, self.start_b))
    }

    /// Shared position reached at the end of the trace
    ///
    /// This is the merge league when there was one, otherwise the league
    /// both teams stand in after the last season.
    pub fn result(&self) -> ConvergenceResult {
        let meeting = self.merged_into.unwrap_or_else(|| self.current().0);
        ConvergenceResult {
            division: meeting.division,
            league: meeting.league,
            seasons: self.seasons(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_trace_reports_start() {
        let trace = ConvergenceTrace::new(Position::new(2, 1), Position::new(2, 1));
        assert_eq!(trace.seasons(), 0);
        assert_eq!(
            trace.result(),
            ConvergenceResult {
                division: 2,
                league: 1,
                seasons: 0
            }
        );
    }

    #[test]
    fn test_record_numbers_seasons() {
        let mut trace = ConvergenceTrace::new(Position::new(4, 1), Position::new(3, 1));
        trace.record(Position::new(3, 1), Position::new(3, 1));
        trace.record(Position::new(2, 1), Position::new(2, 1));

        let seasons: Vec<u32> = trace.steps.iter().map(|s| s.season).collect();
        assert_eq!(seasons, vec![1, 2]);
        assert_eq!(trace.current(), (Position::new(2, 1), Position::new(2, 1)));
        assert_eq!(trace.result().position(), Position::new(2, 1));
        assert_eq!(trace.result().seasons, 2);
    }

    #[test]
    fn test_merge_overrides_last_positions() {
        let mut trace = ConvergenceTrace::new(Position::new(3, 1), Position::new(3, 3));
        trace.record(Position::new(2, 1), Position::new(2, 2));
        trace.merge(Position::new(2, 2));

        assert_eq!(trace.current(), (Position::new(2, 1), Position::new(2, 2)));
        assert_eq!(
            trace.result(),
            ConvergenceResult {
                division: 2,
                league: 2,
                seasons: 1
            }
        );
    }
}
