//! Synchronized promotion walk

use std::cmp::Ordering;

use super::ConvergenceTrace;
use crate::error::{ConvergenceError, Result};
use crate::structure::Position;

/// Walk both teams up the pyramid one season at a time
///
/// Each season the team in the lower tier is promoted. Once both teams share
/// a division they are promoted together; the trace keeps each team's own
/// promotion and then merges both into the higher-numbered of their two new
/// leagues, which ends the walk. Teams that meet in
/// division 1 are already in its only league.
///
/// Positions must already be validated against the pyramid.
pub(super) fn synchronized_walk(
    start_a: Position,
    start_b: Position,
    max_seasons: u32,
) -> Result<ConvergenceTrace> {
    let mut trace = ConvergenceTrace::new(start_a, start_b);
    if start_a == start_b {
        return Ok(trace);
    }

    let (mut team_a, mut team_b) = (start_a, start_b);
    loop {
        if trace.seasons() >= max_seasons {
            tracing::warn!(
                team_a = %start_a,
                team_b = %start_b,
                limit = max_seasons,
                "season cap reached before convergence"
            );
            return Err(ConvergenceError::ConvergenceNotFound {
                team_a: start_a,
                team_b: start_b,
                limit: max_seasons,
            });
        }

        let merged = match team_a.division.cmp(&team_b.division) {
            Ordering::Greater => {
                team_a = climb(team_a)?;
                false
            }
            Ordering::Less => {
                team_b = climb(team_b)?;
                false
            }
            Ordering::Equal => match (team_a.promoted(), team_b.promoted()) {
                (Some(up_a), Some(up_b)) => {
                    team_a = up_a;
                    team_b = up_b;
                    true
                }
                // Division 1 has a single league
                _ => return Ok(trace),
            },
        };

        trace.record(team_a, team_b);
        tracing::debug!(
            season = trace.seasons(),
            team_a = %team_a,
            team_b = %team_b,
            merged,
            "season played"
        );

        if merged {
            let meeting = Position::new(team_a.division, team_a.league.max(team_b.league));
            trace.merge(meeting);
            tracing::debug!(meeting = %meeting, "teams merged");
            return Ok(trace);
        }
        if team_a == team_b && team_a.is_top() {
            return Ok(trace);
        }
    }
}

/// Promote a team that sits below the other one
fn climb(position: Position) -> Result<Position> {
    position
        .promoted()
        .ok_or_else(|| ConvergenceError::InvalidPosition {
            division: position.division,
            league: position.league,
            reason: "team below the other cannot be in the top division".to_string(),
        })
}
