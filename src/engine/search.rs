//! Shortest-path search over promotion combinations

use std::collections::VecDeque;

use ahash::AHashMap;
use smallvec::SmallVec;

use super::ConvergenceTrace;
use crate::error::{ConvergenceError, Result};
use crate::structure::Position;

/// Both teams' positions at one point of the search
type PairState = (Position, Position);

/// Find the fewest seasons after which both teams share a league
///
/// Every season either team, or both, may be promoted. Breadth-first order
/// means the first meeting found is optimal; states at `max_seasons` are
/// not expanded.
///
/// Positions must already be validated against the pyramid.
pub(super) fn shortest_path(
    start_a: Position,
    start_b: Position,
    max_seasons: u32,
) -> Result<ConvergenceTrace> {
    let start = (start_a, start_b);
    if start_a == start_b {
        return Ok(ConvergenceTrace::new(start_a, start_b));
    }

    // state -> predecessor
    let mut visited: AHashMap<PairState, Option<PairState>> = AHashMap::with_capacity(64);
    let mut queue: VecDeque<(PairState, u32)> = VecDeque::with_capacity(64);
    visited.insert(start, None);
    queue.push_back((start, 0));

    while let Some((state, cost)) = queue.pop_front() {
        if cost >= max_seasons {
            continue;
        }

        for next in successors(state) {
            if visited.contains_key(&next) {
                continue;
            }
            visited.insert(next, Some(state));
            tracing::trace!(
                season = cost + 1,
                team_a = %next.0,
                team_b = %next.1,
                "state reached"
            );

            if next.0 == next.1 {
                return Ok(rebuild(start, next, &visited));
            }
            queue.push_back((next, cost + 1));
        }
    }

    tracing::warn!(
        team_a = %start_a,
        team_b = %start_b,
        limit = max_seasons,
        "search exhausted before convergence"
    );
    Err(ConvergenceError::ConvergenceNotFound {
        team_a: start_a,
        team_b: start_b,
        limit: max_seasons,
    })
}

/// States reachable in one season, joint promotion first
fn successors((team_a, team_b): PairState) -> SmallVec<[PairState; 3]> {
    let mut out = SmallVec::new();
    let up_a = team_a.promoted();
    let up_b = team_b.promoted();

    if let (Some(a), Some(b)) = (up_a, up_b) {
        out.push((a, b));
    }
    if let Some(a) = up_a {
        out.push((a, team_b));
    }
    if let Some(b) = up_b {
        out.push((team_a, b));
    }
    out
}

/// Walk predecessor links back from the goal and replay them in order
fn rebuild(
    start: PairState,
    goal: PairState,
    visited: &AHashMap<PairState, Option<PairState>>,
) -> ConvergenceTrace {
    let mut path: SmallVec<[PairState; 8]> = SmallVec::new();
    let mut cursor = Some(goal);
    while let Some(state) = cursor {
        if state == start {
            break;
        }
        path.push(state);
        cursor = visited.get(&state).copied().flatten();
    }

    let mut trace = ConvergenceTrace::new(start.0, start.1);
    for (team_a, team_b) in path.into_iter().rev() {
        trace.record(team_a, team_b);
    }
    trace
}
