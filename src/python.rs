//! Python bindings via PyO3
//!
//! The host builds the engine once with `init_engine` and then calls
//! `compute_convergence` with the four integers its form collected.

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use std::sync::Arc;

use crate::config::EngineSettings;
use crate::engine::{self, ConvergenceEngine};
use crate::structure::Position;

// ============================================================================
// Cached Engine
// ============================================================================

/// Global cached engine
static CACHED_ENGINE: OnceCell<Arc<RwLock<ConvergenceEngine>>> = OnceCell::new();

fn cached_engine() -> PyResult<Arc<RwLock<ConvergenceEngine>>> {
    CACHED_ENGINE
        .get()
        .cloned()
        .ok_or_else(|| PyRuntimeError::new_err("Engine not initialized. Call init_engine() first."))
}

/// Store `engine` in `cell`, replacing whatever was cached before
///
/// Concurrent first calls all go through the same slot, so the last write
/// wins and no engine is dropped unseen.
fn install_engine(cell: &OnceCell<Arc<RwLock<ConvergenceEngine>>>, engine: ConvergenceEngine) {
    let slot = cell.get_or_init(|| Arc::new(RwLock::new(ConvergenceEngine::default())));
    *slot.write() = engine;
}

fn to_coordinate(name: &str, value: i64) -> PyResult<u32> {
    u32::try_from(value)
        .map_err(|_| PyValueError::new_err(format!("{} out of range: {}", name, value)))
}

// ============================================================================
// Python Classes
// ============================================================================

/// Shared position of both teams and the seasons needed to reach it
#[pyclass(name = "ConvergenceResult", frozen, get_all)]
#[derive(Debug, Clone, Copy)]
pub struct PyConvergenceResult {
    division: u32,
    league: u32,
    seasons: u32,
}

#[pymethods]
impl PyConvergenceResult {
    fn __repr__(&self) -> String {
        format!(
            "ConvergenceResult(division={}, league={}, seasons={})",
            self.division, self.league, self.seasons
        )
    }
}

impl From<engine::ConvergenceResult> for PyConvergenceResult {
    fn from(result: engine::ConvergenceResult) -> Self {
        Self {
            division: result.division,
            league: result.league,
            seasons: result.seasons,
        }
    }
}

// ============================================================================
// Python Functions
// ============================================================================

/// Build the engine (call once at startup)
///
/// # Arguments
/// * `settings_json` - Optional JSON settings document; the standard
///   pyramid and default rule are used when omitted
#[pyfunction]
#[pyo3(signature = (settings_json=None))]
fn init_engine(settings_json: Option<&str>) -> PyResult<()> {
    let settings = match settings_json {
        Some(json) => EngineSettings::from_json(json)?,
        None => EngineSettings::default(),
    };
    let engine = settings.build()?;

    install_engine(&CACHED_ENGINE, engine);
    Ok(())
}

/// Check if the engine is initialized
#[pyfunction]
fn is_engine_initialized() -> bool {
    CACHED_ENGINE.get().is_some()
}

/// League count of every division, top division first
#[pyfunction]
fn league_counts() -> PyResult<Vec<u32>> {
    let engine = cached_engine()?;
    let counts = engine.read().structure().counts().to_vec();
    Ok(counts)
}

/// Compute where and when two teams converge
///
/// # Raises
/// ValueError for positions outside the pyramid,
/// RuntimeError if `init_engine` was not called first or no convergence was found
#[pyfunction]
fn compute_convergence(
    division_a: i64,
    league_a: i64,
    division_b: i64,
    league_b: i64,
) -> PyResult<PyConvergenceResult> {
    let team_a = Position::new(
        to_coordinate("division_a", division_a)?,
        to_coordinate("league_a", league_a)?,
    );
    let team_b = Position::new(
        to_coordinate("division_b", division_b)?,
        to_coordinate("league_b", league_b)?,
    );

    let engine = cached_engine()?;
    let result = engine.read().compute(team_a, team_b)?;
    Ok(result.into())
}

// ============================================================================
// Python Module Definition
// ============================================================================

#[pymodule]
fn league_convergence(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_engine, m)?)?;
    m.add_function(wrap_pyfunction!(is_engine_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(league_counts, m)?)?;
    m.add_function(wrap_pyfunction!(compute_convergence, m)?)?;
    m.add_class::<PyConvergenceResult>()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConvergenceRule, EngineConfig};
    use crate::structure::LeagueStructure;
    use std::thread;

    fn engine_with_divisions(divisions: u32) -> ConvergenceEngine {
        ConvergenceEngine::new(
            LeagueStructure::with_divisions(divisions).unwrap(),
            EngineConfig::with_rule(ConvergenceRule::ShortestPath),
        )
    }

    #[test]
    fn test_install_replaces_cached_engine() {
        let cell = OnceCell::new();
        install_engine(&cell, engine_with_divisions(3));
        let first = cell.get().cloned().unwrap();

        install_engine(&cell, ConvergenceEngine::default());
        assert!(Arc::ptr_eq(&first, cell.get().unwrap()));
        assert_eq!(*first.read(), ConvergenceEngine::default());
    }

    #[test]
    fn test_concurrent_first_installs_keep_one_slot() {
        let cell: OnceCell<Arc<RwLock<ConvergenceEngine>>> = OnceCell::new();
        thread::scope(|scope| {
            for divisions in 1..=8 {
                let cell = &cell;
                scope.spawn(move || install_engine(cell, engine_with_divisions(divisions)));
            }
        });

        // Whichever install ran last is cached, never the placeholder
        let divisions = cell.get().unwrap().read().structure().division_count();
        assert!((1..=8).contains(&divisions));
        assert_eq!(
            *cell.get().unwrap().read(),
            engine_with_divisions(divisions)
        );
    }
}
