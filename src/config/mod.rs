//! Engine configuration
//!
//! This module handles the settings a host loads once at start-up: which
//! convergence rule to run, the season safety cap and an optional custom
//! league pyramid.

use crate::engine::ConvergenceEngine;
use crate::error::Result;
use crate::structure::LeagueStructure;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Season cap after which a calculation is abandoned
pub const DEFAULT_MAX_SEASONS: u32 = 64;

/// How the engine moves teams each season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvergenceRule {
    /// Lower-tier team climbs until divisions match, then both teams are
    /// promoted together and merge. The merge costs one season.
    #[default]
    SynchronizedWalk,
    /// Breadth-first search for the fewest seasons in which any combination
    /// of promotions puts both teams in the same league
    ShortestPath,
}

/// Engine behaviour settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub rule: ConvergenceRule,
    pub max_seasons: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rule: ConvergenceRule::default(),
            max_seasons: DEFAULT_MAX_SEASONS,
        }
    }
}

impl EngineConfig {
    pub fn with_rule(rule: ConvergenceRule) -> Self {
        Self {
            rule,
            ..Self::default()
        }
    }
}

/// Settings document
///
/// Expected format (every field optional, unknown keys rejected):
/// `{"league_structure": {"1": 1, "2": 2}, "engine": {"rule": "shortest_path", "max_seasons": 16}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSettings {
    pub league_structure: Option<BTreeMap<u32, u32>>,
    pub engine: EngineConfig,
}

impl EngineSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve the league pyramid, falling back to the standard one
    pub fn structure(&self) -> Result<LeagueStructure> {
        match &self.league_structure {
            Some(map) => LeagueStructure::from_map(map),
            None => Ok(LeagueStructure::standard()),
        }
    }

    pub fn build(&self) -> Result<ConvergenceEngine> {
        Ok(ConvergenceEngine::new(self.structure()?, self.engine))
    }
}
