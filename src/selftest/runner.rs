//! Self-test runner and report

use rand::Rng;
use smallvec::SmallVec;

use super::{generate_case, known_cases, verify, Violation};
use crate::engine::{ConvergenceEngine, ConvergenceResult};
use crate::error::ConvergenceError;
use crate::structure::Position;

/// Why a self-test case failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Known case answered differently than expected
    Mismatch {
        expected: ConvergenceResult,
        got: ConvergenceResult,
    },
    /// Answer broke one or more convergence rules
    Violations(SmallVec<[Violation; 4]>),
    /// Engine returned an error
    Error(ConvergenceError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailure {
    pub team_a: Position,
    pub team_b: Position,
    pub kind: FailureKind,
}

/// Outcome of a self-test run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfTestReport {
    pub known_total: usize,
    pub known_passed: usize,
    pub random_total: usize,
    pub random_passed: usize,
    pub failures: Vec<CaseFailure>,
}

impl SelfTestReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run the reference cases plus `random_cases` generated pairs
///
/// Reference cases that do not fit the engine's pyramid are skipped.
pub fn run_self_test<R: Rng>(
    engine: &ConvergenceEngine,
    rng: &mut R,
    random_cases: usize,
) -> SelfTestReport {
    let structure = engine.structure();
    let rule = engine.config().rule;
    let mut report = SelfTestReport::default();

    for case in known_cases() {
        if !structure.contains(case.team_a) || !structure.contains(case.team_b) {
            continue;
        }
        report.known_total += 1;

        let expected = case.expected(rule);
        let kind = match engine.compute(case.team_a, case.team_b) {
            Ok(got) if got == expected => {
                report.known_passed += 1;
                continue;
            }
            Ok(got) => FailureKind::Mismatch { expected, got },
            Err(err) => FailureKind::Error(err),
        };

        tracing::warn!(case = case.description, ?kind, "known case failed");
        report.failures.push(CaseFailure {
            team_a: case.team_a,
            team_b: case.team_b,
            kind,
        });
    }

    for _ in 0..random_cases {
        let (team_a, team_b) = generate_case(rng, structure);
        report.random_total += 1;

        let kind = match engine.compute(team_a, team_b) {
            Ok(result) => {
                let violations = verify(structure, team_a, team_b, &result);
                if violations.is_empty() {
                    report.random_passed += 1;
                    continue;
                }
                FailureKind::Violations(violations)
            }
            Err(err) => FailureKind::Error(err),
        };

        tracing::warn!(team_a = %team_a, team_b = %team_b, ?kind, "random case failed");
        report.failures.push(CaseFailure {
            team_a,
            team_b,
            kind,
        });
    }

    tracing::info!(
        known_passed = report.known_passed,
        known_total = report.known_total,
        random_passed = report.random_passed,
        random_total = report.random_total,
        "self-test finished"
    );
    report
}
