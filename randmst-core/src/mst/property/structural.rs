//! Property 2: admission-sequence invariants.
//!
//! For any complete graph, verifies that the admission sequence reported by
//! [`MstBuilder::build_observed`]:
//!
//! - admits every node exactly once, starting with node 0 at weight zero;
//! - numbers steps consecutively;
//! - reports a non-decreasing running total equal to the sum of admission
//!   weights;
//! - admits, at each step, an outside node whose cheapest edge into the tree
//!   is minimal, preferring the lowest index on ties.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::{Admission, Extraction, MstBuilder};

use super::types::MatrixFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(
    fixture: &MatrixFixture,
    extraction: Extraction,
) -> TestCaseResult {
    let mut model = fixture.model.clone();
    let mut seen = Vec::with_capacity(fixture.node_count);
    let total = MstBuilder::new(extraction)
        .build_observed(&mut model, |admission| seen.push(admission))
        .map_err(|err| TestCaseError::fail(format!("{extraction:?} failed: {err}")))?;

    validate_coverage(fixture.node_count, &seen)?;
    validate_running_total(&seen, total)?;
    validate_cut_minimality(fixture, &seen)?;
    Ok(())
}

fn validate_coverage(node_count: usize, seen: &[Admission]) -> TestCaseResult {
    if seen.len() != node_count {
        return Err(TestCaseError::fail(format!(
            "{} admissions for {node_count} nodes",
            seen.len(),
        )));
    }
    if let Some(root) = seen.first() {
        if root.node() != 0 || root.weight() != 0.0 {
            return Err(TestCaseError::fail(format!(
                "first admission must be node 0 at weight 0, got {root:?}",
            )));
        }
    }
    let mut admitted = vec![false; node_count];
    for (step, admission) in seen.iter().enumerate() {
        if admission.step() != step {
            return Err(TestCaseError::fail(format!(
                "admission {step} reports step {}",
                admission.step(),
            )));
        }
        if std::mem::replace(&mut admitted[admission.node()], true) {
            return Err(TestCaseError::fail(format!(
                "node {} admitted twice",
                admission.node(),
            )));
        }
    }
    Ok(())
}

fn validate_running_total(seen: &[Admission], total: f64) -> TestCaseResult {
    let mut expected = 0.0;
    for admission in seen {
        let previous = expected;
        expected += admission.weight();
        if admission.total() != expected || admission.total() < previous {
            return Err(TestCaseError::fail(format!(
                "running total {} at step {}, expected {expected}",
                admission.total(),
                admission.step(),
            )));
        }
    }
    if total != expected {
        return Err(TestCaseError::fail(format!(
            "returned total {total}, admissions sum to {expected}",
        )));
    }
    Ok(())
}

fn validate_cut_minimality(fixture: &MatrixFixture, seen: &[Admission]) -> TestCaseResult {
    let node_count = fixture.node_count;
    let mut cut = vec![f64::INFINITY; node_count];
    let mut admitted = vec![false; node_count];
    if let Some(first) = cut.first_mut() {
        *first = 0.0;
    }

    for admission in seen {
        let node = admission.node();
        let best = cut[node];
        if admission.weight() != best {
            return Err(TestCaseError::fail(format!(
                "node {node} admitted at {} but its cheapest tree edge is {best}",
                admission.weight(),
            )));
        }
        for other in (0..node_count).filter(|&other| !admitted[other] && other != node) {
            let beats = cut[other] < best || (cut[other] == best && other < node);
            if beats {
                return Err(TestCaseError::fail(format!(
                    "step {}: admitted node {node} ({best}) but node {other} ({}) was preferable",
                    admission.step(),
                    cut[other],
                )));
            }
        }

        admitted[node] = true;
        for other in (0..node_count).filter(|&other| !admitted[other]) {
            cut[other] = cut[other].min(fixture.model.entry(node, other));
        }
    }
    Ok(())
}
