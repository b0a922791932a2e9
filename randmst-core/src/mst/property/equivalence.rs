//! Property 1: equivalence with the sequential oracle.
//!
//! Both extraction strategies must produce the oracle's tree weight, and
//! they must agree with each other admission by admission.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::{Admission, Extraction, MstBuilder};

use super::helpers::weights_agree;
use super::oracle::sequential_kruskal;
use super::types::MatrixFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MatrixFixture) -> TestCaseResult {
    let oracle = sequential_kruskal(fixture.node_count, &fixture.model);
    if oracle.edge_count + 1 != fixture.node_count {
        return Err(TestCaseError::fail(format!(
            "oracle produced {} edges for {} nodes",
            oracle.edge_count, fixture.node_count,
        )));
    }

    for extraction in [Extraction::LinearScan, Extraction::BinaryHeap] {
        let mut model = fixture.model.clone();
        let total = MstBuilder::new(extraction)
            .build(&mut model)
            .map_err(|err| TestCaseError::fail(format!("{extraction:?} failed: {err}")))?;
        if !weights_agree(total, oracle.total_weight) {
            return Err(TestCaseError::fail(format!(
                "total weight mismatch: {}={total}, oracle={} (distribution={:?}, nodes={})",
                extraction.as_str(),
                oracle.total_weight,
                fixture.distribution,
                fixture.node_count,
            )));
        }
    }
    Ok(())
}

/// Runs the extraction agreement property for the given fixture.
pub(super) fn run_extraction_agreement_property(fixture: &MatrixFixture) -> TestCaseResult {
    let linear = admissions(fixture, Extraction::LinearScan)?;
    let heap = admissions(fixture, Extraction::BinaryHeap)?;
    if linear != heap {
        let first_divergence = linear
            .iter()
            .zip(&heap)
            .position(|(left, right)| left != right);
        return Err(TestCaseError::fail(format!(
            "admission sequences diverge at {first_divergence:?} \
             (distribution={:?}, nodes={})",
            fixture.distribution, fixture.node_count,
        )));
    }
    Ok(())
}

fn admissions(
    fixture: &MatrixFixture,
    extraction: Extraction,
) -> Result<Vec<Admission>, TestCaseError> {
    let mut model = fixture.model.clone();
    let mut seen = Vec::with_capacity(fixture.node_count);
    MstBuilder::new(extraction)
        .build_observed(&mut model, |admission| seen.push(admission))
        .map_err(|err| TestCaseError::fail(format!("{extraction:?} failed: {err}")))?;
    Ok(seen)
}
