//! Sequential Kruskal oracle for Prim's property verification.
//!
//! Sorts every pair of the complete graph and unions greedily. Kept
//! deliberately independent of the frontier code under test.

use std::cmp::Ordering;

use crate::test_utils::MatrixModel;

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleResult {
    /// Total weight of the spanning tree.
    pub total_weight: f64,
    /// Number of tree edges.
    pub edge_count: usize,
}

/// Computes the MST weight of a complete graph with Kruskal's algorithm.
pub(super) fn sequential_kruskal(node_count: usize, model: &MatrixModel) -> OracleResult {
    let mut edges: Vec<(f64, usize, usize)> = Vec::new();
    for low in 0..node_count {
        for high in (low + 1)..node_count {
            edges.push((model.entry(low, high), low, high));
        }
    }
    edges.sort_unstable_by(cmp_edge);

    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut total_weight = 0.0;
    let mut edge_count = 0;
    for (weight, low, high) in edges {
        let ra = find_root(&mut parent, low);
        let rb = find_root(&mut parent, high);
        if ra != rb {
            parent[rb.max(ra)] = ra.min(rb);
            total_weight += weight;
            edge_count += 1;
        }
    }

    OracleResult {
        total_weight,
        edge_count,
    }
}

fn cmp_edge(a: &(f64, usize, usize), b: &(f64, usize, usize)) -> Ordering {
    a.0.total_cmp(&b.0)
        .then_with(|| a.1.cmp(&b.1))
        .then_with(|| a.2.cmp(&b.2))
}
