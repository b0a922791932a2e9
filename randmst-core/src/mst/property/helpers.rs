//! Shared helper functions for Prim's property-based tests.

/// Path-compressing find for the union-find oracle.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Returns `true` when `left` and `right` agree to within a relative
/// tolerance that absorbs summation-order rounding.
pub(super) fn weights_agree(left: f64, right: f64) -> bool {
    let scale = left.abs().max(right.abs()).max(1.0);
    (left - right).abs() <= 1e-9 * scale
}
