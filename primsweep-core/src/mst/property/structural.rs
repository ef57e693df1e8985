//! Structural invariant verification for built spanning trees.
//!
//! For any tree produced by the builder, verifies:
//!
//! - **Edge count**: `n - 1` edges for `n ≥ 1`, none for `n = 0`.
//! - **Spanning**: the start vertex plus every edge target covers the
//!   vertex set, and no vertex joins the tree twice.
//! - **Attachment**: every edge starts at an already-visited vertex.
//! - **Acyclicity**: the edges form a single tree.
//! - **Comparisons**: the scans inspect `n(n-1)/2` frontier entries.

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::{TreeEdge, UniformMst, UniformMstBuilder};

use super::strategies::BuildCase;

/// Builds the tree described by `case` and validates every invariant.
pub(super) fn run_structural_invariants_property(case: BuildCase) -> TestCaseResult {
    let tree = build_case(case)?;
    let n = tree.vertex_count();

    validate_edge_count(&tree)?;
    validate_spanning(&tree)?;
    validate_acyclicity(n, tree.edges())?;
    validate_comparisons(&tree)?;
    Ok(())
}

/// Builds the same case twice and checks the runs agree on size.
pub(super) fn run_size_determinism_property(case: BuildCase) -> TestCaseResult {
    let first = build_case(case)?;
    let second = build_case(case)?;
    if first.edge_count() != second.edge_count() {
        return Err(TestCaseError::fail(format!(
            "edge counts differ between runs: {} vs {} ({case:?})",
            first.edge_count(),
            second.edge_count(),
        )));
    }
    if first.total_weight() != second.total_weight() {
        return Err(TestCaseError::fail(format!(
            "total weights differ between runs ({case:?})"
        )));
    }
    Ok(())
}

fn build_case(case: BuildCase) -> Result<UniformMst, TestCaseError> {
    UniformMstBuilder::new()
        .with_tie_break(case.tie_break)
        .build(case.vertex_count)
        .map_err(|err| TestCaseError::fail(format!("build failed: {err} ({case:?})")))
}

fn validate_edge_count(tree: &UniformMst) -> TestCaseResult {
    let expected = tree.vertex_count().saturating_sub(1);
    if tree.edge_count() != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected {expected} for n={}",
            tree.edge_count(),
            tree.vertex_count(),
        )));
    }
    Ok(())
}

fn validate_spanning(tree: &UniformMst) -> TestCaseResult {
    let Some(start) = tree.start_vertex() else {
        return if tree.vertex_count() == 0 {
            Ok(())
        } else {
            Err(TestCaseError::fail("non-empty graph has no start vertex"))
        };
    };

    let mut visited = HashSet::from([start]);
    for (i, edge) in tree.edges().iter().enumerate() {
        if !visited.contains(&edge.from()) {
            return Err(TestCaseError::fail(format!(
                "edge {i}: attaches to unvisited vertex {}",
                edge.from(),
            )));
        }
        if edge.to() >= tree.vertex_count() {
            return Err(TestCaseError::fail(format!(
                "edge {i}: vertex {} outside 0..{}",
                edge.to(),
                tree.vertex_count(),
            )));
        }
        if !visited.insert(edge.to()) {
            return Err(TestCaseError::fail(format!(
                "edge {i}: vertex {} visited twice",
                edge.to(),
            )));
        }
    }

    if visited.len() != tree.vertex_count() {
        return Err(TestCaseError::fail(format!(
            "visited {} of {} vertices",
            visited.len(),
            tree.vertex_count(),
        )));
    }
    Ok(())
}

fn validate_acyclicity(vertex_count: usize, edges: &[TreeEdge]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (i, edge) in edges.iter().enumerate() {
        let left = find_root(&mut parent, edge.from());
        let right = find_root(&mut parent, edge.to());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) creates a cycle",
                edge.from(),
                edge.to(),
            )));
        }
        parent[right] = left;
    }
    Ok(())
}

fn validate_comparisons(tree: &UniformMst) -> TestCaseResult {
    let n = tree.vertex_count();
    let expected = n.saturating_mul(n.saturating_sub(1)) / 2;
    if tree.comparisons() != expected {
        return Err(TestCaseError::fail(format!(
            "comparisons {}, expected {expected} for n={n}",
            tree.comparisons(),
        )));
    }
    Ok(())
}

/// Finds the root of `node` with path halving.
pub(super) fn find_root(parent: &mut [usize], node: usize) -> usize {
    let mut current = node;
    while parent[current] != current {
        parent[current] = parent[parent[current]];
        current = parent[current];
    }
    current
}
