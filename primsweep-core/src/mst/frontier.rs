//! Vertex and frontier containers backing the greedy expansion.
//!
//! The expansion is generic over the containers so the same loop runs on
//! hash-backed storage (iteration order varies between processes) and on
//! ordered storage (iteration order follows vertex identifiers). Minimum
//! extraction is a linear scan in both cases.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Connection cost of attaching a frontier vertex to the growing tree.
pub type Cost = u32;

/// Set of vertex identifiers, used for both the vertex set and the visited set.
pub(crate) trait VertexSet: Default {
    /// Builds a set holding every identifier in `0..vertex_count`.
    fn with_range(vertex_count: usize) -> Self;

    /// Inserts `vertex`, returning `true` when it was not yet present.
    fn insert(&mut self, vertex: usize) -> bool;

    fn contains(&self, vertex: usize) -> bool;

    fn len(&self) -> usize;

    /// Returns the first member in the set's iteration order.
    fn first_member(&self) -> Option<usize>;

    fn members(&self) -> impl Iterator<Item = usize> + '_;
}

/// Mapping from unvisited vertices to their best-known connection cost.
pub(crate) trait FrontierMap: Default {
    fn insert(&mut self, vertex: usize, cost: Cost);

    fn remove(&mut self, vertex: usize) -> Option<Cost>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entries(&self) -> impl Iterator<Item = (usize, Cost)> + '_;
}

/// The minimum frontier entry found by [`scan_min`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FrontierMin {
    pub(crate) vertex: usize,
    pub(crate) cost: Cost,
    /// Number of frontier entries inspected to find the minimum.
    pub(crate) examined: usize,
}

/// Finds the cheapest frontier entry by inspecting every entry once.
///
/// Ties resolve to the first entry in the frontier's iteration order.
pub(crate) fn scan_min<F: FrontierMap>(frontier: &F) -> Option<FrontierMin> {
    let mut examined = 0_usize;
    let mut best: Option<(usize, Cost)> = None;
    for (vertex, cost) in frontier.entries() {
        examined = examined.saturating_add(1);
        match best {
            Some((_, best_cost)) if best_cost <= cost => {}
            _ => best = Some((vertex, cost)),
        }
    }
    best.map(|(vertex, cost)| FrontierMin {
        vertex,
        cost,
        examined,
    })
}

impl VertexSet for HashSet<usize> {
    fn with_range(vertex_count: usize) -> Self {
        (0..vertex_count).collect()
    }

    fn insert(&mut self, vertex: usize) -> bool {
        HashSet::insert(self, vertex)
    }

    fn contains(&self, vertex: usize) -> bool {
        HashSet::contains(self, &vertex)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn first_member(&self) -> Option<usize> {
        self.iter().next().copied()
    }

    fn members(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().copied()
    }
}

impl VertexSet for BTreeSet<usize> {
    fn with_range(vertex_count: usize) -> Self {
        (0..vertex_count).collect()
    }

    fn insert(&mut self, vertex: usize) -> bool {
        BTreeSet::insert(self, vertex)
    }

    fn contains(&self, vertex: usize) -> bool {
        BTreeSet::contains(self, &vertex)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn first_member(&self) -> Option<usize> {
        self.first().copied()
    }

    fn members(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().copied()
    }
}

impl FrontierMap for HashMap<usize, Cost> {
    fn insert(&mut self, vertex: usize, cost: Cost) {
        HashMap::insert(self, vertex, cost);
    }

    fn remove(&mut self, vertex: usize) -> Option<Cost> {
        HashMap::remove(self, &vertex)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn entries(&self) -> impl Iterator<Item = (usize, Cost)> + '_ {
        self.iter().map(|(vertex, cost)| (*vertex, *cost))
    }
}

impl FrontierMap for BTreeMap<usize, Cost> {
    fn insert(&mut self, vertex: usize, cost: Cost) {
        BTreeMap::insert(self, vertex, cost);
    }

    fn remove(&mut self, vertex: usize) -> Option<Cost> {
        BTreeMap::remove(self, &vertex)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn entries(&self) -> impl Iterator<Item = (usize, Cost)> + '_ {
        self.iter().map(|(vertex, cost)| (*vertex, *cost))
    }
}
