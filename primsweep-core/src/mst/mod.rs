//! Uniform-weight minimum spanning tree construction.
//!
//! Builds a spanning tree over the implicit complete graph `K_n` whose edges
//! all weigh [`UNIFORM_WEIGHT`]. Edges are never materialised. The expansion
//! follows Prim's scheme: seed the tree with one vertex, keep every unvisited
//! vertex in a frontier with its best-known connection cost, and repeatedly
//! move the cheapest frontier vertex into the tree.
//!
//! Extraction scans the whole frontier, so one construction costs `O(n²)`.
//! That growth curve is what the sweep measures; swapping in a heap would
//! change the measured algorithm.
//!
//! Each new vertex attaches to the first member of the visited set rather than
//! to a tracked cheapest source. Under uniform weights every attachment point
//! costs the same, so the tree is still minimal.

mod frontier;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, instrument};

use crate::error::MstError;

use self::frontier::{FrontierMap, VertexSet, scan_min};

pub use self::frontier::Cost;

/// Weight shared by every edge of the implicit complete graph.
pub const UNIFORM_WEIGHT: Cost = 1;

/// Controls how ties between equal-cost candidates are resolved.
///
/// Under uniform weights every extraction is a tie, so the policy decides the
/// start vertex, the order vertices join the tree, and each attachment point.
/// It never changes the edge count or the total weight.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum TieBreak {
    /// Hash-backed containers. The start vertex and tree shape follow hash
    /// iteration order, which is unspecified and differs between processes.
    #[default]
    Unordered,
    /// Ordered containers. The start vertex is `0` and ties resolve to the
    /// lowest vertex identifier, so the tree is reproducible.
    LowestId,
}

impl TieBreak {
    /// Returns the symbolic name used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unordered => "unordered",
            Self::LowestId => "lowest-id",
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tree edge joining a newly visited vertex to the tree.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TreeEdge {
    from: usize,
    to: usize,
}

impl TreeEdge {
    /// Creates an edge from an already-visited vertex to a newly visited one.
    #[must_use]
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Returns the tree vertex the edge attaches to.
    #[must_use]
    #[rustfmt::skip]
    pub const fn from(&self) -> usize { self.from }

    /// Returns the vertex the edge brought into the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn to(&self) -> usize { self.to }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Cost { UNIFORM_WEIGHT }
}

/// The outcome of one uniform-weight spanning tree construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UniformMst {
    vertex_count: usize,
    start_vertex: Option<usize>,
    edges: Vec<TreeEdge>,
    comparisons: usize,
    tie_break: TieBreak,
    elapsed: Duration,
}

impl UniformMst {
    /// Returns the number of vertices in the graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the vertex that seeded the tree, or `None` for an empty graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start_vertex(&self) -> Option<usize> { self.start_vertex }

    /// Returns the tree edges in the order they were added.
    #[must_use]
    pub const fn edges(&self) -> &[TreeEdge] {
        self.edges.as_slice()
    }

    /// Returns the number of tree edges.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the sum of the tree's edge weights.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        u64::try_from(self.edges.len())
            .unwrap_or(u64::MAX)
            .saturating_mul(u64::from(UNIFORM_WEIGHT))
    }

    /// Returns how many frontier entries the minimum scans inspected.
    ///
    /// For `n ≥ 1` vertices the scans inspect `n(n-1)/2` entries.
    #[must_use]
    #[rustfmt::skip]
    pub const fn comparisons(&self) -> usize { self.comparisons }

    /// Returns the tie-break policy used for the construction.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tie_break(&self) -> TieBreak { self.tie_break }

    /// Returns the wall-clock time spent constructing the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns the construction time in seconds.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Consumes the result, returning the edge set and the elapsed time.
    #[must_use]
    pub fn into_parts(self) -> (Vec<TreeEdge>, Duration) {
        (self.edges, self.elapsed)
    }
}

/// Configures uniform-weight spanning tree constructions.
///
/// # Examples
/// ```
/// use primsweep_core::{TieBreak, UniformMstBuilder};
///
/// let tree = UniformMstBuilder::new()
///     .with_tie_break(TieBreak::LowestId)
///     .build(4)
///     .expect("non-negative counts are valid");
/// assert_eq!(tree.edge_count(), 3);
/// assert_eq!(tree.start_vertex(), Some(0));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UniformMstBuilder {
    tie_break: TieBreak,
}

impl UniformMstBuilder {
    /// Creates a builder using the [`TieBreak::Unordered`] policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the tie-break policy.
    #[must_use]
    pub const fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Returns the configured tie-break policy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tie_break(&self) -> TieBreak { self.tie_break }

    /// Constructs a spanning tree of the uniform-weight complete graph on
    /// `vertex_count` vertices and times the construction.
    ///
    /// Counts of `0` and `1` produce an empty edge set.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidArgument`] when `vertex_count` is negative
    /// and [`MstError::InvariantViolation`] if the expansion loses track of
    /// its frontier.
    #[instrument(
        name = "mst.build_uniform",
        err,
        skip(self),
        fields(tie_break = %self.tie_break),
    )]
    pub fn build(&self, vertex_count: i64) -> Result<UniformMst, MstError> {
        let vertices =
            usize::try_from(vertex_count).map_err(|_| MstError::InvalidArgument { vertex_count })?;

        let started = Instant::now();
        let growth = match self.tie_break {
            TieBreak::Unordered => grow_tree::<HashSet<usize>, HashMap<usize, Cost>>(vertices)?,
            TieBreak::LowestId => grow_tree::<BTreeSet<usize>, BTreeMap<usize, Cost>>(vertices)?,
        };
        let elapsed = started.elapsed();

        debug!(
            edges = growth.edges.len(),
            comparisons = growth.comparisons,
            start_vertex = ?growth.start_vertex,
            elapsed_seconds = elapsed.as_secs_f64(),
            "uniform spanning tree constructed"
        );

        Ok(UniformMst {
            vertex_count: vertices,
            start_vertex: growth.start_vertex,
            edges: growth.edges,
            comparisons: growth.comparisons,
            tie_break: self.tie_break,
            elapsed,
        })
    }
}

/// Constructs a spanning tree of the uniform-weight complete graph using the
/// default [`TieBreak::Unordered`] policy.
///
/// # Errors
/// Returns [`MstError::InvalidArgument`] when `vertex_count` is negative.
///
/// # Examples
/// ```
/// use primsweep_core::{MstError, build_uniform_mst};
///
/// let tree = build_uniform_mst(2).expect("two vertices form one edge");
/// assert_eq!(tree.edge_count(), 1);
/// assert!(matches!(
///     build_uniform_mst(-1),
///     Err(MstError::InvalidArgument { vertex_count: -1 })
/// ));
/// ```
pub fn build_uniform_mst(vertex_count: i64) -> Result<UniformMst, MstError> {
    UniformMstBuilder::new().build(vertex_count)
}

struct Growth {
    start_vertex: Option<usize>,
    edges: Vec<TreeEdge>,
    comparisons: usize,
}

fn grow_tree<S, F>(vertex_count: usize) -> Result<Growth, MstError>
where
    S: VertexSet,
    F: FrontierMap,
{
    let vertices = S::with_range(vertex_count);
    let Some(start) = vertices.first_member() else {
        return Ok(Growth {
            start_vertex: None,
            edges: Vec::new(),
            comparisons: 0,
        });
    };

    let mut visited = S::default();
    visited.insert(start);

    let mut frontier = F::default();
    for vertex in vertices.members().filter(|vertex| *vertex != start) {
        frontier.insert(vertex, UNIFORM_WEIGHT);
    }

    let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut comparisons = 0_usize;

    while visited.len() != vertices.len() {
        let violation = |invariant| MstError::InvariantViolation {
            invariant,
            visited: visited.len(),
            vertex_count,
        };

        let cheapest = scan_min(&frontier).ok_or_else(|| violation("frontier exhausted early"))?;
        comparisons = comparisons.saturating_add(cheapest.examined);
        debug_assert_eq!(cheapest.cost, UNIFORM_WEIGHT);

        let attach = visited
            .first_member()
            .ok_or_else(|| violation("visited set is empty"))?;
        if visited.contains(cheapest.vertex) {
            return Err(violation("frontier held a visited vertex"));
        }

        edges.push(TreeEdge::new(attach, cheapest.vertex));
        visited.insert(cheapest.vertex);
        frontier.remove(cheapest.vertex);
    }

    if !frontier.is_empty() {
        return Err(MstError::InvariantViolation {
            invariant: "frontier outlived the vertex set",
            visited: visited.len(),
            vertex_count,
        });
    }

    Ok(Growth {
        start_vertex: Some(start),
        edges,
        comparisons,
    })
}

#[cfg(test)]
mod property;
