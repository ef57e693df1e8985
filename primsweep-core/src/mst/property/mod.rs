//! Property-based tests for the uniform-weight spanning tree builder.
//!
//! Verifies structural invariants (edge count, spanning coverage,
//! acyclicity, attachment to visited vertices) across generated vertex
//! counts and both tie-break policies, and checks that repeated builds agree
//! on size even when their shapes differ.

mod strategies;
mod structural;
