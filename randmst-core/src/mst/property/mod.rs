//! Property-based tests for the dense Prim's builder.
//!
//! Verifies both extraction strategies against a sequential Kruskal oracle
//! and checks the admission-sequence invariants (one admission per node,
//! root first, monotone running total, cut-minimal admission weights) over
//! complete graphs with varied weight distributions.

mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
