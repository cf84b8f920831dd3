//! Overlap scoring and overlap-graph construction.
//!
//! - [`scorer`]: suffix/prefix overlap between two symbol sequences
//! - [`graph`]: the full pairwise [`OverlapMatrix`](crate::core::matrix::OverlapMatrix)
//!
//! Matrix construction is the dominant cost of an assembly run (one score per
//! ordered pair of reads), so rows are computed in parallel with rayon.

pub mod graph;
pub mod scorer;

pub use graph::{build_overlap_matrix, OverlapError};
pub use scorer::overlap;
