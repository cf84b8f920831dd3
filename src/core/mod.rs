//! Core data types shared by every assembly stage.
//!
//! - [`Read`] and [`ReadSet`]: validated, fixed-length input reads
//! - [`OverlapMatrix`]: the n×n suffix/prefix overlap table
//! - [`Arc`] and [`Chain`]: the layout graph and its simple paths
//! - [`Contig`]: the merged sequence produced from one chain
//!
//! Reads are identified everywhere by their index in the [`ReadSet`]. Nothing
//! downstream copies a read; stages borrow the set for the length of a run.
//!
//! [`Read`]: read::Read
//! [`ReadSet`]: read::ReadSet
//! [`OverlapMatrix`]: matrix::OverlapMatrix
//! [`Arc`]: types::Arc
//! [`Chain`]: types::Chain
//! [`Contig`]: contig::Contig

pub mod contig;
pub mod matrix;
pub mod read;
pub mod types;
