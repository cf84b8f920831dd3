use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use super::scorer::overlap;
use crate::core::matrix::OverlapMatrix;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OverlapError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Score every ordered pair of reads.
///
/// Cell `(i, j)` of the result is `overlap(reads[i], reads[j])` and the
/// diagonal holds [`OverlapMatrix::INVALID`]. Rows are filled in parallel on
/// the current rayon pool; each worker owns one row slice.
///
/// # Errors
///
/// Returns `OverlapError::InvalidInput` if `reads` is empty.
pub fn build_overlap_matrix<S>(reads: &[S]) -> Result<OverlapMatrix, OverlapError>
where
    S: AsRef<[u8]> + Sync,
{
    if reads.is_empty() {
        return Err(OverlapError::InvalidInput(
            "cannot build an overlap matrix from zero reads".to_string(),
        ));
    }

    let n = reads.len();
    let mut matrix = OverlapMatrix::new(n);

    matrix
        .cells_mut()
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(i, row)| {
            let predecessor = reads[i].as_ref();
            for (j, cell) in row.iter_mut().enumerate() {
                if i != j {
                    *cell = to_score(overlap(predecessor, reads[j].as_ref()));
                }
            }
        });

    debug!(reads = n, "Built overlap matrix");
    Ok(matrix)
}

#[inline]
fn to_score(k: usize) -> i64 {
    i64::try_from(k).unwrap_or(i64::MAX)
}
