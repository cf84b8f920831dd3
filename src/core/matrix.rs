use serde::Serialize;

/// Square table of pairwise overlap scores.
///
/// `get(i, j)` is the overlap of read `i` as predecessor and read `j` as
/// successor. Cells equal to [`OverlapMatrix::INVALID`] are not edges: the
/// diagonal always holds it, and layout engines write it into rows and
/// columns they have consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlapMatrix {
    size: usize,
    cells: Vec<i64>,
}

impl OverlapMatrix {
    /// Sentinel for "not a real edge"
    pub const INVALID: i64 = -1;

    /// Create an n×n matrix with every cell set to [`OverlapMatrix::INVALID`]
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Self::INVALID; size * size],
        }
    }

    /// Build a matrix from rows. Returns `None` if the rows are not square.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        self.cells[row * self.size + col] = value;
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &[i64] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Mutable access to the backing row-major storage
    pub(crate) fn cells_mut(&mut self) -> &mut [i64] {
        &mut self.cells
    }

    pub fn invalidate_row(&mut self, row: usize) {
        let start = row * self.size;
        self.cells[start..start + self.size].fill(Self::INVALID);
    }

    pub fn invalidate_col(&mut self, col: usize) {
        for row in 0..self.size {
            self.cells[row * self.size + col] = Self::INVALID;
        }
    }

    /// Largest off-diagonal value that is not [`OverlapMatrix::INVALID`]
    #[must_use]
    pub fn max_valid(&self) -> Option<i64> {
        (0..self.size)
            .flat_map(|i| (0..self.size).map(move |j| (i, j)))
            .filter(|&(i, j)| i != j)
            .map(|(i, j)| self.get(i, j))
            .filter(|&v| v != Self::INVALID)
            .max()
    }

    /// Copy out as nested rows (used for JSON output)
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        (0..self.size).map(|i| self.row(i).to_vec()).collect()
    }
}
