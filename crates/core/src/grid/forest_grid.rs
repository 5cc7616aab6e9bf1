//! Row-major grid of forest cells
//!
//! The grid is storage only: fixed dimensions, indexed access, and bulk fill.
//! Neighbor inspection and probability logic live in the simulation engine.

use crate::core_types::CellState;

/// Errors raised by grid construction and direct cell access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grid constructed with a zero dimension.
    InvalidDimension { width: usize, height: usize },
    /// Cell accessed outside `0..width * height`.
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::InvalidDimension { width, height } => {
                write!(f, "Grid dimensions must be positive, got {width}x{height}")
            }
            GridError::IndexOutOfRange { index, len } => {
                write!(f, "Cell index {index} out of range for {len} cells")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Fixed-size rectangular grid of forest cells.
///
/// Cells are stored in row-major order (`index = x + y * width`) and the
/// vector length always equals `width * height`. The dimensions are fixed for
/// the grid's lifetime; the engine replaces the whole grid on each step
/// rather than mutating it mid-computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestGrid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl ForestGrid {
    /// Create a grid with every cell set to `initial`.
    ///
    /// # Errors
    /// Returns `GridError::InvalidDimension` if either dimension is zero.
    pub fn new(width: usize, height: usize, initial: CellState) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }

        Ok(ForestGrid {
            width,
            height,
            cells: vec![initial; width * height],
        })
    }

    /// Build a grid from an already-computed cell vector.
    ///
    /// Used by the engine's compute-and-swap pass; the caller guarantees the
    /// vector length matches `width * height`.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), width * height);

        ForestGrid {
            width,
            height,
            cells,
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the grid holds no cells. Never true for a constructed grid.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Read the cell at a row-major index.
    ///
    /// # Errors
    /// Returns `GridError::IndexOutOfRange` if the index is invalid.
    pub fn get(&self, index: usize) -> Result<CellState, GridError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GridError::IndexOutOfRange {
                index,
                len: self.cells.len(),
            })
    }

    /// Overwrite the cell at a row-major index.
    ///
    /// # Errors
    /// Returns `GridError::IndexOutOfRange` if the index is invalid.
    pub fn set(&mut self, index: usize, state: CellState) -> Result<(), GridError> {
        let len = self.cells.len();
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = state;
                Ok(())
            }
            None => Err(GridError::IndexOutOfRange { index, len }),
        }
    }

    /// Set every cell to `state`.
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Row-major view of all cells, for rendering and scanning.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = ForestGrid::new(4, 3, CellState::Tree).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.len(), 12);
        assert!(grid.cells().iter().all(|&c| c == CellState::Tree));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            ForestGrid::new(0, 3, CellState::Empty),
            Err(GridError::InvalidDimension { width: 0, height: 3 })
        );
        assert_eq!(
            ForestGrid::new(3, 0, CellState::Empty),
            Err(GridError::InvalidDimension { width: 3, height: 0 })
        );
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut grid = ForestGrid::new(3, 3, CellState::Empty).unwrap();
        grid.set(4, CellState::Burning).unwrap();
        assert_eq!(grid.get(4).unwrap(), CellState::Burning);
        assert_eq!(grid.get(0).unwrap(), CellState::Empty);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = ForestGrid::new(3, 3, CellState::Tree).unwrap();
        assert_eq!(
            grid.get(9),
            Err(GridError::IndexOutOfRange { index: 9, len: 9 })
        );
        assert_eq!(
            grid.set(100, CellState::Empty),
            Err(GridError::IndexOutOfRange { index: 100, len: 9 })
        );
    }

    #[test]
    fn test_fill_overwrites_every_cell() {
        let mut grid = ForestGrid::new(5, 5, CellState::Empty).unwrap();
        grid.set(7, CellState::Burning).unwrap();
        grid.fill(CellState::Tree);
        assert!(grid.cells().iter().all(|&c| c == CellState::Tree));
    }
}
