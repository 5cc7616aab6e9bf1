//! Whole-grid census statistics

use rayon::prelude::*;

use crate::core_types::CellState;

/// Cell counts for one grid snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ForestStats {
    /// Cells with no fuel.
    pub empty: usize,
    /// Cells holding a living tree.
    pub trees: usize,
    /// Cells currently on fire.
    pub burning: usize,
}

impl ForestStats {
    /// Count cells by state across a whole grid (parallel pass).
    pub fn census(cells: &[CellState]) -> Self {
        cells
            .par_iter()
            .fold(ForestStats::default, |mut acc, state| {
                match state {
                    CellState::Empty => acc.empty += 1,
                    CellState::Tree => acc.trees += 1,
                    CellState::Burning => acc.burning += 1,
                }
                acc
            })
            .reduce(ForestStats::default, |a, b| ForestStats {
                empty: a.empty + b.empty,
                trees: a.trees + b.trees,
                burning: a.burning + b.burning,
            })
    }

    /// Total number of cells counted.
    pub fn total(&self) -> usize {
        self.empty + self.trees + self.burning
    }

    /// Fraction of cells holding a living tree, in [0, 1].
    pub fn tree_fraction(&self) -> f32 {
        if self.total() == 0 {
            0.0
        } else {
            self.trees as f32 / self.total() as f32
        }
    }

    /// Fraction of cells on fire, in [0, 1].
    pub fn burning_fraction(&self) -> f32 {
        if self.total() == 0 {
            0.0
        } else {
            self.burning as f32 / self.total() as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_census_counts_by_state() {
        let cells = [
            CellState::Tree,
            CellState::Tree,
            CellState::Burning,
            CellState::Empty,
            CellState::Tree,
            CellState::Empty,
        ];

        let stats = ForestStats::census(&cells);
        assert_eq!(stats.trees, 3);
        assert_eq!(stats.burning, 1);
        assert_eq!(stats.empty, 2);
        assert_eq!(stats.total(), cells.len());
    }

    #[test]
    fn test_fractions() {
        let cells = [CellState::Tree, CellState::Tree, CellState::Empty, CellState::Burning];
        let stats = ForestStats::census(&cells);
        assert_relative_eq!(stats.tree_fraction(), 0.5);
        assert_relative_eq!(stats.burning_fraction(), 0.25);
    }

    #[test]
    fn test_empty_slice() {
        let stats = ForestStats::census(&[]);
        assert_eq!(stats.total(), 0);
        assert_relative_eq!(stats.tree_fraction(), 0.0);
    }
}
