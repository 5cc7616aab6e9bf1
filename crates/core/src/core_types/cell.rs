//! Cell states of the forest grid

use serde::{Deserialize, Serialize};

/// State of a single forest cell.
///
/// Every cell is in exactly one of these states at any point in time; the
/// simulation update rule maps the current state (plus neighborhood and
/// probability draws) to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Bare ground, no fuel.
    Empty,
    /// A living tree that can catch fire.
    Tree,
    /// On fire; burns out to `Empty` after one step.
    Burning,
}

impl CellState {
    /// True if the cell is currently on fire.
    pub fn is_burning(self) -> bool {
        self == CellState::Burning
    }

    /// True if the cell holds a living tree.
    pub fn is_tree(self) -> bool {
        self == CellState::Tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_predicates() {
        assert!(CellState::Burning.is_burning());
        assert!(!CellState::Tree.is_burning());
        assert!(CellState::Tree.is_tree());
        assert!(!CellState::Empty.is_tree());
    }
}
