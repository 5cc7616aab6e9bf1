//! Forest grid storage and pointer-to-cell mapping

pub mod forest_grid;
pub mod viewport;

pub use forest_grid::{ForestGrid, GridError};
pub use viewport::point_to_index;
