//! Pointer-to-cell coordinate mapping
//!
//! Translates a pointer position on a rendered view of the forest into a
//! row-major cell index. This is the input collaborator's side of the engine
//! contract; the engine independently rejects out-of-range indices.

/// Map a pointer position to a row-major cell index.
///
/// `x` and `y` are in the same continuous units as `rendered_width` and
/// `rendered_height` (typically pixels). The cell column is
/// `floor(x / rendered_width * grid_width)` and likewise for the row.
///
/// Returns `None` when a rendered dimension is not a positive finite number
/// or the point maps outside the grid.
pub fn point_to_index(
    x: f32,
    y: f32,
    rendered_width: f32,
    rendered_height: f32,
    grid_width: usize,
    grid_height: usize,
) -> Option<usize> {
    if !rendered_width.is_finite()
        || rendered_width <= 0.0
        || !rendered_height.is_finite()
        || rendered_height <= 0.0
    {
        return None;
    }

    let col = (x / rendered_width * grid_width as f32).floor();
    let row = (y / rendered_height * grid_height as f32).floor();
    if !col.is_finite() || !row.is_finite() || col < 0.0 || row < 0.0 {
        return None;
    }

    // An as-cast saturates for values beyond usize::MAX, which the bounds
    // check below still rejects.
    let col = col as usize;
    let row = row as usize;
    if col >= grid_width || row >= grid_height {
        return None;
    }

    Some(col + row * grid_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_of_view_maps_to_center_cell() {
        // 300x300 view over a 3x3 grid: the middle of the view is cell 4.
        assert_eq!(point_to_index(150.0, 150.0, 300.0, 300.0, 3, 3), Some(4));
    }

    #[test]
    fn test_first_and_last_cells() {
        assert_eq!(point_to_index(0.0, 0.0, 300.0, 300.0, 3, 3), Some(0));
        assert_eq!(point_to_index(299.9, 299.9, 300.0, 300.0, 3, 3), Some(8));
    }

    #[test]
    fn test_cell_boundaries_floor_down() {
        // 100 units per cell; 99.9 is still column 0, 100.0 is column 1.
        assert_eq!(point_to_index(99.9, 0.0, 300.0, 300.0, 3, 3), Some(0));
        assert_eq!(point_to_index(100.0, 0.0, 300.0, 300.0, 3, 3), Some(1));
    }

    #[test]
    fn test_points_outside_view_rejected() {
        assert_eq!(point_to_index(-1.0, 50.0, 300.0, 300.0, 3, 3), None);
        assert_eq!(point_to_index(50.0, -0.1, 300.0, 300.0, 3, 3), None);
        assert_eq!(point_to_index(300.0, 50.0, 300.0, 300.0, 3, 3), None);
        assert_eq!(point_to_index(50.0, 301.0, 300.0, 300.0, 3, 3), None);
    }

    #[test]
    fn test_degenerate_view_rejected() {
        assert_eq!(point_to_index(10.0, 10.0, 0.0, 300.0, 3, 3), None);
        assert_eq!(point_to_index(10.0, 10.0, 300.0, -5.0, 3, 3), None);
        assert_eq!(point_to_index(10.0, 10.0, f32::NAN, 300.0, 3, 3), None);
    }

    #[test]
    fn test_non_square_view_and_grid() {
        // 200x100 view over a 4x2 grid: 50 units per column, 50 per row.
        assert_eq!(point_to_index(60.0, 20.0, 200.0, 100.0, 4, 2), Some(1));
        assert_eq!(point_to_index(199.0, 99.0, 200.0, 100.0, 4, 2), Some(7));
    }
}
