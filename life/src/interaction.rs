// interaction.rs - Splashes live cells under the pointer

use crate::grid::Grid;

/// Cells brought to life around the pointer cell, as (dx, dy).
pub const SPLASH: [(isize, isize); 4] = [(0, -1), (1, -1), (-1, 1), (0, 1)];

/// Cell under a pointer position given in surface pixels.
pub fn cell_at(px: f32, py: f32, cell_spacing: f32) -> (isize, isize) {
    (
        (px / cell_spacing).floor() as isize,
        (py / cell_spacing).floor() as isize,
    )
}

/// Sets the splash cells around `(cx, cy)` alive. Cells that fall off the
/// grid are skipped; a pointer cell outside the grid changes nothing.
/// Returns how many cells were written.
pub fn splash(grid: &mut Grid, cx: isize, cy: isize) -> usize {
    if grid.get(cx, cy).is_none() {
        log::trace!("pointer cell ({cx}, {cy}) outside grid, ignored");
        return 0;
    }
    let mut written = 0;
    for &(dx, dy) in &SPLASH {
        if grid.set(cx + dx, cy + dy, true) {
            written += 1;
        }
    }
    written
}

/// Pointer-move handler: pixel position to splash.
pub fn pointer_moved(grid: &mut Grid, px: f32, py: f32, cell_spacing: f32) -> usize {
    let (cx, cy) = cell_at(px, py, cell_spacing);
    splash(grid, cx, cy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splash_in_the_middle_writes_four_cells() {
        let mut grid = Grid::new(10, 10);
        assert_eq!(splash(&mut grid, 4, 4), 4);
        for (x, y) in [(4, 3), (5, 3), (3, 5), (4, 5)] {
            assert_eq!(grid.get(x, y), Some(true));
        }
        assert_eq!(grid.live_count(), 4);
        // The pointer row itself is untouched.
        assert_eq!(grid.get(4, 4), Some(false));
    }

    #[test]
    fn splash_at_corner_drops_offgrid_cells() {
        let mut grid = Grid::new(10, 10);
        assert_eq!(splash(&mut grid, 0, 0), 1);
        assert_eq!(grid.get(0, 1), Some(true));

        let mut grid = Grid::new(10, 10);
        assert_eq!(splash(&mut grid, 9, 9), 1);
        assert_eq!(grid.get(9, 8), Some(true));
    }

    #[test]
    fn right_edge_does_not_wrap_into_next_row() {
        let mut grid = Grid::new(10, 10);
        assert_eq!(splash(&mut grid, 9, 4), 3);
        assert_eq!(grid.get(0, 4), Some(false));
        assert_eq!(grid.get(0, 3), Some(false));
    }

    #[test]
    fn pointer_outside_grid_changes_nothing() {
        let mut grid = Grid::new(10, 10);
        grid.set(0, 4, true);
        let before = grid.clone();

        assert_eq!(splash(&mut grid, -1, 5), 0);
        assert_eq!(splash(&mut grid, 10, 5), 0);
        assert_eq!(splash(&mut grid, 3, 40), 0);
        assert_eq!(pointer_moved(&mut grid, -1.0, 60.0, 15.0), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn pixels_map_to_cells() {
        assert_eq!(cell_at(0.0, 0.0, 15.0), (0, 0));
        assert_eq!(cell_at(14.9, 15.0, 15.0), (0, 1));
        assert_eq!(cell_at(-0.5, 31.0, 15.0), (-1, 2));

        let mut grid = Grid::new(10, 10);
        assert_eq!(pointer_moved(&mut grid, 76.0, 76.0, 15.0), 4);
        assert_eq!(grid.get(5, 4), Some(true));
    }
}
