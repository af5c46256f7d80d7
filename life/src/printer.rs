// printer.rs - Plain-text dump of a grid

use crate::grid::Grid;

/// One line per row, `1` for live and `0` for dead.
pub fn print_grid(grid: &Grid) -> String {
    if grid.width() == 0 {
        return String::new();
    }
    grid.cells()
        .chunks(grid.width())
        .map(|row| row.iter().map(|&alive| if alive { '1' } else { '0' }).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
