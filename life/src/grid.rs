// grid.rs - Flat cell buffer and the generation rule

use rand::Rng;
use rand::distributions::{Bernoulli, Distribution};

use crate::error::{LifeError, Result};

/// Neighbor window used when counting around a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edges {
    /// Half-open bounds: neighbors past the last row/column are skipped.
    Clipped,
    /// Inclusive upper bounds (`n <= width`, `n <= height`). Column `width`
    /// aliases the first cell of the next row through the flat index, and a
    /// read past the end of the buffer poisons the count so the cell dies.
    Inclusive,
}

#[rustfmt::skip]
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Conway's rule for a single cell.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Row-major grid of cells, indexed `x + y * width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self> {
        let expected = width * height;
        if cells.len() != expected {
            return Err(LifeError::BufferLength {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { width, height, cells })
    }

    /// Each cell independently alive with `probability`.
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        probability: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let alive = Bernoulli::new(probability)
            .map_err(|_| LifeError::InvalidProbability(probability))?;
        let cells = (0..width * height).map(|_| alive.sample(rng)).collect();
        Ok(Self { width, height, cells })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn get(&self, x: isize, y: isize) -> Option<bool> {
        self.in_bounds(x, y)
            .then(|| self.cells[self.index(x as usize, y as usize)])
    }

    /// Writes a cell if it lies inside the grid. Returns whether it landed.
    pub fn set(&mut self, x: isize, y: isize, alive: bool) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x as usize, y as usize);
        self.cells[idx] = alive;
        true
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Live neighbors of `(x, y)`, or `None` when an inclusive window reads
    /// past the end of the buffer.
    fn neighbor_count(&self, x: usize, y: usize, edges: Edges) -> Option<u8> {
        let (w, h) = (self.width as isize, self.height as isize);
        let mut count = 0;

        for &(dx, dy) in &NEIGHBORS {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx < 0 || ny < 0 {
                continue;
            }
            let inside = match edges {
                Edges::Clipped => nx < w && ny < h,
                Edges::Inclusive => nx <= w && ny <= h,
            };
            if !inside {
                continue;
            }
            let idx = nx as usize + ny as usize * self.width;
            if *self.cells.get(idx)? {
                count += 1;
            }
        }
        Some(count)
    }

    /// Computes the next generation into a fresh buffer.
    pub fn step(&self, edges: Edges) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for y in 0..self.height {
            for x in 0..self.width {
                let alive = self.cells[self.index(x, y)];
                let next = match self.neighbor_count(x, y, edges) {
                    Some(count) => next_state(alive, count),
                    None => false,
                };
                cells.push(next);
            }
        }

        Grid {
            width: self.width,
            height: self.height,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid_3x3(cells: [u8; 9]) -> Grid {
        Grid::from_cells(3, 3, cells.iter().map(|&c| c == 1).collect()).unwrap()
    }

    fn as_bits(grid: &Grid) -> Vec<u8> {
        grid.cells().iter().map(|&c| c as u8).collect()
    }

    #[test]
    fn rule_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "live with {n}");
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn dead_grid_stays_dead() {
        let grid = Grid::new(50, 100);
        for edges in [Edges::Clipped, Edges::Inclusive] {
            assert_eq!(grid.step(edges).live_count(), 0);
        }
    }

    #[test]
    fn lone_center_cell_dies() {
        let grid = grid_3x3([0, 0, 0, 0, 1, 0, 0, 0, 0]);
        assert_eq!(as_bits(&grid.step(Edges::Clipped)), vec![0; 9]);
    }

    #[test]
    fn blinker_flips_to_vertical() {
        let grid = grid_3x3([0, 0, 0, 1, 1, 1, 0, 0, 0]);
        let next = grid.step(Edges::Clipped);
        assert_eq!(as_bits(&next), vec![0, 1, 0, 0, 1, 0, 0, 1, 0]);
        assert_eq!(next.step(Edges::Clipped), grid);
    }

    #[test]
    fn interior_block_is_still() {
        let mut grid = Grid::new(6, 6);
        for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
            grid.set(x, y, true);
        }
        for edges in [Edges::Clipped, Edges::Inclusive] {
            assert_eq!(grid.step(edges), grid);
        }
    }

    #[test]
    fn step_leaves_input_untouched_and_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::random(20, 30, 1.0 / 3.0, &mut rng).unwrap();
        let before = grid.clone();

        let a = grid.step(Edges::Inclusive);
        let b = grid.step(Edges::Inclusive);

        assert_eq!(grid, before);
        assert_eq!(a, b);
    }

    #[test]
    fn inclusive_edges_alias_next_row_and_poison_last_row() {
        // Same horizontal blinker, inclusive window:
        // (2,0) sees (0,1) through the aliased right column and is born,
        // (2,1) reads past the buffer at its lower right and dies,
        // the bottom row reads past the buffer and dies.
        let grid = grid_3x3([0, 0, 0, 1, 1, 1, 0, 0, 0]);
        let next = grid.step(Edges::Inclusive);
        assert_eq!(as_bits(&next), vec![0, 1, 1, 0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn inclusive_bottom_row_always_dies() {
        let mut grid = Grid::new(4, 4);
        // Horizontal bar on the bottom row would otherwise keep its middle.
        for x in 0..4 {
            grid.set(x, 3, true);
        }
        grid.set(1, 2, true);
        let next = grid.step(Edges::Inclusive);
        for x in 0..4 {
            assert_eq!(next.get(x, 3), Some(false));
        }
        let clipped = grid.step(Edges::Clipped);
        assert_eq!(clipped.get(1, 3), Some(true));
    }

    #[test]
    fn from_cells_checks_length() {
        let err = Grid::from_cells(3, 3, vec![false; 8]).unwrap_err();
        assert_eq!(
            err,
            LifeError::BufferLength { width: 3, height: 3, expected: 9, actual: 8 }
        );
    }

    #[test]
    fn set_and_get_respect_bounds() {
        let mut grid = Grid::new(3, 2);
        assert!(grid.set(2, 1, true));
        assert!(!grid.set(3, 0, true));
        assert!(!grid.set(-1, 0, true));
        assert!(!grid.set(0, 2, true));
        assert_eq!(grid.get(2, 1), Some(true));
        assert_eq!(grid.get(3, 1), None);
        assert_eq!(grid.live_count(), 1);
    }

    #[test]
    fn random_rejects_bad_probability() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Grid::random(2, 2, 1.5, &mut rng).unwrap_err(),
            LifeError::InvalidProbability(1.5)
        );
    }

    #[test]
    fn random_density_is_about_a_third() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = Grid::random(200, 200, 1.0 / 3.0, &mut rng).unwrap();
        let fraction = grid.live_count() as f64 / 40_000.0;
        assert!((fraction - 1.0 / 3.0).abs() < 0.02, "fraction {fraction}");
    }
}
