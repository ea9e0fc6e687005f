//! Double-buffered grid state
//!
//! The grid is a square matrix of [`Cell`]s stored as two flat row-major
//! buffers: `current` holds the generation being read, `scratch` receives the
//! generation being written. After every step the two swap roles, so a full
//! generation costs one pass over the cells plus an O(1) buffer exchange.

use crate::cell::Cell;
use crate::error::SimError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Probability that a non-ignition cell starts as [`Cell::Tree`].
pub const DEFAULT_TREE_DENSITY: f64 = 0.6;

/// Population counts over the current generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Census {
    /// Cells with nothing to burn
    pub empty: usize,
    /// Unburned trees
    pub trees: usize,
    /// Actively burning cells
    pub burning: usize,
}

/// Double-buffered square grid of cells.
///
/// Owns the authoritative `current` buffer and the `scratch` buffer the step
/// engine writes the next generation into. Both buffers always have length
/// `size * size`; cell `(r, c)` lives at offset `r * size + c`.
#[derive(Debug, Clone)]
pub struct GridState {
    size: usize,
    current: Vec<Cell>,
    scratch: Vec<Cell>,
}

impl GridState {
    /// Create a grid seeded from system entropy with the default tree
    /// density.
    ///
    /// Exactly one cell starts burning: the integer-division center
    /// `(size / 2, size / 2)`. Every other cell is independently a tree with
    /// probability [`DEFAULT_TREE_DENSITY`], otherwise empty.
    ///
    /// # Errors
    /// Returns [`SimError::InvalidSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, SimError> {
        Self::with_options(size, DEFAULT_TREE_DENSITY, None)
    }

    /// Create a grid with an explicit tree density and an optional RNG seed.
    ///
    /// Passing `Some(seed)` makes the initial configuration fully
    /// reproducible; `None` seeds from system entropy.
    ///
    /// # Errors
    /// Returns [`SimError::InvalidSize`] if `size` is zero.
    pub fn with_options(size: usize, density: f64, seed: Option<u64>) -> Result<Self, SimError> {
        if size == 0 {
            return Err(SimError::InvalidSize(size));
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut current: Vec<Cell> = (0..size * size)
            .map(|_| {
                if rng.random::<f64>() < density {
                    Cell::Tree
                } else {
                    Cell::Empty
                }
            })
            .collect();

        // Single ignition point at the integer center, regardless of the draw
        let center = size / 2;
        current[center * size + center] = Cell::Fire;

        debug!("initialized {size}x{size} grid with tree density {density}");

        Ok(GridState {
            size,
            current,
            scratch: vec![Cell::Empty; size * size],
        })
    }

    /// Grid side length in cells.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Read-only view of the current generation, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.current
    }

    /// Cell at row `r`, column `c` of the current generation.
    ///
    /// # Panics
    /// Panics if `r` or `c` is out of bounds.
    #[must_use]
    pub fn cell(&self, r: usize, c: usize) -> Cell {
        assert!(
            r < self.size && c < self.size,
            "cell coordinates out of bounds"
        );
        self.current[r * self.size + c]
    }

    /// Overwrite the cell at row `r`, column `c` of the current generation.
    ///
    /// Intended for staging scenarios by hand, e.g. extra ignition points.
    ///
    /// # Panics
    /// Panics if `r` or `c` is out of bounds.
    pub fn set_cell(&mut self, r: usize, c: usize, cell: Cell) {
        assert!(
            r < self.size && c < self.size,
            "cell coordinates out of bounds"
        );
        self.current[r * self.size + c] = cell;
    }

    /// Count cell populations over the current generation.
    #[must_use]
    pub fn census(&self) -> Census {
        let mut census = Census {
            empty: 0,
            trees: 0,
            burning: 0,
        };
        for cell in &self.current {
            match cell {
                Cell::Empty => census.empty += 1,
                Cell::Tree => census.trees += 1,
                Cell::Fire => census.burning += 1,
            }
        }
        census
    }

    /// Split the buffers for one step: shared `current`, exclusive `scratch`.
    pub(crate) fn split_buffers(&mut self) -> (&[Cell], &mut [Cell]) {
        (&self.current, &mut self.scratch)
    }

    /// Exchange the roles of the two buffers after a completed generation.
    ///
    /// Only safe to call once every writer for the generation has joined.
    pub(crate) fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.current, &mut self.scratch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = GridState::new(10).unwrap();
        assert_eq!(grid.size(), 10);
        assert_eq!(grid.cells().len(), 100);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(GridState::new(0), Err(SimError::InvalidSize(0))));
        assert!(matches!(
            GridState::with_options(0, 0.5, Some(1)),
            Err(SimError::InvalidSize(0))
        ));
    }

    #[test]
    fn test_center_ignition() {
        let grid = GridState::with_options(9, 0.0, Some(1)).unwrap();
        assert_eq!(grid.cell(4, 4), Cell::Fire);
        assert_eq!(grid.census().burning, 1);

        // Even side lengths keep the integer-division center
        let grid = GridState::with_options(8, 0.0, Some(1)).unwrap();
        assert_eq!(grid.cell(4, 4), Cell::Fire);
    }

    #[test]
    fn test_density_extremes() {
        let forest = GridState::with_options(8, 1.0, Some(7)).unwrap();
        let census = forest.census();
        assert_eq!(census.trees, 63);
        assert_eq!(census.burning, 1);
        assert_eq!(census.empty, 0);

        let barren = GridState::with_options(8, 0.0, Some(7)).unwrap();
        let census = barren.census();
        assert_eq!(census.empty, 63);
        assert_eq!(census.burning, 1);
        assert_eq!(census.trees, 0);
    }

    #[test]
    fn test_same_seed_reproduces_grid() {
        let a = GridState::with_options(32, DEFAULT_TREE_DENSITY, Some(42)).unwrap();
        let b = GridState::with_options(32, DEFAULT_TREE_DENSITY, Some(42)).unwrap();
        assert_eq!(a.cells(), b.cells());
    }

    #[test]
    fn test_set_cell_roundtrip() {
        let mut grid = GridState::with_options(5, 0.0, Some(0)).unwrap();
        grid.set_cell(1, 3, Cell::Tree);
        assert_eq!(grid.cell(1, 3), Cell::Tree);
        assert!(!grid.cell(1, 3).is_burning());
    }

    #[test]
    fn test_census_totals() {
        let grid = GridState::with_options(20, 0.5, Some(9)).unwrap();
        let census = grid.census();
        assert_eq!(census.empty + census.trees + census.burning, 400);
        assert_eq!(census.burning, 1);
    }
}
