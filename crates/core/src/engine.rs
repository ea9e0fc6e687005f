//! Parallel step engine
//!
//! One step is a fork-join parallel loop: the row range is partitioned into
//! one contiguous chunk per worker, every chunk applies the transition rule
//! against the shared `current` buffer while writing its own exclusive slice
//! of `scratch`, and the buffers swap roles once all chunks have joined.
//!
//! ## Transition rule
//!
//! | current | condition                  | next  |
//! |---------|----------------------------|-------|
//! | Fire    | always                     | Empty |
//! | Tree    | burning orthogonal neighbor| Fire  |
//! | Tree    | otherwise                  | Tree  |
//! | Empty   | always                     | Empty |
//!
//! The rule reads only the pre-step generation, so the update is simultaneous:
//! a cell ignited this step can never ignite another cell in the same step.

use std::ops::Range;

use rayon::prelude::*;
use tracing::debug;

use crate::cell::Cell;
use crate::error::SimError;
use crate::grid::GridState;

/// Applies the transition rule to a [`GridState`] with a fixed worker count.
///
/// The worker count is whole-run configuration: it is validated once at
/// construction and reused for every step.
#[derive(Debug, Clone)]
pub struct StepEngine {
    num_threads: usize,
}

impl StepEngine {
    /// Create an engine that dispatches `num_threads` row chunks per step.
    ///
    /// Counts larger than the grid side are permitted; the surplus chunks
    /// cover zero rows and are no-ops.
    ///
    /// # Errors
    /// Returns [`SimError::InvalidThreadCount`] if `num_threads` is zero.
    pub fn new(num_threads: usize) -> Result<Self, SimError> {
        if num_threads == 0 {
            return Err(SimError::InvalidThreadCount(num_threads));
        }
        debug!("step engine dispatching {num_threads} row chunks per step");
        Ok(StepEngine { num_threads })
    }

    /// Worker count this engine dispatches per step.
    #[must_use]
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Advance the grid by exactly one generation.
    ///
    /// Every cell's next state is computed from the pre-step generation; the
    /// new generation becomes visible through [`GridState::cells`] when this
    /// returns. The scratch buffer is fully overwritten before the swap, so
    /// its stale contents are never read.
    pub fn step(&self, grid: &mut GridState) {
        let size = grid.size();
        let chunks = partition_rows(size, self.num_threads);
        let (current, scratch) = grid.split_buffers();

        // Carve scratch into one exclusive sub-slice per chunk so every task
        // owns a disjoint write region.
        let mut tasks = Vec::with_capacity(chunks.len());
        let mut rest = scratch;
        for rows in chunks {
            let (out, tail) = rest.split_at_mut(rows.len() * size);
            rest = tail;
            tasks.push((rows, out));
        }

        tasks
            .into_par_iter()
            .for_each(|(rows, out)| update_rows(current, out, rows, size));

        grid.swap_buffers();
    }
}

/// Partition the row range `[0, size)` into `num_threads` contiguous chunks.
///
/// Chunk `i` covers `size / num_threads` rows starting at
/// `i * (size / num_threads)`; the last chunk absorbs the remainder so the
/// union is exactly `[0, size)` with no gaps and no overlaps. When
/// `num_threads > size` the leading chunks are empty.
fn partition_rows(size: usize, num_threads: usize) -> Vec<Range<usize>> {
    let rows_per_chunk = size / num_threads;
    (0..num_threads)
        .map(|i| {
            let start = i * rows_per_chunk;
            let end = if i == num_threads - 1 {
                size
            } else {
                start + rows_per_chunk
            };
            start..end
        })
        .collect()
}

/// Apply the transition rule to every cell in `rows`, writing into `out`.
///
/// `out` is the scratch sub-slice for exactly those rows: its offset zero
/// corresponds to grid offset `rows.start * size`.
fn update_rows(current: &[Cell], out: &mut [Cell], rows: Range<usize>, size: usize) {
    let base = rows.start * size;
    for r in rows {
        for c in 0..size {
            let idx = r * size + c;
            out[idx - base] = match current[idx] {
                Cell::Tree if has_burning_neighbor(current, size, r, c) => Cell::Fire,
                Cell::Tree => Cell::Tree,
                // Fire burns out; empty stays empty
                Cell::Fire | Cell::Empty => Cell::Empty,
            };
        }
    }
}

/// True iff at least one in-bounds orthogonal neighbor of `(r, c)` is on
/// fire. Diagonals never count; neighbors outside the grid are absent, not
/// burning.
fn has_burning_neighbor(current: &[Cell], size: usize, r: usize, c: usize) -> bool {
    (r > 0 && current[(r - 1) * size + c] == Cell::Fire)
        || (r + 1 < size && current[(r + 1) * size + c] == Cell::Fire)
        || (c > 0 && current[r * size + c - 1] == Cell::Fire)
        || (c + 1 < size && current[r * size + c + 1] == Cell::Fire)
}
