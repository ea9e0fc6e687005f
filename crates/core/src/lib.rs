//! Forest-fire cellular automaton core
//!
//! A discrete forest-fire model on a square grid: cells are empty, tree, or
//! fire, and every generation applies one local transition rule to all cells
//! simultaneously. The grid is double-buffered and each step is a fork-join
//! parallel loop over disjoint row chunks, so large grids scale across cores.
//!
//! ## Model
//!
//! - Fire burns out after exactly one generation.
//! - A tree ignites iff an orthogonal neighbor was burning this generation.
//! - Empty cells stay empty.
//!
//! ## Usage
//!
//! ```
//! use forest_fire_core::{GridState, StepEngine};
//!
//! let mut grid = GridState::new(64)?;
//! let engine = StepEngine::new(4)?;
//! for _ in 0..10 {
//!     engine.step(&mut grid);
//! }
//! # Ok::<(), forest_fire_core::SimError>(())
//! ```

// Grid state and cell types
pub mod cell;
pub mod grid;

// Parallel stepping
pub mod engine;

// Configuration errors
pub mod error;

// Re-export the public surface
pub use cell::Cell;
pub use engine::StepEngine;
pub use error::SimError;
pub use grid::{Census, GridState, DEFAULT_TREE_DENSITY};
