//! Configuration errors reported by the simulation core

/// Errors that can occur when configuring a simulation.
///
/// Both variants are fatal: they are detected before any allocation or work
/// begins, no partial state is produced, and the caller is expected to abort
/// the run rather than substitute a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// Grid side length must be at least one cell
    InvalidSize(usize),
    /// At least one worker thread is required
    InvalidThreadCount(usize),
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::InvalidSize(size) => {
                write!(f, "invalid grid size {size}: must be at least 1")
            }
            SimError::InvalidThreadCount(count) => {
                write!(f, "invalid thread count {count}: must be at least 1")
            }
        }
    }
}

impl std::error::Error for SimError {}
