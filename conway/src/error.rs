// error.rs - Error type for the simulation core

use thiserror::Error;

/// Everything the core can reject. Stepping and toggling never fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LifeError {
    /// A grid needs at least one row and one column, and rows * cols
    /// must not overflow
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Seeding probability outside [0, 1]
    #[error("live probability must be within 0.0..=1.0, got {0}")]
    InvalidProbability(f64),

    /// Zero tick interval
    #[error("tick interval must be greater than zero")]
    InvalidInterval,
}

pub type Result<T> = std::result::Result<T, LifeError>;
