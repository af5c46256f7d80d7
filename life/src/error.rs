// error.rs - Errors raised by the simulation library

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LifeError {
    #[error("cell buffer holds {actual} cells, expected {expected} ({width}x{height})")]
    BufferLength {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("live probability {0} is outside 0..=1")]
    InvalidProbability(f64),

    #[error("simulation is already initialized")]
    AlreadyInitialized,

    #[error("simulation has not been initialized")]
    NotInitialized,

    #[error("simulation is not running")]
    NotRunning,
}

pub type Result<T> = std::result::Result<T, LifeError>;
