//! Errors reported at the driver boundary

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("simulation needs at least one particle")]
    Empty,

    #[error("read buffer holds {read} particles but write buffer holds {write}")]
    LengthMismatch { read: usize, write: usize },

    #[error("range {start}..{end} exceeds particle count {total}")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        total: usize,
    },

    #[error("chunk size must be non-zero")]
    ZeroChunkSize,

    #[error("particle {index} has a non-finite position or velocity")]
    NonFinite { index: usize },
}

pub type Result<T> = std::result::Result<T, SimulationError>;
