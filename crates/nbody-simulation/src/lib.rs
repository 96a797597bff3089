//! # N-Body Simulation Driver
//!
//! Owns the read/write particle buffers, splits each step across worker
//! threads, swaps buffers between steps and reports whole-system diagnostics.

pub mod diagnostics;
pub mod error;
pub mod partition;
pub mod scenarios;
pub mod simulation;

pub use diagnostics::*;
pub use error::*;
pub use partition::*;
pub use simulation::*;
