//! # N-Body Physics Kernel
//!
//! Brute-force O(N²) gravitational step: pairwise softened accelerations from
//! every body, then velocity and position integration with a fixed time step.
//! The kernel reads one particle buffer and writes another, so disjoint output
//! ranges can be stepped in parallel.

pub mod constants;
pub mod forces;
pub mod kernel;
pub mod params;
pub mod particle;

pub use constants::*;
pub use forces::*;
pub use kernel::*;
pub use params::*;
pub use particle::*;
