//! Fixed constants for the brute-force N-body step
//!
//! Every body shares the same mass and the gravitational constant is folded
//! into it, so the kernel only ever multiplies by `PARTICLE_MASS`.

/// Integration time step
pub const TIME_STEP: f32 = 0.1;

/// Plummer softening squared (0.00125²)
/// Keeps the interaction finite when two bodies coincide
pub const SOFTENING_SQUARED: f32 = 0.000_001_562_5;

/// Uniform body mass with G folded in
pub const PARTICLE_MASS: f32 = 66.73;

/// Bit-level seed for the fast inverse square root
pub const INV_SQRT_MAGIC: u32 = 0x5f37_59df;

/// Width of the inner all-pairs loop grouping
pub const UNROLL: usize = 8;

/// Initial value of the velocity `w` component
pub const VELOCITY_W: f32 = 1.0;
