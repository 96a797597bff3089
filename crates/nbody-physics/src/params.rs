//! Step parameters, laid out so they can be uploaded as a uniform

use bytemuck::{Pod, Zeroable};

use crate::constants::{PARTICLE_MASS, SOFTENING_SQUARED, TIME_STEP};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct StepParams {
    pub time_step: f32,
    pub softening_squared: f32,
    pub particle_mass: f32,
    pub _padding: f32,
}

impl StepParams {
    pub const DEFAULT: Self = Self {
        time_step: TIME_STEP,
        softening_squared: SOFTENING_SQUARED,
        particle_mass: PARTICLE_MASS,
        _padding: 0.0,
    };
}

impl Default for StepParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}
