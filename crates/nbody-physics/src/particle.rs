//! Particle layout shared by the read and write buffers

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

use crate::constants::VELOCITY_W;

/// CPU/GPU-compatible body state
///
/// Position then velocity, four floats each, 32 bytes contiguous. After a
/// step `velocity[3]` holds the magnitude of the acceleration that was applied.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Particle {
    /// xyz position, w is carried through untouched by the kernel
    pub position: [f32; 4],
    /// xyz velocity, w is the acceleration magnitude after a step
    pub velocity: [f32; 4],
}

impl Particle {
    /// Create a body at rest
    pub fn at_rest(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO)
    }

    /// Create a body with an initial velocity
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position: position.extend(0.0).to_array(),
            velocity: velocity.extend(VELOCITY_W).to_array(),
        }
    }

    #[inline(always)]
    pub fn pos(&self) -> Vec3 {
        Vec3::new(self.position[0], self.position[1], self.position[2])
    }

    #[inline(always)]
    pub fn vel(&self) -> Vec3 {
        Vec3::new(self.velocity[0], self.velocity[1], self.velocity[2])
    }

    #[inline(always)]
    pub fn velocity4(&self) -> Vec4 {
        Vec4::from_array(self.velocity)
    }

    /// Acceleration magnitude recorded by the last step
    pub fn acceleration_magnitude(&self) -> f32 {
        self.velocity[3]
    }

    /// True when every position and velocity component is finite
    pub fn is_finite(&self) -> bool {
        self.position.iter().chain(self.velocity.iter()).all(|c| c.is_finite())
    }

    /// Overwrite xyz of the position, keeping w
    #[inline(always)]
    pub fn set_pos(&mut self, pos: Vec3) {
        self.position[0] = pos.x;
        self.position[1] = pos.y;
        self.position[2] = pos.z;
    }
}
