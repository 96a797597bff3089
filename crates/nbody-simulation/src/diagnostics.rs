//! Whole-system measurements over a particle buffer

use glam::Vec3;
use nbody_physics::{accelerations, Particle, StepParams};
use rayon::prelude::*;

/// Summary of a particle buffer at one instant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Diagnostics {
    pub centroid: Vec3,
    /// Sum of per-body accelerations; near zero for an isolated system
    pub net_acceleration: Vec3,
    /// Largest per-body acceleration magnitude
    pub max_acceleration: f32,
    pub momentum: Vec3,
    pub kinetic_energy: f32,
}

impl Diagnostics {
    /// Measure `particles`; the acceleration terms cost a full O(N²) pass
    pub fn measure(particles: &[Particle], params: &StepParams) -> Self {
        if particles.is_empty() {
            return Self::empty();
        }

        let mass = params.particle_mass;
        let n = particles.len() as f32;

        let centroid = particles.iter().map(Particle::pos).sum::<Vec3>() / n;
        let velocity_sum: Vec3 = particles.iter().map(Particle::vel).sum();
        let speed_sqr_sum: f32 = particles.iter().map(|p| p.vel().length_squared()).sum();

        let accels = if particles.len() >= 1024 {
            par_accelerations(particles, params)
        } else {
            accelerations(particles, params)
        };
        let net_acceleration: Vec3 = accels.iter().copied().sum();
        let max_acceleration = accels.iter().map(|a| a.length()).fold(0.0, f32::max);

        Self {
            centroid,
            net_acceleration,
            max_acceleration,
            momentum: velocity_sum * mass,
            kinetic_energy: 0.5 * mass * speed_sqr_sum,
        }
    }

    fn empty() -> Self {
        Self {
            centroid: Vec3::ZERO,
            net_acceleration: Vec3::ZERO,
            max_acceleration: 0.0,
            momentum: Vec3::ZERO,
            kinetic_energy: 0.0,
        }
    }
}

fn par_accelerations(particles: &[Particle], params: &StepParams) -> Vec<Vec3> {
    particles
        .par_iter()
        .map(|p| nbody_physics::accumulate_acceleration(particles, p.pos(), params))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::cube_corners;

    #[test]
    fn test_empty() {
        let d = Diagnostics::measure(&[], &StepParams::default());
        assert_eq!(d.kinetic_energy, 0.0);
        assert_eq!(d.centroid, Vec3::ZERO);
    }

    #[test]
    fn test_cube_at_rest() {
        let particles = cube_corners(1.0);
        let d = Diagnostics::measure(&particles, &StepParams::default());

        assert_eq!(d.centroid, Vec3::ZERO);
        assert_eq!(d.momentum, Vec3::ZERO);
        assert_eq!(d.kinetic_energy, 0.0);
        assert!(d.max_acceleration > 0.0);
        assert!(d.net_acceleration.length() <= d.max_acceleration * 8.0 * 1.0e-5);
    }

    #[test]
    fn test_kinetic_energy_and_momentum() {
        let params = StepParams::default();
        let particles = vec![
            Particle::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)),
            Particle::new(Vec3::ONE, Vec3::new(-1.0, 2.0, 0.0)),
        ];
        let d = Diagnostics::measure(&particles, &params);

        assert_eq!(d.momentum, Vec3::new(0.0, 2.0, 0.0) * params.particle_mass);
        assert_eq!(d.kinetic_energy, 0.5 * params.particle_mass * 6.0);
        assert_eq!(d.centroid, Vec3::splat(0.5));
    }
}
