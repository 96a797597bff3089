//! Initial particle configurations

use glam::Vec3;
use nbody_physics::Particle;
use rand::Rng;

/// `n` bodies at rest spread evenly over a sphere (Fibonacci lattice)
pub fn sphere_shell(n: usize, radius: f32) -> Vec<Particle> {
    let golden_angle = std::f32::consts::PI * (3.0 - 5f32.sqrt());
    (0..n)
        .map(|i| {
            let z = 1.0 - (2.0 * i as f32 + 1.0) / n as f32;
            let ring = (1.0 - z * z).max(0.0).sqrt();
            let theta = golden_angle * i as f32;
            Particle::at_rest(Vec3::new(ring * theta.cos(), ring * theta.sin(), z) * radius)
        })
        .collect()
}

/// Eight bodies at rest on the corners of a cube centred on the origin
pub fn cube_corners(half_extent: f32) -> Vec<Particle> {
    let signs = [-1.0, 1.0];
    let mut particles = Vec::with_capacity(8);
    for x in signs {
        for y in signs {
            for z in signs {
                particles.push(Particle::at_rest(Vec3::new(x, y, z) * half_extent));
            }
        }
    }
    particles
}

/// `n` bodies at rest, uniformly distributed inside a ball
pub fn random_ball<R: Rng + ?Sized>(n: usize, radius: f32, rng: &mut R) -> Vec<Particle> {
    (0..n)
        .map(|_| {
            let theta = rng.random::<f32>() * std::f32::consts::TAU;
            let cos_phi = rng.random::<f32>() * 2.0 - 1.0;
            let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();
            // Cube root keeps the density uniform in volume
            let r = rng.random::<f32>().powf(1.0 / 3.0) * radius;

            let pos = Vec3::new(sin_phi * theta.cos(), sin_phi * theta.sin(), cos_phi) * r;
            Particle::at_rest(pos)
        })
        .collect()
}
