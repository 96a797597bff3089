//! Force accumulation and integration over a range of particles
//!
//! Every output particle depends only on the full read buffer, so disjoint
//! output ranges can be computed on different threads without coordination.
//! `pos` and the step parameters are loop-invariant in the all-pairs loop and
//! are hoisted out of it.

use glam::Vec3;

use crate::constants::UNROLL;
use crate::forces::{body_body_interaction_with, fast_inv_sqrt};
use crate::particle::Particle;
use crate::params::StepParams;

/// Net acceleration of a body at `pos` from every body in `read`
///
/// Bodies are visited in index order, in groups of [`UNROLL`] with the
/// remainder handled after the groups. The body at `pos` itself contributes
/// zero.
#[inline]
pub fn accumulate_acceleration(read: &[Particle], pos: Vec3, params: &StepParams) -> Vec3 {
    let mut accel = Vec3::ZERO;

    let groups = read.chunks_exact(UNROLL);
    let tail = groups.remainder();
    for group in groups {
        for body in group {
            body_body_interaction_with(params, &mut accel, body.pos(), pos);
        }
    }
    for body in tail {
        body_body_interaction_with(params, &mut accel, body.pos(), pos);
    }

    accel
}

/// Net acceleration of every body in `read`
pub fn accelerations(read: &[Particle], params: &StepParams) -> Vec<Vec3> {
    read.iter()
        .map(|p| accumulate_acceleration(read, p.pos(), params))
        .collect()
}

/// Integrate one body given its net acceleration
///
/// Only the xyz of `out.position` is written; `out.velocity` is written in full.
#[inline(always)]
fn integrate(current: &Particle, accel: Vec3, params: &StepParams, out: &mut Particle) {
    let dt = params.time_step;

    let mut vel = current.velocity4();
    let v = vel.truncate() + accel * dt;

    // NOTE: w receives the magnitude of the acceleration just applied, not the
    // velocity magnitude. Renderers downstream read it as such.
    vel = v.extend(1.0 / fast_inv_sqrt(accel.length_squared()));

    let pos = current.pos() + v * dt;

    out.set_pos(pos);
    out.velocity = vel.to_array();
}

/// Step the particles `[particle_start, particle_start + out.len())`
///
/// `out[k]` receives the new state of `read[particle_start + k]`.
pub fn process_range(
    read: &[Particle],
    particle_start: usize,
    out: &mut [Particle],
    params: &StepParams,
) {
    debug_assert!(
        particle_start + out.len() <= read.len(),
        "range {}..{} exceeds {} particles",
        particle_start,
        particle_start + out.len(),
        read.len()
    );

    let current = &read[particle_start..particle_start + out.len()];
    for (slot, particle) in out.iter_mut().zip(current) {
        let accel = accumulate_acceleration(read, particle.pos(), params);
        integrate(particle, accel, params, slot);
    }
}

/// Step the particles `[particle_start, particle_start + particle_count)`
/// of `read` into the same indices of `write`, with the default constants
///
/// Indices of `write` outside the range are left untouched.
pub fn process_particles(
    read: &[Particle],
    particle_start: usize,
    particle_count: usize,
    write: &mut [Particle],
) {
    process_particles_with(&StepParams::DEFAULT, read, particle_start, particle_count, write);
}

/// Same as [`process_particles`] with explicit parameters
pub fn process_particles_with(
    params: &StepParams,
    read: &[Particle],
    particle_start: usize,
    particle_count: usize,
    write: &mut [Particle],
) {
    debug_assert_eq!(read.len(), write.len(), "read/write buffers differ in length");

    let end = particle_start + particle_count;
    process_range(read, particle_start, &mut write[particle_start..end], params);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TIME_STEP;
    use approx::assert_relative_eq;

    fn line(n: usize) -> Vec<Particle> {
        (0..n)
            .map(|i| {
                let t = i as f32;
                Particle::at_rest(Vec3::new(t * 0.5, (t * 0.7).sin(), (t * 1.3).cos()))
            })
            .collect()
    }

    fn plain_loop(read: &[Particle], pos: Vec3) -> Vec3 {
        let mut accel = Vec3::ZERO;
        for body in read {
            crate::forces::body_body_interaction(&mut accel, body.pos(), pos);
        }
        accel
    }

    #[test]
    fn test_grouped_loop_visits_every_body_once() {
        for n in [1, 7, 8, 9, 13, 16, 23] {
            let read = line(n);
            for p in &read {
                let grouped = accumulate_acceleration(&read, p.pos(), &StepParams::DEFAULT);
                assert_eq!(grouped, plain_loop(&read, p.pos()), "n={n}");
            }
        }
    }

    #[test]
    fn test_single_particle_keeps_drifting() {
        let read = vec![Particle::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 0.0, -2.0))];
        let mut write = vec![Particle::default()];

        process_particles(&read, 0, 1, &mut write);

        let out = write[0];
        assert_eq!(out.vel(), Vec3::new(1.0, 0.0, -2.0));
        assert_relative_eq!(out.pos().x, 1.0 + TIME_STEP, max_relative = 1.0e-6);
        assert_relative_eq!(out.pos().z, 3.0 - 2.0 * TIME_STEP, max_relative = 1.0e-6);
        let w = out.acceleration_magnitude();
        assert!(w.is_finite() && w >= 0.0 && w < 1.0e-15);
    }

    #[test]
    fn test_untouched_outside_range() {
        let read = line(10);
        let sentinel = Particle {
            position: [9.0; 4],
            velocity: [9.0; 4],
        };
        let mut write = vec![sentinel; 10];

        process_particles(&read, 3, 4, &mut write);

        for (i, p) in write.iter().enumerate() {
            if (3..7).contains(&i) {
                assert_ne!(*p, sentinel);
            } else {
                assert_eq!(*p, sentinel);
            }
        }
    }

    #[test]
    fn test_position_w_left_in_place() {
        let read = line(4);
        let mut write = vec![Particle::default(); 4];
        for p in &mut write {
            p.position[3] = -5.0;
        }

        process_particles(&read, 0, 4, &mut write);

        assert!(write.iter().all(|p| p.position[3] == -5.0));
    }

    #[test]
    fn test_velocity_w_is_acceleration_magnitude() {
        let read = line(12);
        let mut write = vec![Particle::default(); 12];
        process_particles(&read, 0, 12, &mut write);

        let accels = accelerations(&read, &StepParams::DEFAULT);
        for (p, a) in write.iter().zip(&accels) {
            assert_relative_eq!(p.acceleration_magnitude(), a.length(), max_relative = 2.0e-3);
            // Started at rest, so the new velocity is accel * dt
            assert_relative_eq!(p.vel().length(), a.length() * TIME_STEP, max_relative = 1.0e-5);
        }
    }

    #[test]
    fn test_custom_params_scale_with_mass() {
        let read = line(5);
        let heavy = StepParams {
            particle_mass: 2.0 * StepParams::DEFAULT.particle_mass,
            ..StepParams::DEFAULT
        };

        let light = accelerations(&read, &StepParams::DEFAULT);
        let doubled = accelerations(&read, &heavy);
        for (l, d) in light.iter().zip(&doubled) {
            assert_relative_eq!(d.length(), 2.0 * l.length(), max_relative = 1.0e-5);
        }
    }
}
