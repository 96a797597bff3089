//! Double-buffered N-body simulation manager
//!
//! NOTE: The kernel reads `front` and writes `back`; the two are swapped once
//! every chunk of the step has finished. The parallel iterator returning is the
//! barrier, so nothing reads `back` while it is being written.

use nbody_physics::{process_particles_with, process_range, Particle, StepParams};
use rayon::prelude::*;

use crate::diagnostics::Diagnostics;
use crate::error::{Result, SimulationError};
use crate::partition::{check_buffers, default_chunk_size};

/// CPU N-body simulation owning both particle buffers
pub struct NBodySimulation {
    // State at t, read by the kernel
    front: Vec<Particle>,
    // State at t + dt, written by the kernel
    back: Vec<Particle>,

    params: StepParams,
    chunk_size: usize,
    step_count: u64,
}

impl NBodySimulation {
    /// Take ownership of `particles` as the initial state
    pub fn new(particles: Vec<Particle>) -> Result<Self> {
        let back = particles.clone();
        Self::from_buffers(particles, back)
    }

    /// Use caller-provided buffers; `read` holds the initial state
    pub fn from_buffers(read: Vec<Particle>, write: Vec<Particle>) -> Result<Self> {
        check_buffers(&read, &write)?;
        if let Some(index) = read.iter().position(|p| !p.is_finite()) {
            return Err(SimulationError::NonFinite { index });
        }

        let chunk_size = default_chunk_size(read.len(), rayon::current_num_threads());
        log::info!(
            "Initializing NBodySimulation: {} particles, chunk size {}",
            read.len(),
            chunk_size
        );

        Ok(Self {
            front: read,
            back: write,
            params: StepParams::default(),
            chunk_size,
            step_count: 0,
        })
    }

    pub fn with_params(mut self, params: StepParams) -> Self {
        log::debug!("step params set to {params:?}");
        self.params = params;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(SimulationError::ZeroChunkSize);
        }
        log::debug!("chunk size set to {chunk_size}");
        self.chunk_size = chunk_size;
        Ok(self)
    }

    /// Advance one step, spreading chunks of the write buffer over the rayon pool
    pub fn step(&mut self) {
        let read = &self.front;
        let params = &self.params;
        let chunk_size = self.chunk_size;

        self.back
            .par_chunks_mut(chunk_size)
            .enumerate()
            .for_each(|(chunk, out)| process_range(read, chunk * chunk_size, out, params));

        self.finish_step();
    }

    /// Advance one step with a single kernel call on the current thread
    pub fn step_serial(&mut self) {
        let total = self.front.len();
        process_particles_with(&self.params, &self.front, 0, total, &mut self.back);
        self.finish_step();
    }

    pub fn run(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }

    fn finish_step(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
        self.step_count += 1;
        log::trace!("step {} complete", self.step_count);
    }

    /// Current state
    pub fn particles(&self) -> &[Particle] {
        &self.front
    }

    /// Current state as raw bytes, e.g. for a GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.front)
    }

    pub fn particle_count(&self) -> usize {
        self.front.len()
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn params(&self) -> &StepParams {
        &self.params
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics::measure(&self.front, &self.params)
    }

    /// Give both buffers back, current state first
    pub fn into_buffers(self) -> (Vec<Particle>, Vec<Particle>) {
        (self.front, self.back)
    }
}
