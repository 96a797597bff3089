//! Splitting a step into disjoint particle ranges

use std::ops::Range;

use nbody_physics::{process_range, Particle, StepParams};

use crate::error::{Result, SimulationError};

/// Smallest chunk handed to a worker; below this the all-pairs loop is too
/// short to amortise the scheduling cost.
pub const MIN_CHUNK_SIZE: usize = 64;

/// Chunk size that gives each worker a few chunks to balance load
pub fn default_chunk_size(total: usize, workers: usize) -> usize {
    let target_chunks = workers.max(1) * 4;
    total.div_ceil(target_chunks).max(MIN_CHUNK_SIZE.min(total)).max(1)
}

/// Disjoint half-open ranges of at most `chunk_size` covering `0..total`
pub fn ranges(total: usize, chunk_size: usize) -> Result<Vec<Range<usize>>> {
    if chunk_size == 0 {
        return Err(SimulationError::ZeroChunkSize);
    }
    Ok((0..total)
        .step_by(chunk_size)
        .map(|start| start..(start + chunk_size).min(total))
        .collect())
}

/// Validate that `read` and `write` may be stepped together
pub fn check_buffers(read: &[Particle], write: &[Particle]) -> Result<()> {
    if read.is_empty() {
        return Err(SimulationError::Empty);
    }
    if read.len() != write.len() {
        return Err(SimulationError::LengthMismatch {
            read: read.len(),
            write: write.len(),
        });
    }
    Ok(())
}

/// Step `range` of `read` into the same indices of `write`, checking bounds
pub fn step_range(
    read: &[Particle],
    range: Range<usize>,
    write: &mut [Particle],
    params: &StepParams,
) -> Result<()> {
    check_buffers(read, write)?;
    if range.start > range.end || range.end > read.len() {
        return Err(SimulationError::RangeOutOfBounds {
            start: range.start,
            end: range.end,
            total: read.len(),
        });
    }

    let start = range.start;
    process_range(read, start, &mut write[range], params);
    Ok(())
}
