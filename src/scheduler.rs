//! The per-frame update pipeline.
//!
//! Each frame, the particle index range is partitioned into a fixed number of
//! contiguous chunks (`count / workers` indices each, the last chunk absorbing
//! the remainder) and every chunk runs the same kernel on rayon's worker
//! pool: write the particle's normalized device coordinate, reflect at the
//! bounds, accumulate the pointer and anchor pulls, integrate. Chunks are
//! disjoint and index-aligned, so no two workers ever touch the same particle
//! or the same output slot; anchors are read-only for the whole frame. The
//! call returns only after every chunk has finished.
//!
//! Because the kernel is pure per particle, the partition width changes
//! nothing but wall-clock time: one worker and ten produce bit-identical
//! buffers.

use crate::forces::{self, Bounds, ANCHOR_PULL, POINTER_PULL};
use crate::particle::Particle;
use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use rayon::prelude::*;

/// Default number of chunks a frame is split into.
pub const DEFAULT_WORKER_COUNT: usize = 5;

/// One particle's slot in the output coordinate buffer.
///
/// Plain-old-data so the whole buffer can be handed to a renderer as a flat
/// `&[f32]` (two floats per particle) without copying.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderCoord {
    /// Normalized device x: `-1 + 2 * position.x / canvas_width`.
    pub x: f32,
    /// Normalized device y: `-1 + 2 * position.y / canvas_height`.
    pub y: f32,
}

/// Per-frame parameters for [`Simulation::step`](crate::Simulation::step).
///
/// # Example
///
/// ```
/// use whorl::{FrameParams, Vec2};
///
/// let params = FrameParams::new(1280.0, 720.0)
///     .with_particle_size(4.0)
///     .with_force_center(Vec2::new(640.0, 360.0))
///     .with_squared(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    /// Canvas width in pixels. Must be positive.
    pub canvas_width: f32,
    /// Canvas height in pixels. Must be positive.
    pub canvas_height: f32,
    /// Sprite size in pixels; half of it is the bounce leading edge.
    pub particle_size: f32,
    /// Point every particle is pulled toward this frame, if any.
    pub force_center: Option<Vec2>,
    /// Seconds since the previous frame. Carried for hosts and future time
    /// scaling; the pull strengths are fixed constants and do not consume it.
    pub delta_time: f32,
    /// Reflect at the horizontal bounds.
    pub bounce_x: bool,
    /// Reflect at the vertical bounds.
    pub bounce_y: bool,
    /// Inset the horizontal bounds to a centered square viewport.
    pub squared: bool,
}

impl FrameParams {
    /// Frame parameters for a canvas, with bouncing on and no pointer force.
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            particle_size: 2.0,
            force_center: None,
            delta_time: 1.0 / 60.0,
            bounce_x: true,
            bounce_y: true,
            squared: false,
        }
    }

    /// Set the sprite size used for the bounce leading edge.
    pub fn with_particle_size(mut self, size: f32) -> Self {
        self.particle_size = size;
        self
    }

    /// Pull every particle toward `center` this frame.
    pub fn with_force_center(mut self, center: Vec2) -> Self {
        self.force_center = Some(center);
        self
    }

    /// Set the frame's delta time in seconds.
    pub fn with_delta_time(mut self, delta_time: f32) -> Self {
        self.delta_time = delta_time;
        self
    }

    /// Enable or disable reflection per axis.
    pub fn with_bounce(mut self, bounce_x: bool, bounce_y: bool) -> Self {
        self.bounce_x = bounce_x;
        self.bounce_y = bounce_y;
        self
    }

    /// Enable or disable the centered-square viewport inset.
    pub fn with_squared(mut self, squared: bool) -> Self {
        self.squared = squared;
        self
    }
}

/// Run one frame over the whole population.
///
/// `particles` and `coords` must be the same length; the `Simulation` owns
/// both and guarantees it.
pub(crate) fn run_frame(
    particles: &mut [Particle],
    coords: &mut [RenderCoord],
    anchors: &[Vec2],
    params: &FrameParams,
    workers: usize,
) {
    debug_assert_eq!(particles.len(), coords.len());
    if particles.is_empty() {
        return;
    }

    let bounds = Bounds::of_canvas(params.canvas_width, params.canvas_height, params.squared);
    partition(particles, coords, workers)
        .into_par_iter()
        .for_each(|(chunk, out)| step_chunk(chunk, out, anchors, params, &bounds));
}

/// Split particles and output slots into `workers` contiguous chunk pairs.
///
/// Chunk length is `len / workers` (integer division); the final chunk
/// absorbs the remainder. Both slices are split at identical offsets, which
/// is what keeps the parallel writes disjoint.
fn partition<'a>(
    mut particles: &'a mut [Particle],
    mut coords: &'a mut [RenderCoord],
    workers: usize,
) -> Vec<(&'a mut [Particle], &'a mut [RenderCoord])> {
    let workers = workers.max(1);
    let chunk_len = particles.len() / workers;

    let mut chunks = Vec::with_capacity(workers);
    for _ in 1..workers {
        let (chunk, rest) = std::mem::take(&mut particles).split_at_mut(chunk_len);
        let (out, rest_out) = std::mem::take(&mut coords).split_at_mut(chunk_len);
        particles = rest;
        coords = rest_out;
        chunks.push((chunk, out));
    }
    chunks.push((particles, coords));
    chunks
}

/// The per-chunk frame kernel.
fn step_chunk(
    particles: &mut [Particle],
    coords: &mut [RenderCoord],
    anchors: &[Vec2],
    params: &FrameParams,
    bounds: &Bounds,
) {
    let half_size = params.particle_size / 2.0;

    for (particle, coord) in particles.iter_mut().zip(coords.iter_mut()) {
        // Halted particles keep their last written coordinate and burn no
        // cycles until something re-seeds their velocity.
        if particle.is_stationary() {
            continue;
        }

        coord.x = -1.0 + 2.0 * particle.position.x / params.canvas_width;
        coord.y = -1.0 + 2.0 * particle.position.y / params.canvas_height;

        forces::bounce(particle, half_size, bounds, params.bounce_x, params.bounce_y);

        if let Some(center) = params.force_center {
            particle.add_force(forces::pull_toward(particle.position, center, POINTER_PULL));
        }
        for anchor in anchors {
            particle.add_force(forces::pull_toward(particle.position, *anchor, ANCHOR_PULL));
        }

        particle.step();
    }
}
