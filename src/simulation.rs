//! Simulation state and population management.
//!
//! A [`Simulation`] owns everything the kernel mutates: the particle
//! population, the anchor set, and the output coordinate buffer. Management
//! calls (create, respawn, explode, ...) run outside the per-frame hot path;
//! [`Simulation::step`] is the hot path. The `&mut self` receivers make the
//! one concurrency rule of this crate structural: population management can
//! never overlap an in-flight frame.

use crate::anchor;
use crate::error::SimulationError;
use crate::particle::{Particle, DEFAULT_DRAG};
use crate::scheduler::{self, FrameParams, RenderCoord, DEFAULT_WORKER_COUNT};
use crate::spawn;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// An owned 2D particle simulation.
///
/// Configure with the `with_*` methods, populate with
/// [`create_particles`](Self::create_particles), then call
/// [`step`](Self::step) once per frame and hand the returned buffer to your
/// renderer.
///
/// # Example
///
/// ```
/// use whorl::{FrameParams, Simulation, Vec2};
///
/// let mut sim = Simulation::new().with_seed(7);
/// sim.create_particles(10_000, Vec2::new(640.0, 360.0), 200.0, 0.01)?;
/// sim.create_anchors(3, 1280.0, 720.0)?;
///
/// let params = FrameParams::new(1280.0, 720.0).with_particle_size(2.0);
/// let coords = sim.step(&params);
/// assert_eq!(coords.len(), 2 * 10_000);
/// # Ok::<(), whorl::SimulationError>(())
/// ```
pub struct Simulation {
    particles: Vec<Particle>,
    anchors: Vec<Vec2>,
    coords: Vec<RenderCoord>,
    rng: SmallRng,
    drag: f32,
    workers: usize,
}

impl Simulation {
    /// Create an empty simulation with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            anchors: Vec::new(),
            coords: Vec::new(),
            rng: SmallRng::from_entropy(),
            drag: DEFAULT_DRAG,
            workers: DEFAULT_WORKER_COUNT,
        }
    }

    /// Seed the spawn RNG for reproducible populations.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Set how many chunks each frame is split into (minimum 1).
    pub fn with_worker_count(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Set the drag divisor applied to particles spawned from now on.
    pub fn with_drag(mut self, drag: f32) -> Self {
        self.drag = drag;
        self
    }

    // ========== Population management ==========

    /// Replace the population with `count` particles spawned in a disk.
    ///
    /// Any prior population (and its coordinate buffer) is dropped first.
    /// Positions are sampled area-uniformly within `radius` of `center`, and
    /// each particle's velocity is seeded with the radial kick
    /// `(position - center) * force_strength`: outward for positive
    /// strengths, an implosion for negative ones.
    pub fn create_particles(
        &mut self,
        count: usize,
        center: Vec2,
        radius: f32,
        force_strength: f32,
    ) -> Result<(), SimulationError> {
        if count == 0 {
            return Err(SimulationError::EmptyPopulation);
        }
        check_radius(radius)?;

        self.delete_particles();
        self.particles.reserve_exact(count);
        for _ in 0..count {
            let position = spawn::disk_position(&mut self.rng, center, radius);
            let mut particle = Particle::new(position, self.drag);
            particle.add_force(spawn::radial_kick(position, center, force_strength));
            self.particles.push(particle);
        }
        self.coords = vec![RenderCoord::default(); count];

        log::info!(
            "created {} particles in a disk of radius {} around ({}, {})",
            count,
            radius,
            center.x,
            center.y
        );
        Ok(())
    }

    /// Drop the population and its coordinate buffer. No-op when empty.
    pub fn delete_particles(&mut self) {
        self.particles = Vec::new();
        self.coords = Vec::new();
    }

    /// Re-seed every particle of the existing population in a disk.
    ///
    /// Keeps the population count and the coordinate buffer; each particle is
    /// repositioned with the same disk sampling as
    /// [`create_particles`](Self::create_particles), its velocity zeroed and
    /// re-seeded with the same radial kick.
    pub fn respawn(
        &mut self,
        center: Vec2,
        radius: f32,
        force_strength: f32,
    ) -> Result<(), SimulationError> {
        check_radius(radius)?;

        for particle in &mut self.particles {
            particle.position = spawn::disk_position(&mut self.rng, center, radius);
            particle.velocity = spawn::radial_kick(particle.position, center, force_strength);
        }

        log::debug!("respawned {} particles", self.particles.len());
        Ok(())
    }

    /// Re-seed the population in an annulus, leaving the middle empty.
    ///
    /// Positions are sampled area-uniformly in the band between
    /// `radius - width` and `radius`; velocities become a constant-magnitude
    /// radial push of `force_strength` away from `center`.
    pub fn respawn_ring(
        &mut self,
        center: Vec2,
        radius: f32,
        width: f32,
        force_strength: f32,
    ) -> Result<(), SimulationError> {
        check_radius(radius)?;
        if !width.is_finite() || width < 0.0 || width > radius {
            return Err(SimulationError::InvalidBandWidth { radius, width });
        }

        for particle in &mut self.particles {
            particle.position = spawn::annulus_position(&mut self.rng, center, radius, width);
            particle.velocity =
                spawn::unit_radial_kick(&mut self.rng, particle.position, center, force_strength);
        }

        log::debug!(
            "respawned {} particles in a ring of width {}",
            self.particles.len(),
            width
        );
        Ok(())
    }

    /// Halt every particle in place.
    ///
    /// Halted particles are skipped by [`step`](Self::step), so frame forces
    /// never reach them; only an explosion or a respawn sets them moving
    /// again. Their output coordinates freeze at the last written values.
    pub fn stop(&mut self) {
        for particle in &mut self.particles {
            particle.velocity = Vec2::ZERO;
        }
    }

    /// Kick every particle directly away from `center` with magnitude `force`.
    ///
    /// A particle sitting within the distance epsilon of the center has no
    /// radial direction and is left untouched.
    pub fn explode(&mut self, center: Vec2, force: f32) {
        for particle in &mut self.particles {
            let offset = particle.position - center;
            let distance = offset.length();
            if distance < crate::forces::DISTANCE_EPSILON {
                continue;
            }
            particle.add_force(offset * (force / distance));
        }
        log::debug!("explosion of force {} at ({}, {})", force, center.x, center.y);
    }

    // ========== Anchor management ==========

    /// Replace the anchor set with `count` anchors laid out for a canvas.
    ///
    /// One anchor sits at the canvas center; larger sets sit evenly on a
    /// circle of radius `canvas_height / 4` around it.
    pub fn create_anchors(
        &mut self,
        count: usize,
        canvas_width: f32,
        canvas_height: f32,
    ) -> Result<(), SimulationError> {
        if count == 0 {
            return Err(SimulationError::EmptyAnchorSet);
        }
        self.anchors = anchor::ring(count, canvas_width, canvas_height);
        log::info!("placed {} anchors", count);
        Ok(())
    }

    /// Drop the anchor set. No-op when empty.
    pub fn delete_anchors(&mut self) {
        self.anchors = Vec::new();
    }

    // ========== Per-frame ==========

    /// Run one frame and return the output coordinate buffer.
    ///
    /// Applies the force model, boundary reflection and integration to every
    /// non-stationary particle, in parallel over disjoint index chunks, and
    /// writes each particle's normalized device coordinate into the shared
    /// buffer. The returned slice is two floats per particle and stays valid
    /// until the next population-mutating call.
    ///
    /// Canvas dimensions must be positive; that precondition is only checked
    /// in debug builds.
    pub fn step(&mut self, params: &FrameParams) -> &[f32] {
        debug_assert!(
            params.canvas_width > 0.0 && params.canvas_height > 0.0,
            "canvas dimensions must be positive"
        );
        scheduler::run_frame(
            &mut self.particles,
            &mut self.coords,
            &self.anchors,
            params,
            self.workers,
        );
        self.coordinates()
    }

    // ========== Accessors ==========

    /// The output buffer as written by the last [`step`](Self::step) call.
    #[inline]
    pub fn coordinates(&self) -> &[f32] {
        bytemuck::cast_slice(&self.coords)
    }

    /// Number of particles in the population.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Number of anchors in the anchor set.
    #[inline]
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// Whether the population is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The particle population, in index order.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The anchor set, in placement order.
    #[inline]
    pub fn anchors(&self) -> &[Vec2] {
        &self.anchors
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

fn check_radius(radius: f32) -> Result<(), SimulationError> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(SimulationError::InvalidRadius(radius));
    }
    Ok(())
}
