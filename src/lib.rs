//! # whorl - a multithreaded 2D particle simulation kernel
//!
//! whorl integrates large populations of point masses under a stylized force
//! field (heavy anchor points, an optional pointer pull, boundary bounce) and
//! emits normalized render coordinates every frame. It owns nothing but the
//! simulation: windowing, input capture and drawing belong to the host.
//!
//! ## Quick Start
//!
//! ```
//! use whorl::prelude::*;
//!
//! let mut sim = Simulation::new().with_seed(42);
//!
//! // A disk of particles around the canvas center, drifting outward.
//! sim.create_particles(100_000, Vec2::new(640.0, 360.0), 200.0, 0.01)?;
//! // Three heavy anchors on a ring; particles orbit them.
//! sim.create_anchors(3, 1280.0, 720.0)?;
//!
//! let mut clock = FrameClock::new();
//! // Each frame:
//! let params = FrameParams::new(1280.0, 720.0)
//!     .with_particle_size(2.0)
//!     .with_delta_time(clock.tick());
//! let coords = sim.step(&params);
//! // coords is two floats per particle in [-1, 1]; upload and draw points.
//! assert_eq!(coords.len(), 2 * 100_000);
//! # Ok::<(), whorl::SimulationError>(())
//! ```
//!
//! ## Core Concepts
//!
//! ### Particles
//!
//! A [`Particle`] is position, velocity and a drag divisor. Forces accumulate
//! straight into velocity; integration is a single damped Euler step per
//! frame. Populations are created, respawned and dropped wholesale through
//! [`Simulation`]; particle index is identity for a population's lifetime.
//!
//! ### Anchors
//!
//! Anchors ("heavy particles") are static attractors placed on a ring around
//! the canvas center. They pull with the same `strength / distance` falloff
//! as the pointer: deliberately not inverse-square, which keeps the motion
//! fluid rather than ballistic.
//!
//! ### Frames
//!
//! [`Simulation::step`] takes [`FrameParams`], fans the population out over
//! disjoint index chunks on a worker pool, and returns the shared coordinate
//! buffer. Management calls (respawn, explosions, anchor changes) happen
//! between frames; `&mut self` makes that ordering structural.
//!
//! ## Operation Overview
//!
//! | Category | Calls |
//! |----------|-------|
//! | Population | [`Simulation::create_particles`], [`Simulation::delete_particles`], [`Simulation::respawn`], [`Simulation::respawn_ring`] |
//! | Motion | [`Simulation::stop`], [`Simulation::explode`] |
//! | Anchors | [`Simulation::create_anchors`], [`Simulation::delete_anchors`] |
//! | Frame | [`Simulation::step`], [`FrameParams`], [`clock::FrameClock`] |

pub mod anchor;
pub mod clock;
mod error;
pub mod forces;
mod particle;
mod scheduler;
mod simulation;
pub mod spawn;

pub use bytemuck;
pub use error::SimulationError;
pub use forces::{ANCHOR_PULL, DISTANCE_EPSILON, POINTER_PULL};
pub use glam::Vec2;
pub use particle::{Particle, DEFAULT_DRAG};
pub use scheduler::{FrameParams, RenderCoord, DEFAULT_WORKER_COUNT};
pub use simulation::Simulation;

/// Convenient re-exports for common usage.
///
/// ```
/// use whorl::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clock::FrameClock;
    pub use crate::{FrameParams, Particle, RenderCoord, Simulation, SimulationError, Vec2};
}
