//! The simulated point mass.
//!
//! A [`Particle`] carries position, velocity and a per-particle drag divisor.
//! Forces accumulate directly into velocity; [`Particle::step`] is the sole
//! integration step (explicit Euler with implicit velocity decay), run exactly
//! once per particle per frame by the scheduler.

use glam::Vec2;

/// Default drag divisor: slight energy loss every integration step.
pub const DEFAULT_DRAG: f32 = 1.001;

/// A mutable point mass.
///
/// Owned exclusively by [`Simulation`](crate::Simulation): created on
/// population creation, repositioned (not recreated) on respawn, dropped on
/// population deletion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in canvas pixel space.
    pub position: Vec2,
    /// Velocity in pixels per frame.
    pub velocity: Vec2,
    /// Damping divisor applied to velocity on every step.
    pub drag: f32,
}

impl Particle {
    /// Create a particle at rest.
    pub fn new(position: Vec2, drag: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            drag,
        }
    }

    /// Accumulate a force into the velocity.
    ///
    /// Forces are impulses here: there is no mass term, and nothing is cleared
    /// between frames. Callers are responsible for keeping magnitudes sane;
    /// the integration step does no sub-stepping.
    #[inline]
    pub fn add_force(&mut self, force: Vec2) {
        self.velocity += force;
    }

    /// Advance one frame: damp the velocity by `1/drag`, then move.
    ///
    /// The damping is applied to the stored velocity, so the decay compounds
    /// across frames.
    #[inline]
    pub fn step(&mut self) {
        self.velocity *= 1.0 / self.drag;
        self.position += self.velocity;
    }

    /// Whether the particle is exactly at rest.
    ///
    /// Only [`Simulation::stop`](crate::Simulation::stop) produces an exact
    /// zero velocity; the scheduler uses this to skip halted particles.
    #[inline]
    pub fn is_stationary(&self) -> bool {
        self.velocity == Vec2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_force_accumulates() {
        let mut p = Particle::new(Vec2::ZERO, DEFAULT_DRAG);
        p.add_force(Vec2::new(1.0, -2.0));
        p.add_force(Vec2::new(0.5, 0.5));
        assert_eq!(p.velocity, Vec2::new(1.5, -1.5));
    }

    #[test]
    fn test_step_damps_then_moves() {
        let mut p = Particle::new(Vec2::new(10.0, 10.0), 2.0);
        p.velocity = Vec2::new(4.0, -8.0);
        p.step();

        // Velocity is halved by drag, and the damped velocity is what moves
        // the particle.
        assert_eq!(p.velocity, Vec2::new(2.0, -4.0));
        assert_eq!(p.position, Vec2::new(12.0, 6.0));
    }

    #[test]
    fn test_damping_compounds_across_steps() {
        let mut p = Particle::new(Vec2::ZERO, 2.0);
        p.velocity = Vec2::new(8.0, 0.0);
        p.step();
        p.step();
        assert_eq!(p.velocity, Vec2::new(2.0, 0.0));
        assert_eq!(p.position, Vec2::new(6.0, 0.0));
    }

    #[test]
    fn test_new_particle_is_stationary() {
        let p = Particle::new(Vec2::new(3.0, 4.0), DEFAULT_DRAG);
        assert!(p.is_stationary());

        let mut moving = p;
        moving.add_force(Vec2::new(f32::MIN_POSITIVE, 0.0));
        assert!(!moving.is_stationary());
    }
}
