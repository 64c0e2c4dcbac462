//! The stylized force field and boundary reflection.
//!
//! Attraction here is deliberately not inverse-square: every pull has
//! magnitude `strength / distance`, which keeps distant particles drifting
//! and close particles orbiting instead of slingshotting. Both the pointer
//! pull and the per-anchor pull use the same law, with separate strength
//! constants.
//!
//! All distance terms are guarded by [`DISTANCE_EPSILON`]: a particle sitting
//! on top of a force source receives no contribution from it, rather than a
//! NaN that would poison its position for the rest of the run.

use crate::particle::Particle;
use glam::Vec2;

/// Pull strength of the pointer/force-center attraction.
pub const POINTER_PULL: f32 = 0.07;

/// Pull strength of each heavy anchor.
pub const ANCHOR_PULL: f32 = 0.07;

/// Distances below this contribute no force.
pub const DISTANCE_EPSILON: f32 = 1e-6;

/// Attraction toward `target` with magnitude `strength / distance`.
///
/// Returns zero when the particle is within [`DISTANCE_EPSILON`] of the
/// target.
#[inline]
pub fn pull_toward(position: Vec2, target: Vec2, strength: f32) -> Vec2 {
    let offset = target - position;
    let distance = offset.length();
    if distance < DISTANCE_EPSILON {
        return Vec2::ZERO;
    }
    // offset / distance is the unit direction; one more division applies the
    // 1/distance falloff.
    offset * (strength / (distance * distance))
}

/// Axis-aligned reflection bounds for a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    /// Bounds covering a canvas.
    ///
    /// With `squared` set, the horizontal bounds are inset to center a square
    /// viewport inside a landscape canvas; vertical bounds always span the
    /// full height. A portrait canvas gets no inset.
    pub fn of_canvas(width: f32, height: f32, squared: bool) -> Self {
        let inset = if squared {
            ((width - height) / 2.0).max(0.0)
        } else {
            0.0
        };
        Self {
            min_x: inset,
            max_x: width - inset,
            min_y: 0.0,
            max_y: height,
        }
    }
}

/// Reflect the particle's velocity at the bounds, per axis.
///
/// A component is negated only when the particle's leading edge
/// (`position ± half_size`) has crossed the bound *and* the component still
/// points outward. The one-sided check keeps a particle that ends up resting
/// on a bound from flipping back and forth in place.
pub fn bounce(particle: &mut Particle, half_size: f32, bounds: &Bounds, bounce_x: bool, bounce_y: bool) {
    if bounce_x {
        let v = particle.velocity.x;
        if (particle.position.x - half_size < bounds.min_x && v < 0.0)
            || (particle.position.x + half_size > bounds.max_x && v > 0.0)
        {
            particle.velocity.x = -v;
        }
    }
    if bounce_y {
        let v = particle.velocity.y;
        if (particle.position.y - half_size < bounds.min_y && v < 0.0)
            || (particle.position.y + half_size > bounds.max_y && v > 0.0)
        {
            particle.velocity.y = -v;
        }
    }
}
