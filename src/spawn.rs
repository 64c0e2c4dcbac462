//! Position sampling and velocity seeding for (re)spawned populations.
//!
//! Every spawn operation samples positions area-uniformly: a plain
//! `rand * radius` draw would crowd particles toward the center, so the
//! radial draw takes a square root before scaling. Velocities are seeded as
//! radial kicks away from (or, with a negative strength, toward) the spawn
//! center.
//!
//! All helpers draw from the caller's [`SmallRng`] so a seeded simulation
//! replays the exact same population.

use crate::forces::DISTANCE_EPSILON;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;
use std::f32::consts::TAU;

/// Random point inside a disk, uniform by area.
pub fn disk_position(rng: &mut SmallRng, center: Vec2, radius: f32) -> Vec2 {
    let r = rng.gen::<f32>().sqrt() * radius;
    let phi = rng.gen::<f32>() * TAU;
    center + Vec2::new(r * phi.sin(), r * phi.cos())
}

/// Random point in the annulus between `radius - width` and `radius`,
/// uniform by area within the band.
///
/// The inner radius is clamped at zero, so a band wider than its radius
/// degenerates to the full disk.
pub fn annulus_position(rng: &mut SmallRng, center: Vec2, radius: f32, width: f32) -> Vec2 {
    let inner = (radius - width).max(0.0);
    let inner_sq = inner * inner;
    let r = (rng.gen::<f32>() * (radius * radius - inner_sq) + inner_sq).sqrt();
    let phi = rng.gen::<f32>() * TAU;
    center + Vec2::new(r * phi.sin(), r * phi.cos())
}

/// Velocity kick proportional to the offset from the spawn center.
///
/// This is the seeding used by disk spawns: particles farther out start
/// faster. A negative `strength` produces an inward implosion.
#[inline]
pub fn radial_kick(position: Vec2, center: Vec2, strength: f32) -> Vec2 {
    (position - center) * strength
}

/// Constant-magnitude velocity kick directed away from the spawn center.
///
/// Used by annulus spawns, where every particle should leave the band at the
/// same speed regardless of where in it the particle landed. A particle
/// sitting exactly on the center has no radial direction; it gets a random
/// one instead.
pub fn unit_radial_kick(rng: &mut SmallRng, position: Vec2, center: Vec2, strength: f32) -> Vec2 {
    let offset = position - center;
    if offset.length_squared() > DISTANCE_EPSILON * DISTANCE_EPSILON {
        offset.normalize() * strength
    } else {
        let phi = rng.gen::<f32>() * TAU;
        Vec2::new(phi.cos(), phi.sin()) * strength
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_disk_positions_stay_in_radius() {
        let mut rng = rng();
        let center = Vec2::new(100.0, -40.0);
        for _ in 0..500 {
            let p = disk_position(&mut rng, center, 25.0);
            assert!(p.distance(center) <= 25.0 + 1e-3);
        }
    }

    #[test]
    fn test_annulus_positions_stay_in_band() {
        let mut rng = rng();
        let center = Vec2::new(0.0, 0.0);
        for _ in 0..500 {
            let p = annulus_position(&mut rng, center, 50.0, 10.0);
            let d = p.distance(center);
            assert!(d >= 40.0 - 1e-3 && d <= 50.0 + 1e-3);
        }
    }

    #[test]
    fn test_oversized_band_degenerates_to_disk() {
        let mut rng = rng();
        for _ in 0..200 {
            let p = annulus_position(&mut rng, Vec2::ZERO, 30.0, 100.0);
            assert!(p.length() <= 30.0 + 1e-3);
        }
    }

    #[test]
    fn test_radial_kick_is_exact() {
        let kick = radial_kick(Vec2::new(12.0, 7.0), Vec2::new(2.0, 3.0), 0.05);
        assert_eq!(kick, Vec2::new(0.5, 0.2));
    }

    #[test]
    fn test_unit_radial_kick_has_constant_magnitude() {
        let mut rng = rng();
        let center = Vec2::new(5.0, 5.0);
        for offset in [Vec2::new(1.0, 0.0), Vec2::new(-30.0, 40.0)] {
            let kick = unit_radial_kick(&mut rng, center + offset, center, 5.0);
            assert!((kick.length() - 5.0).abs() < 1e-4);
            // Same direction as the offset.
            assert!(kick.dot(offset) > 0.0);
        }
    }

    #[test]
    fn test_unit_radial_kick_at_center_picks_some_direction() {
        let mut rng = rng();
        let kick = unit_radial_kick(&mut rng, Vec2::ZERO, Vec2::ZERO, 5.0);
        assert!((kick.length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_seeded_sampling_replays() {
        let mut a = SmallRng::seed_from_u64(7);
        let mut b = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(
                disk_position(&mut a, Vec2::ZERO, 200.0),
                disk_position(&mut b, Vec2::ZERO, 200.0)
            );
        }
    }
}
