//! Placement of heavy anchor points.
//!
//! Anchors are static attractors: they pull every simulated particle toward
//! themselves but are never integrated. Their lifecycle is independent of the
//! particle population; [`Simulation`](crate::Simulation) replaces the whole
//! set in one call.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Lay out `count` anchors for a canvas.
///
/// A single anchor sits at the canvas center. Larger sets are spaced evenly
/// on a circle of radius `canvas_height / 4` around the center, with a phase
/// that depends on the parity of `count`: even counts are rotated by half an
/// angular spacing, odd counts keep an anchor on the vertical axis, so
/// layouts of different parity never put anchors on the same spots.
///
/// `count` must be at least 1; the caller validates.
pub fn ring(count: usize, canvas_width: f32, canvas_height: f32) -> Vec<Vec2> {
    debug_assert!(count >= 1, "anchor layout needs at least one anchor");

    let center = Vec2::new(canvas_width / 2.0, canvas_height / 2.0);
    if count == 1 {
        return vec![center];
    }

    let radius = canvas_height / 4.0;
    let spacing = TAU / count as f32;
    let phase = if count % 2 == 0 {
        spacing / 2.0
    } else {
        FRAC_PI_2
    };

    (0..count)
        .map(|i| {
            let angle = phase + spacing * i as f32;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_single_anchor_sits_at_canvas_center() {
        let anchors = ring(1, 800.0, 600.0);
        assert_eq!(anchors, vec![Vec2::new(400.0, 300.0)]);
    }

    #[test]
    fn test_ring_radius_is_quarter_height() {
        let anchors = ring(5, 800.0, 600.0);
        let center = Vec2::new(400.0, 300.0);
        for anchor in &anchors {
            assert!((anchor.distance(center) - 150.0).abs() < EPS);
        }
    }

    #[test]
    fn test_adjacent_anchors_evenly_spaced() {
        let count = 6;
        let anchors = ring(count, 1024.0, 768.0);
        let center = Vec2::new(512.0, 384.0);
        let spacing = TAU / count as f32;

        for pair in anchors.windows(2) {
            let a = pair[0] - center;
            let b = pair[1] - center;
            let angle = (a.dot(b) / (a.length() * b.length())).clamp(-1.0, 1.0).acos();
            assert!((angle - spacing).abs() < EPS);
        }
    }

    #[test]
    fn test_odd_layout_keeps_vertical_anchor() {
        let anchors = ring(3, 800.0, 600.0);
        // Phase pi/2 puts the first anchor straight up from the center.
        assert!((anchors[0].x - 400.0).abs() < EPS);
        assert!((anchors[0].y - 450.0).abs() < EPS);
    }

    #[test]
    fn test_parity_layouts_do_not_coincide() {
        let even = ring(4, 800.0, 600.0);
        let odd = ring(3, 800.0, 600.0);
        for e in &even {
            for o in &odd {
                assert!(e.distance(*o) > EPS);
            }
        }
    }
}
