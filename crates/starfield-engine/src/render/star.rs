//! Five-pointed star path geometry.

use glam::Vec2;
use std::f32::consts::PI;

/// Spikes on every star head.
pub const STAR_SPIKES: u32 = 5;

/// Outline vertices of a star centered at `center`, in draw order.
///
/// Alternates between the outer and inner radius, stepping `π/spikes` per
/// vertex from an initial rotation of `3π/2`, and closes back on the topmost
/// outer point. The result is `2 × spikes + 2` points: the top anchor, the
/// alternating ring, and the top anchor again.
pub fn star_points(center: Vec2, spikes: u32, outer: f32, inner: f32) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(2 * spikes as usize + 2);
    let top = Vec2::new(center.x, center.y - outer);
    points.push(top);

    let step = PI / spikes as f32;
    let mut rot = PI / 2.0 * 3.0;
    for _ in 0..spikes {
        points.push(center + Vec2::new(rot.cos(), rot.sin()) * outer);
        rot += step;
        points.push(center + Vec2::new(rot.cos(), rot.sin()) * inner);
        rot += step;
    }

    points.push(top);
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn point_count_is_ring_plus_anchors() {
        let points = star_points(Vec2::new(100.0, 100.0), STAR_SPIKES, 5.0, 2.5);
        assert_eq!(points.len(), 2 * STAR_SPIKES as usize + 2);
    }

    #[test]
    fn path_opens_and_closes_at_the_top() {
        let center = Vec2::new(100.0, 100.0);
        let points = star_points(center, STAR_SPIKES, 5.0, 2.5);
        let top = Vec2::new(100.0, 95.0);
        assert!((points[0] - top).length() < EPS);
        assert!((points[points.len() - 1] - top).length() < EPS);
        // The first ring vertex coincides with the anchor (rotation starts at 3π/2)
        assert!((points[1] - top).length() < EPS);
    }

    #[test]
    fn vertices_alternate_between_radii() {
        let center = Vec2::new(0.0, 0.0);
        let (outer, inner) = (4.0, 2.0);
        let points = star_points(center, STAR_SPIKES, outer, inner);
        for (i, point) in points[1..points.len() - 1].iter().enumerate() {
            let expected = if i % 2 == 0 { outer } else { inner };
            assert!(
                ((*point - center).length() - expected).abs() < EPS,
                "vertex {} at wrong radius",
                i
            );
        }
    }
}
