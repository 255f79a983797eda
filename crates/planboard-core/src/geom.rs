//! Scalar and point geometry shared by hit-testing and manipulation.

use kurbo::{Point, Vec2};
use std::f64::consts::FRAC_PI_4;

/// Increment used when angle snapping is active (45°).
pub const ANGLE_SNAP_INCREMENT: f64 = FRAC_PI_4;

/// Rotate `point` about `center` by `angle` radians.
pub fn rotate_about(point: Point, center: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point::new(
        center.x + dx * cos - dy * sin,
        center.y + dx * sin + dy * cos,
    )
}

/// Squared distance from `point` to the segment `a`→`b`.
///
/// The projection parameter is clamped to the segment, so endpoints act
/// as the nearest feature beyond either end.
pub fn point_to_segment_dist_sq(point: Point, a: Point, b: Point) -> f64 {
    let seg = Vec2::new(b.x - a.x, b.y - a.y);
    let pv = Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        // Degenerate segment
        return pv.hypot2();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    (point.x - proj.x).powi(2) + (point.y - proj.y).powi(2)
}

/// Round an angle in radians to the nearest 45° increment.
pub fn snap_angle(angle: f64) -> f64 {
    (angle / ANGLE_SNAP_INCREMENT).round() * ANGLE_SNAP_INCREMENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_rotate_about_quarter_turn() {
        let p = rotate_about(Point::new(10.0, 0.0), Point::ZERO, FRAC_PI_2);
        assert!((p.x - 0.0).abs() < 1e-12);
        assert!((p.y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_about_offcenter() {
        let p = rotate_about(Point::new(6.0, 5.0), Point::new(5.0, 5.0), PI);
        assert!((p.x - 4.0).abs() < 1e-12);
        assert!((p.y - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_distance_interior() {
        let d = point_to_segment_dist_sq(
            Point::new(50.0, 3.0),
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        );
        assert!((d - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_distance_clamps_to_endpoint() {
        let d = point_to_segment_dist_sq(
            Point::new(-3.0, 4.0),
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        );
        assert!((d - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_distance_degenerate() {
        let d = point_to_segment_dist_sq(
            Point::new(3.0, 4.0),
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
        );
        assert!((d - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_snap_angle_rounds_to_45() {
        let snapped = snap_angle(40.0_f64.to_radians());
        assert!((snapped - FRAC_PI_4).abs() < 1e-12);

        let snapped = snap_angle(100.0_f64.to_radians());
        assert!((snapped - FRAC_PI_2).abs() < 1e-12);

        let snapped = snap_angle(-10.0_f64.to_radians());
        assert!(snapped.abs() < 1e-12);
    }
}
