//! Line shape.

use super::{Color, ShapeId, ShapeStyle};
use crate::geom;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Selection tolerance around a line, in screen pixels.
pub const LINE_SELECT_TOLERANCE: f64 = 5.0;

/// A straight line segment between two world-space endpoints.
///
/// Lines carry no rotation field: direction is already encoded by the
/// endpoints, and no fill since there is no interior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub id: ShapeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub stroke_color: Color,
    pub line_width: f64,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Line {
    /// Create a new line between two points.
    pub fn new(start: Point, end: Point, style: &ShapeStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: None,
            stroke_color: style.stroke_color.clone(),
            line_width: style.line_width,
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
        }
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn midpoint(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }

    /// Direction angle in radians, start → end.
    pub fn angle(&self) -> f64 {
        (self.y2 - self.y1).atan2(self.x2 - self.x1)
    }

    /// Re-aim both endpoints about `center` at the given angle, placing
    /// each `half_length` away so total length is preserved.
    pub fn aim(&mut self, center: Point, angle: f64, half_length: f64) {
        let (sin, cos) = angle.sin_cos();
        self.x1 = center.x - half_length * cos;
        self.y1 = center.y - half_length * sin;
        self.x2 = center.x + half_length * cos;
        self.y2 = center.y + half_length * sin;
    }

    /// A point hits the line when its distance to the segment is within
    /// half the stroke width plus a pick tolerance, both divided by
    /// `scale` so the pickable band stays constant on screen.
    pub fn hit_test(&self, point: Point, scale: f64) -> bool {
        let tolerance = (self.line_width / 2.0 + LINE_SELECT_TOLERANCE) / scale;
        geom::point_to_segment_dist_sq(point, self.start(), self.end()) <= tolerance * tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
        Line::new(Point::new(x1, y1), Point::new(x2, y2), &ShapeStyle::default())
    }

    #[test]
    fn test_length_and_midpoint() {
        let l = line(0.0, 0.0, 60.0, 80.0);
        assert!((l.length() - 100.0).abs() < f64::EPSILON);
        let mid = l.midpoint();
        assert!((mid.x - 30.0).abs() < f64::EPSILON);
        assert!((mid.y - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_aim_preserves_length() {
        let mut l = line(0.0, 0.0, 100.0, 0.0);
        let mid = l.midpoint();
        l.aim(mid, FRAC_PI_2, l.length() / 2.0);

        assert!((l.length() - 100.0).abs() < 1e-9);
        assert!((l.x1 - 50.0).abs() < 1e-9);
        assert!((l.y1 + 50.0).abs() < 1e-9);
        assert!((l.x2 - 50.0).abs() < 1e-9);
        assert!((l.y2 - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_hit_test_within_tolerance() {
        let l = line(0.0, 0.0, 100.0, 0.0);
        // Default stroke width 1: band is 0.5 + 5.0 at scale 1.
        assert!(l.hit_test(Point::new(50.0, 5.0), 1.0));
        assert!(!l.hit_test(Point::new(50.0, 6.0), 1.0));
    }

    #[test]
    fn test_hit_test_scales_with_zoom() {
        let l = line(0.0, 0.0, 100.0, 0.0);
        // Zoomed in 2x the world-space band halves.
        assert!(!l.hit_test(Point::new(50.0, 5.0), 2.0));
        assert!(l.hit_test(Point::new(50.0, 2.0), 2.0));
        // Zoomed out the band widens.
        assert!(l.hit_test(Point::new(50.0, 10.0), 0.5));
    }

    #[test]
    fn test_hit_test_beyond_endpoints() {
        let l = line(0.0, 0.0, 100.0, 0.0);
        assert!(!l.hit_test(Point::new(110.0, 0.0), 1.0));
        assert!(l.hit_test(Point::new(103.0, 0.0), 1.0));
    }
}
