//! Rectangle shape.

use super::{Color, ShapeId, ShapeStyle};
use crate::geom;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-defined rectangle, optionally rotated about its own center.
///
/// `x`/`y` locate the top-left corner of the unrotated box in world
/// units; `rotation` is applied about the center for hit-testing,
/// handles, and rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rectangle {
    pub id: ShapeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub stroke_color: Color,
    pub fill_color: Color,
    pub line_width: f64,
    /// Rotation in radians about the rectangle center.
    #[serde(default)]
    pub rotation: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// Create a new rectangle with the given top-left corner and size.
    pub fn new(position: Point, width: f64, height: f64, style: &ShapeStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: None,
            stroke_color: style.stroke_color.clone(),
            fill_color: style.fill_color.clone(),
            line_width: style.line_width,
            rotation: 0.0,
            x: position.x,
            y: position.y,
            width,
            height,
        }
    }

    /// Create a rectangle spanning two corner points (in any order).
    pub fn from_corners(p1: Point, p2: Point, style: &ShapeStyle) -> Self {
        Self::new(
            Point::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            (p2.x - p1.x).abs(),
            (p2.y - p1.y).abs(),
            style,
        )
    }

    /// Center of the rectangle (invariant under rotation).
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// A point hits the rectangle when, after undoing the rotation, it
    /// lies strictly inside the box on both local axes.
    pub fn hit_test(&self, point: Point) -> bool {
        let center = self.center();
        let local = geom::rotate_about(point, center, -self.rotation);
        (local.x - center.x).abs() < self.width / 2.0
            && (local.y - center.y).abs() < self.height / 2.0
    }
}
