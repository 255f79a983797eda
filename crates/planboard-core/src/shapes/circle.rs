//! Circle shape.

use super::{Color, ShapeId, ShapeStyle};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A circle defined by center and radius. Rotation is unobservable for
/// a circle, so none is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circle {
    pub id: ShapeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub stroke_color: Color,
    pub fill_color: Color,
    pub line_width: f64,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: Point, radius: f64, style: &ShapeStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: None,
            stroke_color: style.stroke_color.clone(),
            fill_color: style.fill_color.clone(),
            line_width: style.line_width,
            cx: center.x,
            cy: center.y,
            radius,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// A point hits the circle when it lies within the radius.
    pub fn hit_test(&self, point: Point) -> bool {
        (point.x - self.cx).hypot(point.y - self.cy) <= self.radius
    }
}
