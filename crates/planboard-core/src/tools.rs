//! Drawing tools and shape construction from drag gestures.

use crate::shapes::{Circle, Line, Rectangle, Shape, ShapeStyle};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Minimum shape extent in screen pixels; enforced in world units as
/// `MIN_SHAPE_SIZE / scale` so the on-screen minimum is zoom-invariant.
pub const MIN_SHAPE_SIZE: f64 = 10.0;

/// Display name given to shapes created without one.
pub const DEFAULT_SHAPE_NAME: &str = "Untitled";

/// The active tool selected in the host toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Select,
    Rectangle,
    Line,
    Circle,
}

impl ToolKind {
    /// Whether this tool creates shapes on drag.
    pub fn is_drawing(&self) -> bool {
        !matches!(self, ToolKind::Select)
    }
}

/// Build the shape a drawing tool produces for a start→end drag, styled
/// with the current style. Returns None for the select tool.
///
/// Rectangle: bounding box of the two corners. Line: direct endpoints.
/// Circle: centered on the start with radius out to the pointer.
pub fn shape_from_drag(tool: ToolKind, start: Point, end: Point, style: &ShapeStyle) -> Option<Shape> {
    match tool {
        ToolKind::Select => None,
        ToolKind::Rectangle => {
            let mut rect = Rectangle::from_corners(start, end, style);
            rect.name = Some(DEFAULT_SHAPE_NAME.to_string());
            Some(Shape::Rectangle(rect))
        }
        ToolKind::Line => Some(Shape::Line(Line::new(start, end, style))),
        ToolKind::Circle => {
            let radius = (end.x - start.x).hypot(end.y - start.y);
            let mut circle = Circle::new(start, radius, style);
            circle.name = Some(DEFAULT_SHAPE_NAME.to_string());
            Some(Shape::Circle(circle))
        }
    }
}

/// Whether a freshly drawn shape is large enough to keep. Shapes below
/// the threshold are discarded as accidental clicks.
pub fn meets_min_size(shape: &Shape, scale: f64) -> bool {
    let min = MIN_SHAPE_SIZE / scale;
    match shape {
        Shape::Rectangle(r) => r.width > min && r.height > min,
        Shape::Line(l) => l.length() > min,
        Shape::Circle(c) => c.radius > min / 2.0,
    }
}
