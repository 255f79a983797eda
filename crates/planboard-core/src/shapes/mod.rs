//! Shape definitions for the scene model.

mod circle;
mod line;
mod rectangle;

pub use circle::Circle;
pub use line::Line;
pub use rectangle::Rectangle;

use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// A CSS-style color value (`#rrggbb`), carried through serialization
/// untouched so a loaded scene re-serializes to the same values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn black() -> Self {
        Self::new("#000000")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Style applied to newly created shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: Color,
    /// Fill color (ignored by shapes without a fill).
    pub fill_color: Color,
    /// Stroke width in world units.
    pub line_width: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::black(),
            fill_color: Color::new("#E5E7EB"),
            line_width: 1.0,
        }
    }
}

/// Enum over the closed set of shape kinds.
///
/// Serialized as a flat record tagged by `type`, which is the scene
/// interchange format consumed by file and remote persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(Rectangle),
    Line(Line),
    Circle(Circle),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id,
            Shape::Line(s) => s.id,
            Shape::Circle(s) => s.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Shape::Rectangle(s) => s.name.as_deref(),
            Shape::Line(s) => s.name.as_deref(),
            Shape::Circle(s) => s.name.as_deref(),
        }
    }

    pub fn set_name(&mut self, name: Option<String>) {
        match self {
            Shape::Rectangle(s) => s.name = name,
            Shape::Line(s) => s.name = name,
            Shape::Circle(s) => s.name = name,
        }
    }

    /// Check whether a world-space point hits this shape.
    ///
    /// `scale` is the current viewport scale; line picking widens its
    /// tolerance by `1 / scale` so the pickable band stays a constant
    /// width on screen.
    pub fn hit_test(&self, point: Point, scale: f64) -> bool {
        match self {
            Shape::Rectangle(s) => s.hit_test(point),
            Shape::Line(s) => s.hit_test(point, scale),
            Shape::Circle(s) => s.hit_test(point),
        }
    }

    pub fn stroke_color(&self) -> &Color {
        match self {
            Shape::Rectangle(s) => &s.stroke_color,
            Shape::Line(s) => &s.stroke_color,
            Shape::Circle(s) => &s.stroke_color,
        }
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        match self {
            Shape::Rectangle(s) => s.stroke_color = color,
            Shape::Line(s) => s.stroke_color = color,
            Shape::Circle(s) => s.stroke_color = color,
        }
    }

    /// Fill color, if this shape kind has one (lines do not).
    pub fn fill_color(&self) -> Option<&Color> {
        match self {
            Shape::Rectangle(s) => Some(&s.fill_color),
            Shape::Line(_) => None,
            Shape::Circle(s) => Some(&s.fill_color),
        }
    }

    /// Set the fill color. Returns false for shape kinds without a fill.
    pub fn set_fill_color(&mut self, color: Color) -> bool {
        match self {
            Shape::Rectangle(s) => {
                s.fill_color = color;
                true
            }
            Shape::Line(_) => false,
            Shape::Circle(s) => {
                s.fill_color = color;
                true
            }
        }
    }

    pub fn line_width(&self) -> f64 {
        match self {
            Shape::Rectangle(s) => s.line_width,
            Shape::Line(s) => s.line_width,
            Shape::Circle(s) => s.line_width,
        }
    }

    pub fn set_line_width(&mut self, width: f64) {
        match self {
            Shape::Rectangle(s) => s.line_width = width,
            Shape::Line(s) => s.line_width = width,
            Shape::Circle(s) => s.line_width = width,
        }
    }
}
