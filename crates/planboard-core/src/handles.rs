//! Handle anchors for direct manipulation of the selected shape.

use crate::geom;
use crate::shapes::{Circle, Line, Rectangle, Shape};
use kurbo::Point;
use std::f64::consts::FRAC_PI_2;

/// Handle edge length in screen pixels.
pub const HANDLE_SIZE: f64 = 8.0;
/// Distance from the shape to its rotation handle, in screen pixels.
pub const ROTATE_HANDLE_OFFSET: f64 = 30.0;

/// Corner resize handles of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Edge-midpoint resize handles of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Endpoint handles of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

/// Cardinal resize handles of a circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinal {
    North,
    South,
    West,
    East,
}

/// The kind of manipulation a handle performs when dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    Corner(Corner),
    Edge(Edge),
    Endpoint(Endpoint),
    Cardinal(Cardinal),
    Rotate,
}

impl HandleKind {
    /// Whether dragging this handle adjusts the rectangle's left edge.
    pub fn adjusts_left(&self) -> bool {
        matches!(
            self,
            HandleKind::Corner(Corner::TopLeft | Corner::BottomLeft) | HandleKind::Edge(Edge::Left)
        )
    }

    pub fn adjusts_right(&self) -> bool {
        matches!(
            self,
            HandleKind::Corner(Corner::TopRight | Corner::BottomRight)
                | HandleKind::Edge(Edge::Right)
        )
    }

    pub fn adjusts_top(&self) -> bool {
        matches!(
            self,
            HandleKind::Corner(Corner::TopLeft | Corner::TopRight) | HandleKind::Edge(Edge::Top)
        )
    }

    pub fn adjusts_bottom(&self) -> bool {
        matches!(
            self,
            HandleKind::Corner(Corner::BottomLeft | Corner::BottomRight)
                | HandleKind::Edge(Edge::Bottom)
        )
    }
}

/// A handle anchor in world coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Handle {
    pub kind: HandleKind,
    pub position: Point,
}

/// Compute the handle anchors for a shape at the current zoom.
///
/// `scale` keeps the rotation-handle offset a constant distance on
/// screen regardless of zoom level.
pub fn handles_for(shape: &Shape, scale: f64) -> Vec<Handle> {
    match shape {
        Shape::Rectangle(rect) => rectangle_handles(rect, scale),
        Shape::Line(line) => line_handles(line, scale),
        Shape::Circle(circle) => circle_handles(circle),
    }
}

/// Eight resize anchors on the unrotated box plus a rotation anchor
/// above the top edge, all rotated about the center together.
fn rectangle_handles(rect: &Rectangle, scale: f64) -> Vec<Handle> {
    let center = rect.center();
    let half_w = rect.width / 2.0;
    let half_h = rect.height / 2.0;
    let rotate_offset = ROTATE_HANDLE_OFFSET / scale;

    let local: [(HandleKind, f64, f64); 9] = [
        (HandleKind::Corner(Corner::TopLeft), -half_w, -half_h),
        (HandleKind::Corner(Corner::TopRight), half_w, -half_h),
        (HandleKind::Corner(Corner::BottomLeft), -half_w, half_h),
        (HandleKind::Corner(Corner::BottomRight), half_w, half_h),
        (HandleKind::Edge(Edge::Top), 0.0, -half_h),
        (HandleKind::Edge(Edge::Bottom), 0.0, half_h),
        (HandleKind::Edge(Edge::Left), -half_w, 0.0),
        (HandleKind::Edge(Edge::Right), half_w, 0.0),
        (HandleKind::Rotate, 0.0, -half_h - rotate_offset),
    ];

    local
        .into_iter()
        .map(|(kind, dx, dy)| Handle {
            kind,
            position: geom::rotate_about(
                Point::new(center.x + dx, center.y + dy),
                center,
                rect.rotation,
            ),
        })
        .collect()
}

/// Endpoint anchors plus a rotation anchor offset perpendicular to the
/// line at its midpoint.
fn line_handles(line: &Line, scale: f64) -> Vec<Handle> {
    let mid = line.midpoint();
    let perp = line.angle() - FRAC_PI_2;
    let offset = ROTATE_HANDLE_OFFSET / scale;

    vec![
        Handle {
            kind: HandleKind::Endpoint(Endpoint::Start),
            position: line.start(),
        },
        Handle {
            kind: HandleKind::Endpoint(Endpoint::End),
            position: line.end(),
        },
        Handle {
            kind: HandleKind::Rotate,
            position: Point::new(mid.x + offset * perp.cos(), mid.y + offset * perp.sin()),
        },
    ]
}

/// Four cardinal anchors on the circle itself; no rotation handle.
fn circle_handles(circle: &Circle) -> Vec<Handle> {
    vec![
        Handle {
            kind: HandleKind::Cardinal(Cardinal::North),
            position: Point::new(circle.cx, circle.cy - circle.radius),
        },
        Handle {
            kind: HandleKind::Cardinal(Cardinal::South),
            position: Point::new(circle.cx, circle.cy + circle.radius),
        },
        Handle {
            kind: HandleKind::Cardinal(Cardinal::West),
            position: Point::new(circle.cx - circle.radius, circle.cy),
        },
        Handle {
            kind: HandleKind::Cardinal(Cardinal::East),
            position: Point::new(circle.cx + circle.radius, circle.cy),
        },
    ]
}

/// Find the handle nearest a world point within the pick radius
/// (`HANDLE_SIZE * 1.5` screen pixels), or None.
///
/// Checked before shape-body hit-testing for the selected shape, since
/// the rotation handle lies outside the body.
pub fn handle_at(shape: &Shape, point: Point, scale: f64) -> Option<HandleKind> {
    let tolerance = HANDLE_SIZE * 1.5 / scale;
    handles_for(shape, scale)
        .into_iter()
        .map(|h| {
            let dist = (point.x - h.position.x).hypot(point.y - h.position.y);
            (h.kind, dist)
        })
        .filter(|&(_, dist)| dist < tolerance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(kind, _)| kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeStyle;
    use std::f64::consts::FRAC_PI_2;

    fn rect_shape(x: f64, y: f64, w: f64, h: f64) -> Shape {
        Shape::Rectangle(Rectangle::new(Point::new(x, y), w, h, &ShapeStyle::default()))
    }

    #[test]
    fn test_rectangle_handle_set() {
        let handles = handles_for(&rect_shape(0.0, 0.0, 100.0, 50.0), 1.0);
        assert_eq!(handles.len(), 9);

        let corners = handles
            .iter()
            .filter(|h| matches!(h.kind, HandleKind::Corner(_)))
            .count();
        let edges = handles
            .iter()
            .filter(|h| matches!(h.kind, HandleKind::Edge(_)))
            .count();
        assert_eq!(corners, 4);
        assert_eq!(edges, 4);
        assert!(handles.iter().any(|h| h.kind == HandleKind::Rotate));
    }

    #[test]
    fn test_rectangle_rotate_handle_above_top_edge() {
        let handles = handles_for(&rect_shape(0.0, 0.0, 100.0, 50.0), 1.0);
        let rot = handles
            .iter()
            .find(|h| h.kind == HandleKind::Rotate)
            .unwrap();
        assert!((rot.position.x - 50.0).abs() < 1e-9);
        assert!((rot.position.y - (-ROTATE_HANDLE_OFFSET)).abs() < 1e-9);
    }

    #[test]
    fn test_rectangle_handles_rotate_with_shape() {
        let mut rect = Rectangle::new(Point::new(0.0, 0.0), 100.0, 50.0, &ShapeStyle::default());
        rect.rotation = FRAC_PI_2;
        let handles = handles_for(&Shape::Rectangle(rect), 1.0);

        // Top-left local corner (-50, -25) maps to center + (25, -50).
        let tl = handles
            .iter()
            .find(|h| h.kind == HandleKind::Corner(Corner::TopLeft))
            .unwrap();
        assert!((tl.position.x - 75.0).abs() < 1e-9);
        assert!((tl.position.y - (-25.0)).abs() < 1e-9);
    }

    #[test]
    fn test_rotate_offset_tracks_zoom() {
        let handles = handles_for(&rect_shape(0.0, 0.0, 100.0, 50.0), 2.0);
        let rot = handles
            .iter()
            .find(|h| h.kind == HandleKind::Rotate)
            .unwrap();
        assert!((rot.position.y - (-ROTATE_HANDLE_OFFSET / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_line_handles() {
        let line = Line::new(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            &ShapeStyle::default(),
        );
        let handles = handles_for(&Shape::Line(line), 1.0);
        assert_eq!(handles.len(), 3);

        // Rotation anchor sits perpendicular above the midpoint.
        let rot = handles
            .iter()
            .find(|h| h.kind == HandleKind::Rotate)
            .unwrap();
        assert!((rot.position.x - 50.0).abs() < 1e-9);
        assert!((rot.position.y - (-ROTATE_HANDLE_OFFSET)).abs() < 1e-9);
    }

    #[test]
    fn test_circle_has_no_rotation_handle() {
        let circle = Circle::new(Point::new(50.0, 50.0), 20.0, &ShapeStyle::default());
        let handles = handles_for(&Shape::Circle(circle), 1.0);
        assert_eq!(handles.len(), 4);
        assert!(handles.iter().all(|h| h.kind != HandleKind::Rotate));
    }

    #[test]
    fn test_handle_at_picks_nearest() {
        let shape = rect_shape(0.0, 0.0, 100.0, 50.0);
        // Near the bottom-right corner (100, 50).
        let hit = handle_at(&shape, Point::new(104.0, 53.0), 1.0);
        assert_eq!(hit, Some(HandleKind::Corner(Corner::BottomRight)));

        // Well away from every anchor.
        assert_eq!(handle_at(&shape, Point::new(40.0, 20.0), 1.0), None);
    }

    #[test]
    fn test_handle_at_tolerance_scales() {
        let shape = rect_shape(0.0, 0.0, 100.0, 50.0);
        let probe = Point::new(110.0, 50.0); // 10 world units from the corner
        assert!(handle_at(&shape, probe, 1.0).is_some());
        // Zoomed in 2x the world tolerance shrinks to 6 units.
        assert!(handle_at(&shape, probe, 2.0).is_none());
    }
}
