//! Viewport transform between screen and world space.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Minimum allowed zoom scale.
pub const MIN_SCALE: f64 = 0.1;
/// Maximum allowed zoom scale.
pub const MAX_SCALE: f64 = 10.0;
/// Multiplicative factor applied per zoom step.
pub const ZOOM_STEP: f64 = 1.1;

/// Pan/zoom state of the canvas view.
///
/// Maps world coordinates to screen coordinates as
/// `screen = world * scale + offset`. Mutated only by [`Viewport::pan`]
/// and [`Viewport::zoom`]; [`Viewport::reset`] restores the identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Current zoom scale, clamped to `[MIN_SCALE, MAX_SCALE]`.
    pub scale: f64,
    /// Current translation offset in screen units.
    pub offset: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl Viewport {
    /// Create a viewport at identity (scale 1, no offset).
    pub fn new() -> Self {
        Self::default()
    }

    /// World-to-screen affine transform.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Screen-to-world affine transform (exact inverse of `transform`).
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.scale) * Affine::translate(-self.offset)
    }

    /// Convert a screen point to world coordinates.
    pub fn screen_to_world(&self, screen: Point) -> Point {
        self.inverse_transform() * screen
    }

    /// Convert a world point to screen coordinates.
    pub fn world_to_screen(&self, world: Point) -> Point {
        self.transform() * world
    }

    /// Pan the view by a delta in screen coordinates.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Apply one zoom step, keeping the world point under `center`
    /// fixed on screen.
    ///
    /// `direction < 0` zooms in (wheel-up convention), otherwise out.
    pub fn zoom(&mut self, direction: f64, center: Point) {
        let anchor = self.screen_to_world(center);
        let target = if direction < 0.0 {
            self.scale * ZOOM_STEP
        } else {
            self.scale / ZOOM_STEP
        };
        self.scale = target.clamp(MIN_SCALE, MAX_SCALE);

        // Re-derive the offset so `anchor` maps back onto `center`.
        self.offset = Vec2::new(
            center.x - anchor.x * self.scale,
            center.y - anchor.y * self.scale,
        );
    }

    /// Reset to identity: scale 1, offset (0, 0).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Zoom level as the rounded percentage shown in the host UI.
    pub fn zoom_percent(&self) -> f64 {
        (self.scale * 100.0).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_maps_points_unchanged() {
        let vp = Viewport::new();
        let p = Point::new(123.0, -45.0);
        assert_eq!(vp.screen_to_world(p), p);
        assert_eq!(vp.world_to_screen(p), p);
    }

    #[test]
    fn test_round_trip_conversion() {
        let mut vp = Viewport::new();
        vp.offset = Vec2::new(37.0, -12.0);
        vp.scale = 1.7;

        let original = Point::new(123.0, 456.0);
        let world = vp.screen_to_world(original);
        let back = vp.world_to_screen(world);
        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);

        let screen = vp.world_to_screen(original);
        let back = vp.screen_to_world(screen);
        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);
    }

    #[test]
    fn test_pan_moves_offset_only() {
        let mut vp = Viewport::new();
        vp.pan(Vec2::new(10.0, 20.0));
        vp.pan(Vec2::new(-4.0, 1.0));
        assert!((vp.offset.x - 6.0).abs() < f64::EPSILON);
        assert!((vp.offset.y - 21.0).abs() < f64::EPSILON);
        assert!((vp.scale - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zoom_keeps_anchor_fixed() {
        let mut vp = Viewport::new();
        vp.offset = Vec2::new(13.0, -7.0);
        let center = Point::new(200.0, 150.0);
        let anchor_world = vp.screen_to_world(center);

        // A mixed sequence of zoom steps at the same screen point.
        for direction in [-1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0] {
            vp.zoom(direction, center);
            let back = vp.world_to_screen(anchor_world);
            assert!((back.x - center.x).abs() < 1e-9);
            assert!((back.y - center.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zoom_clamps_scale() {
        let mut vp = Viewport::new();
        for _ in 0..100 {
            vp.zoom(-1.0, Point::ZERO);
        }
        assert!((vp.scale - MAX_SCALE).abs() < f64::EPSILON);

        for _ in 0..200 {
            vp.zoom(1.0, Point::ZERO);
        }
        assert!((vp.scale - MIN_SCALE).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_step_factor() {
        let mut vp = Viewport::new();
        vp.zoom(-1.0, Point::ZERO);
        assert!((vp.scale - 1.1).abs() < 1e-12);
        vp.zoom(1.0, Point::ZERO);
        assert!((vp.scale - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reset() {
        let mut vp = Viewport::new();
        vp.zoom(-1.0, Point::new(50.0, 50.0));
        vp.pan(Vec2::new(5.0, 5.0));
        vp.reset();
        assert_eq!(vp, Viewport::default());
    }

    #[test]
    fn test_zoom_percent() {
        let mut vp = Viewport::new();
        assert!((vp.zoom_percent() - 100.0).abs() < f64::EPSILON);
        vp.zoom(-1.0, Point::ZERO);
        assert!((vp.zoom_percent() - 110.0).abs() < f64::EPSILON);
    }
}
