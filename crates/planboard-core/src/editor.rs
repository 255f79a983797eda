//! Editor state machine: gestures, selection, and scene commands.
//!
//! The [`Editor`] owns the scene, viewport, selection, and history, and
//! is driven synchronously by host input events (pointer, wheel, tool
//! and command invocations). Every gesture transform is recomputed from
//! the snapshot taken at pointer-down plus the current pointer, never
//! incrementally from the previous frame.

use crate::geom;
use crate::handles::{self, Cardinal, Endpoint, HandleKind};
use crate::history::History;
use crate::scene::{Scene, SceneError};
use crate::shapes::{Color, Shape, ShapeId, ShapeStyle};
use crate::tools::{self, ToolKind, MIN_SHAPE_SIZE};
use crate::units;
use crate::viewport::Viewport;
use kurbo::{Point, Vec2};
use std::f64::consts::FRAC_PI_2;

/// Pointer buttons the editor distinguishes. Middle always pans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
}

/// The gesture in progress between pointer-down and pointer-up.
///
/// States are mutually exclusive; pointer-up always returns to `Idle`.
#[derive(Debug, Clone, Default)]
pub enum Session {
    #[default]
    Idle,
    /// Drawing a new shape. Start and current points are kept in screen
    /// space and mapped to world space when the preview or the final
    /// shape is produced.
    Drawing {
        tool: ToolKind,
        start_screen: Point,
        current_screen: Point,
    },
    /// Moving the selected shape from a snapshot taken at pointer-down.
    Dragging { snapshot: Shape, anchor: Point },
    /// Dragging a resize handle of the selected shape.
    Resizing {
        handle: HandleKind,
        snapshot: Shape,
        anchor: Point,
    },
    /// Dragging the rotation handle of the selected shape.
    Rotating { snapshot: Shape },
    /// Middle-button panning of the viewport.
    Panning { last_screen: Point },
}

/// The complete interaction state of one open drawing.
#[derive(Debug, Clone)]
pub struct Editor {
    scene: Scene,
    viewport: Viewport,
    history: History,
    selection: Option<ShapeId>,
    tool: ToolKind,
    session: Session,
    style: ShapeStyle,
    snap_held: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create an editor with an empty scene as the history baseline.
    pub fn new() -> Self {
        let scene = Scene::new();
        let history = History::new(&scene);
        Self {
            scene,
            viewport: Viewport::new(),
            history,
            selection: None,
            tool: ToolKind::Select,
            session: Session::Idle,
            style: ShapeStyle::default(),
            snap_held: false,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn selection(&self) -> Option<ShapeId> {
        self.selection
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selection.and_then(|id| self.scene.get(id))
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Style applied to newly drawn shapes.
    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    /// Activate a tool. Switching tools clears the selection and aborts
    /// any gesture in progress.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
        self.selection = None;
        self.session = Session::Idle;
    }

    /// Update the snap-modifier state (held while Shift is down).
    pub fn set_snap_held(&mut self, held: bool) {
        self.snap_held = held;
    }

    /// Classify a pointer-down into the gesture it starts.
    pub fn pointer_down(&mut self, screen: Point, button: PointerButton) {
        if button == PointerButton::Middle {
            self.session = Session::Panning {
                last_screen: screen,
            };
            return;
        }

        if self.tool.is_drawing() {
            self.session = Session::Drawing {
                tool: self.tool,
                start_screen: screen,
                current_screen: screen,
            };
            return;
        }

        let world = self.viewport.screen_to_world(screen);

        // Handles of the current selection win over body hits: the
        // rotation handle sits outside the shape entirely.
        if let Some(id) = self.selection {
            if let Some(shape) = self.scene.get(id) {
                if let Some(handle) = handles::handle_at(shape, world, self.viewport.scale) {
                    let snapshot = shape.clone();
                    self.session = match handle {
                        HandleKind::Rotate => Session::Rotating { snapshot },
                        _ => Session::Resizing {
                            handle,
                            snapshot,
                            anchor: world,
                        },
                    };
                    return;
                }
            }
        }

        match self.scene.pick(world, self.viewport.scale) {
            Some(id) => {
                self.selection = Some(id);
                if let Some(shape) = self.scene.get(id) {
                    self.session = Session::Dragging {
                        snapshot: shape.clone(),
                        anchor: world,
                    };
                }
            }
            None => self.selection = None,
        }
    }

    /// Advance the active gesture to the current pointer position.
    pub fn pointer_move(&mut self, screen: Point) {
        match &mut self.session {
            Session::Idle => {}
            Session::Panning { last_screen } => {
                let delta = Vec2::new(screen.x - last_screen.x, screen.y - last_screen.y);
                *last_screen = screen;
                self.viewport.pan(delta);
            }
            Session::Drawing { current_screen, .. } => {
                *current_screen = screen;
            }
            Session::Dragging { snapshot, anchor } => {
                let world = self.viewport.screen_to_world(screen);
                let delta = Vec2::new(world.x - anchor.x, world.y - anchor.y);
                let Some(id) = self.selection else { return };
                if let Some(shape) = self.scene.get_mut(id) {
                    apply_move(shape, snapshot, delta);
                }
            }
            Session::Resizing {
                handle,
                snapshot,
                anchor,
            } => {
                let world = self.viewport.screen_to_world(screen);
                let min_size = MIN_SHAPE_SIZE / self.viewport.scale;
                let Some(id) = self.selection else { return };
                if let Some(shape) = self.scene.get_mut(id) {
                    apply_resize(
                        shape,
                        *handle,
                        snapshot,
                        *anchor,
                        world,
                        min_size,
                        self.snap_held,
                    );
                }
            }
            Session::Rotating { snapshot } => {
                let world = self.viewport.screen_to_world(screen);
                let Some(id) = self.selection else { return };
                if let Some(shape) = self.scene.get_mut(id) {
                    apply_rotation(shape, snapshot, world, self.snap_held);
                }
            }
        }
    }

    /// Finish the active gesture and return to `Idle`.
    ///
    /// Scene-mutating gestures commit exactly one history entry; pure
    /// panning commits nothing. A drawing gesture below the minimum
    /// size is discarded without touching scene or history.
    pub fn pointer_up(&mut self, screen: Point) {
        match std::mem::take(&mut self.session) {
            Session::Idle | Session::Panning { .. } => {}
            Session::Drawing {
                tool, start_screen, ..
            } => {
                let start = self.viewport.screen_to_world(start_screen);
                let end = self.viewport.screen_to_world(screen);
                if let Some(shape) = tools::shape_from_drag(tool, start, end, &self.style) {
                    if tools::meets_min_size(&shape, self.viewport.scale) {
                        log::debug!("created {:?} shape {}", tool, shape.id());
                        self.scene.push(shape);
                        self.history.commit(&self.scene);
                    }
                }
                // Drawing is one-shot: hand control back to Select.
                self.set_tool(ToolKind::Select);
            }
            Session::Dragging { .. } | Session::Resizing { .. } | Session::Rotating { .. } => {
                self.history.commit(&self.scene);
            }
        }
    }

    /// Zoom one step at the wheel position. Not a history event.
    pub fn wheel(&mut self, delta: f64, position: Point) {
        self.viewport.zoom(delta, position);
    }

    /// Reset the viewport to identity. Not a history event.
    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    /// Pending preview geometry while a drawing gesture is active.
    /// Derived per call; never part of the committed scene.
    pub fn preview_shape(&self) -> Option<Shape> {
        let Session::Drawing {
            tool,
            start_screen,
            current_screen,
        } = &self.session
        else {
            return None;
        };
        let start = self.viewport.screen_to_world(*start_screen);
        let end = self.viewport.screen_to_world(*current_screen);
        tools::shape_from_drag(*tool, start, end, &self.style)
    }

    /// Delete the selected shape, clear the selection, and commit.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selection.take() else {
            return false;
        };
        if self.scene.remove(id).is_none() {
            return false;
        }
        log::debug!("deleted shape {id}");
        self.history.commit(&self.scene);
        true
    }

    pub fn undo(&mut self) {
        if let Some(scene) = self.history.undo() {
            self.scene = scene;
            self.selection = None;
        }
    }

    pub fn redo(&mut self) {
        if let Some(scene) = self.history.redo() {
            self.scene = scene;
            self.selection = None;
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Serialize the live scene in the interchange format.
    pub fn scene_json(&self) -> Result<String, serde_json::Error> {
        self.scene.to_json()
    }

    /// Replace the live scene with one parsed from JSON.
    ///
    /// On a format error the live scene, selection, and history are
    /// left untouched.
    pub fn load_scene_json(&mut self, json: &str) -> Result<(), SceneError> {
        let scene = Scene::from_json(json)?;
        self.install_scene(scene);
        Ok(())
    }

    /// Install an already-parsed scene (e.g. fetched from the remote
    /// store). Clears selection and restarts history at the new scene.
    pub fn install_scene(&mut self, scene: Scene) {
        log::info!("loaded scene with {} shapes", scene.len());
        self.scene = scene;
        self.selection = None;
        self.session = Session::Idle;
        self.history.reset(&self.scene);
    }

    // --- Property edits -------------------------------------------------
    //
    // Non-blocking replacements for the inspector's change handlers:
    // each mutates the selected shape and commits one history entry.

    /// Apply `f` to the selected shape; commit when it reports a change.
    fn with_selected<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut Shape) -> bool,
    {
        let Some(id) = self.selection else {
            return false;
        };
        let Some(shape) = self.scene.get_mut(id) else {
            return false;
        };
        if !f(shape) {
            return false;
        }
        self.history.commit(&self.scene);
        true
    }

    /// Rename the selected shape. A blank name clears it.
    pub fn rename_selected(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        let name = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self.with_selected(|shape| {
            shape.set_name(name);
            true
        })
    }

    pub fn set_selected_stroke_color(&mut self, color: Color) -> bool {
        let applied = self.with_selected(|shape| {
            shape.set_stroke_color(color.clone());
            true
        });
        if applied {
            self.style.stroke_color = color;
        }
        applied
    }

    /// Set the fill color. Fails for lines, which have no fill.
    pub fn set_selected_fill_color(&mut self, color: Color) -> bool {
        let applied = self.with_selected(|shape| shape.set_fill_color(color.clone()));
        if applied {
            self.style.fill_color = color;
        }
        applied
    }

    pub fn set_selected_line_width(&mut self, width: f64) -> bool {
        let applied = self.with_selected(|shape| {
            shape.set_line_width(width);
            true
        });
        if applied {
            self.style.line_width = width;
        }
        applied
    }

    /// Set the rotation in degrees. A line is re-aimed about its
    /// midpoint preserving length; a circle has no observable rotation.
    pub fn set_selected_rotation_degrees(&mut self, degrees: f64) -> bool {
        self.with_selected(|shape| match shape {
            Shape::Rectangle(rect) => {
                rect.rotation = degrees.to_radians();
                true
            }
            Shape::Line(line) => {
                let mid = line.midpoint();
                let half = line.length() / 2.0;
                line.aim(mid, degrees.to_radians(), half);
                true
            }
            Shape::Circle(_) => false,
        })
    }

    /// Set a rectangle's width in centimetres.
    pub fn set_selected_width_cm(&mut self, cm: f64) -> bool {
        self.with_selected(|shape| match shape {
            Shape::Rectangle(rect) => {
                rect.width = units::cm_to_world(cm).max(0.0);
                true
            }
            _ => false,
        })
    }

    /// Set a rectangle's height in centimetres.
    pub fn set_selected_height_cm(&mut self, cm: f64) -> bool {
        self.with_selected(|shape| match shape {
            Shape::Rectangle(rect) => {
                rect.height = units::cm_to_world(cm).max(0.0);
                true
            }
            _ => false,
        })
    }

    /// Set a line's length in centimetres, keeping its start point and
    /// direction.
    pub fn set_selected_length_cm(&mut self, cm: f64) -> bool {
        self.with_selected(|shape| match shape {
            Shape::Line(line) => {
                let angle = line.angle();
                let length = units::cm_to_world(cm).max(0.0);
                line.x2 = line.x1 + length * angle.cos();
                line.y2 = line.y1 + length * angle.sin();
                true
            }
            _ => false,
        })
    }

    /// Set a circle's diameter in centimetres.
    pub fn set_selected_diameter_cm(&mut self, cm: f64) -> bool {
        self.with_selected(|shape| match shape {
            Shape::Circle(circle) => {
                circle.radius = (units::cm_to_world(cm) / 2.0).max(0.0);
                true
            }
            _ => false,
        })
    }
}

/// Move: snapshot position plus the gesture delta, applied to the
/// variant's coordinate fields.
fn apply_move(shape: &mut Shape, snapshot: &Shape, delta: Vec2) {
    match (shape, snapshot) {
        (Shape::Rectangle(rect), Shape::Rectangle(orig)) => {
            rect.x = orig.x + delta.x;
            rect.y = orig.y + delta.y;
        }
        (Shape::Line(line), Shape::Line(orig)) => {
            line.x1 = orig.x1 + delta.x;
            line.y1 = orig.y1 + delta.y;
            line.x2 = orig.x2 + delta.x;
            line.y2 = orig.y2 + delta.y;
        }
        (Shape::Circle(circle), Shape::Circle(orig)) => {
            circle.cx = orig.cx + delta.x;
            circle.cy = orig.cy + delta.y;
        }
        _ => {}
    }
}

/// Resize against the pointer, per variant:
///
/// - Rectangle: the pointer delta is rotated into the unrotated frame
///   by `-rotation` to adjust width/height; left/top handles also shift
///   the origin so the opposite edge stays put. Both extents clamp to
///   `min_size`.
/// - Line: the grabbed endpoint follows the pointer; with snap held the
///   angle from the other endpoint is rounded to 45° and the endpoint
///   re-projected at the pointer distance.
/// - Circle: radius follows the pointer along the handle's axis,
///   clamped to `min_size`.
fn apply_resize(
    shape: &mut Shape,
    handle: HandleKind,
    snapshot: &Shape,
    anchor: Point,
    pointer: Point,
    min_size: f64,
    snap: bool,
) {
    match (shape, snapshot) {
        (Shape::Rectangle(rect), Shape::Rectangle(orig)) => {
            let dx = pointer.x - anchor.x;
            let dy = pointer.y - anchor.y;
            let (sin, cos) = (-orig.rotation).sin_cos();
            let local_dx = dx * cos - dy * sin;
            let local_dy = dx * sin + dy * cos;

            let mut x = orig.x;
            let mut y = orig.y;
            let mut width = orig.width;
            let mut height = orig.height;

            if handle.adjusts_right() {
                width += local_dx;
            }
            if handle.adjusts_left() {
                x += dx;
                width -= local_dx;
            }
            if handle.adjusts_bottom() {
                height += local_dy;
            }
            if handle.adjusts_top() {
                y += dy;
                height -= local_dy;
            }

            rect.x = x;
            rect.y = y;
            rect.width = width.max(min_size);
            rect.height = height.max(min_size);
        }
        (Shape::Line(line), Shape::Line(_)) => {
            let HandleKind::Endpoint(endpoint) = handle else {
                return;
            };
            let target = if snap {
                let fixed = match endpoint {
                    Endpoint::Start => line.end(),
                    Endpoint::End => line.start(),
                };
                let dx = pointer.x - fixed.x;
                let dy = pointer.y - fixed.y;
                let length = dx.hypot(dy);
                let angle = geom::snap_angle(dy.atan2(dx));
                Point::new(fixed.x + length * angle.cos(), fixed.y + length * angle.sin())
            } else {
                pointer
            };
            match endpoint {
                Endpoint::Start => {
                    line.x1 = target.x;
                    line.y1 = target.y;
                }
                Endpoint::End => {
                    line.x2 = target.x;
                    line.y2 = target.y;
                }
            }
        }
        (Shape::Circle(circle), Shape::Circle(_)) => {
            let HandleKind::Cardinal(direction) = handle else {
                return;
            };
            let radius = match direction {
                Cardinal::North => circle.cy - pointer.y,
                Cardinal::South => pointer.y - circle.cy,
                Cardinal::West => circle.cx - pointer.x,
                Cardinal::East => pointer.x - circle.cx,
            };
            circle.radius = radius.max(min_size);
        }
        _ => {}
    }
}

/// Rotate toward the pointer about the snapshot's center.
///
/// The rectangle handle points up at rotation 0, so its angle gets a
/// +90° correction before optional 45° snapping. A rectangle stores the
/// angle; a line is re-aimed about its midpoint preserving length.
fn apply_rotation(shape: &mut Shape, snapshot: &Shape, pointer: Point, snap: bool) {
    match (shape, snapshot) {
        (Shape::Rectangle(rect), Shape::Rectangle(orig)) => {
            let center = orig.center();
            let mut angle = (pointer.y - center.y).atan2(pointer.x - center.x) + FRAC_PI_2;
            if snap {
                angle = geom::snap_angle(angle);
            }
            rect.rotation = angle;
        }
        (Shape::Line(line), Shape::Line(orig)) => {
            let center = orig.midpoint();
            let mut angle = (pointer.y - center.y).atan2(pointer.x - center.x);
            if snap {
                angle = geom::snap_angle(angle);
            }
            line.aim(center, angle, orig.length() / 2.0);
        }
        _ => {}
    }
}
