//! Ordered scene model and its interchange format.

use crate::shapes::{Shape, ShapeId};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when loading a serialized scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The input was not an array of shape records.
    #[error("invalid scene format: {0}")]
    InvalidFormat(String),
}

/// An ordered sequence of shapes.
///
/// Order is paint and pick priority: later entries draw on top and are
/// hit-tested first. Shapes append on creation and otherwise keep their
/// position. Serializes transparently as the shape array itself, which
/// is the on-disk and remote-store format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of the scene.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Remove the shape with the given id, returning it if present.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id() == id)?;
        Some(self.shapes.remove(index))
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.get(id).is_some()
    }

    /// Shapes in paint order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Find the topmost shape at a world point, if any.
    ///
    /// Iterates back-to-front so the most recently drawn hit wins.
    pub fn pick(&self, point: Point, scale: f64) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.hit_test(point, scale))
            .map(|s| s.id())
    }

    /// Serialize to the JSON interchange format (an array of records).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a scene from the JSON interchange format.
    ///
    /// Anything that is not an array of shape records fails with
    /// [`SceneError::InvalidFormat`].
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        serde_json::from_str(json).map_err(|e| SceneError::InvalidFormat(e.to_string()))
    }
}
