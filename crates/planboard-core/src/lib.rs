//! Planboard Core Library
//!
//! Platform-agnostic scene interaction engine for the Planboard
//! vector-drawing editor: the shape model, the viewport transform,
//! geometric hit-testing, handle-based direct manipulation, and
//! snapshot-based undo/redo.

pub mod editor;
pub mod geom;
pub mod handles;
pub mod history;
pub mod scene;
pub mod shapes;
pub mod storage;
pub mod tools;
pub mod units;
pub mod viewport;

pub use editor::{Editor, PointerButton, Session};
pub use handles::{Handle, HandleKind};
pub use history::History;
pub use scene::{Scene, SceneError};
pub use shapes::{Circle, Color, Line, Rectangle, Shape, ShapeId, ShapeStyle};
pub use tools::ToolKind;
pub use viewport::Viewport;
