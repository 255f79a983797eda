//! Unit conversion for dimension annotations.
//!
//! Shapes are stored in world units; the editor surfaces physical
//! dimensions in centimetres. The renderer and inspector consume the
//! label helpers as-is.

/// World units per centimetre of drawn geometry.
pub const PIXELS_PER_CM: f64 = 5.0;

/// Convert a world-unit length to centimetres.
pub fn world_to_cm(units: f64) -> f64 {
    units / PIXELS_PER_CM
}

/// Convert a centimetre length to world units.
pub fn cm_to_world(cm: f64) -> f64 {
    cm * PIXELS_PER_CM
}

/// Annotation label for a linear dimension, e.g. `12.3 cm`.
pub fn length_label(units: f64) -> String {
    format!("{:.1} cm", world_to_cm(units))
}

/// Annotation label for a circle given its radius, e.g. `Ø 4.0 cm`.
pub fn diameter_label(radius: f64) -> String {
    format!("Ø {:.1} cm", world_to_cm(radius * 2.0))
}
