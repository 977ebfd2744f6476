//! Per-feature rendering style resolution
//!
//! Pure mapping from (layer color, active flag) to a concrete style. The
//! active stroke is a fixed neutral gray regardless of layer color: that
//! asymmetry is the visual cue that a feature is selected, independent of
//! which layer owns it.

use serde::{Deserialize, Serialize};

/// Stroke color applied to the active feature, whatever the layer color.
pub const ACTIVE_STROKE_COLOR: &str = "#444444";

const INACTIVE_WEIGHT: f32 = 2.0;
const ACTIVE_WEIGHT: f32 = 4.0;
const INACTIVE_FILL_OPACITY: f32 = 0.3;
const ACTIVE_FILL_OPACITY: f32 = 0.7;

/// Concrete rendering style handed to the map widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub weight: f32,
    pub stroke_color: String,
    pub stroke_opacity: f32,
    pub fill_color: String,
    pub fill_opacity: f32,
}

/// Resolve the style for one feature. Deterministic, no side effects.
pub fn resolve(base_color: &str, is_active: bool) -> Style {
    if is_active {
        Style {
            weight: ACTIVE_WEIGHT,
            stroke_color: ACTIVE_STROKE_COLOR.to_string(),
            stroke_opacity: 1.0,
            fill_color: base_color.to_string(),
            fill_opacity: ACTIVE_FILL_OPACITY,
        }
    } else {
        Style {
            weight: INACTIVE_WEIGHT,
            stroke_color: base_color.to_string(),
            stroke_opacity: 1.0,
            fill_color: base_color.to_string(),
            fill_opacity: INACTIVE_FILL_OPACITY,
        }
    }
}
