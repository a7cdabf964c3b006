//! Scene description and composition.
//!
//! A rendered plot is a [`SceneDescription`]: an ordered list of drawable
//! elements, each tagged with the [`layers::Layer`] that produced it. The
//! description is backend-neutral; [`svg::render_svg`] turns it into SVG.
//!
//! - [`layers`]: layer identifiers, visibility state, draw order
//! - [`assembler`]: the [`assembler::PlotScene`] that builds scenes
//! - [`svg`]: SVG backend

pub mod assembler;
pub mod layers;
pub mod svg;

pub use assembler::{Advisory, AdvisorySink, PlotCallback, PlotScene, RecordingSink};
pub use layers::{Layer, LayerVisibility};
pub use svg::render_svg;

use serde::{Deserialize, Serialize};

use crate::geometry::{CanvasConfig, Point};

/// Fill and stroke styling for a shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paint {
    /// Fill color (CSS color string), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,

    /// Stroke color, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,

    /// Stroke width in pixels.
    #[serde(default)]
    pub stroke_width: f64,

    /// Whether the stroke is dashed (reduced visual weight).
    #[serde(default)]
    pub dashed: bool,

    /// Opacity in `[0, 1]`; 1.0 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Paint {
    /// Stroke-only paint.
    #[must_use]
    pub fn stroke(color: impl Into<String>, width: f64) -> Self {
        Self {
            stroke: Some(color.into()),
            stroke_width: width,
            ..Self::default()
        }
    }

    /// Fill-only paint.
    #[must_use]
    pub fn fill(color: impl Into<String>) -> Self {
        Self {
            fill: Some(color.into()),
            ..Self::default()
        }
    }

    /// Mark the stroke as dashed.
    #[must_use]
    pub fn with_dash(mut self) -> Self {
        self.dashed = true;
        self
    }

    /// Set the opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// Horizontal text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    /// Anchor at the start of the text.
    Start,
    /// Anchor at the middle.
    #[default]
    Middle,
    /// Anchor at the end.
    End,
}

impl TextAnchor {
    /// SVG `text-anchor` attribute value.
    #[must_use]
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// A single drawable element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SceneElement {
    /// Closed polygon.
    Polygon {
        /// Vertices in draw order.
        points: Vec<Point>,
        /// Styling.
        paint: Paint,
    },

    /// Straight line segment.
    Segment {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Styling.
        paint: Paint,
    },

    /// Circle marker.
    Circle {
        /// Center.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Styling.
        paint: Paint,
    },

    /// Positioned text, optionally rotated around its anchor point.
    Text {
        /// The text content.
        content: String,
        /// Anchor position.
        position: Point,
        /// Horizontal anchoring.
        anchor: TextAnchor,
        /// Rotation in degrees around `position`; 0 for none.
        rotation: f64,
        /// CSS class for the text style.
        class: String,
    },
}

/// A drawable element tagged with its producing layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneItem {
    /// Layer this element belongs to.
    pub layer: Layer,
    /// The element itself.
    pub element: SceneElement,
}

/// A complete renderable scene.
///
/// Items are pre-sorted in composition order (back to front); a backend
/// draws them as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Canvas this scene was built for.
    pub canvas: CanvasConfig,

    /// Drawable items in composition order.
    pub items: Vec<SceneItem>,

    /// The computed plot point, if scores were supplied and valid.
    pub plot_point: Option<Point>,
}

impl SceneDescription {
    /// Items belonging to a specific layer.
    pub fn items_for_layer(&self, layer: Layer) -> impl Iterator<Item = &SceneItem> {
        self.items.iter().filter(move |item| item.layer == layer)
    }
}

/// Color palette for the plot.
pub mod colors {
    /// PreModern region tint.
    pub const PREMODERN: &str = "#e67e22";
    /// Modern region tint.
    pub const MODERN: &str = "#3498db";
    /// PostModern region tint.
    pub const POSTMODERN: &str = "#9b59b6";
    /// Plot-point marker fill.
    pub const POINT: &str = "#e74c3c";
    /// Debug marker dot fill.
    pub const DEBUG_DOT: &str = "#e74c3c";
    /// Baseline and boundary stroke.
    pub const OUTLINE: &str = "#333333";
    /// Grid line stroke.
    pub const GRID: &str = "#b0b0b0";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_builders() {
        let p = Paint::stroke("#333333", 1.5).with_dash();
        assert_eq!(p.stroke.as_deref(), Some("#333333"));
        assert!(p.dashed);
        assert!(p.fill.is_none());

        let f = Paint::fill("#e74c3c").with_opacity(0.2);
        assert_eq!(f.fill.as_deref(), Some("#e74c3c"));
        assert_eq!(f.opacity, Some(0.2));
    }

    #[test]
    fn test_text_anchor_svg() {
        assert_eq!(TextAnchor::Middle.as_svg(), "middle");
        assert_eq!(TextAnchor::End.as_svg(), "end");
    }
}
