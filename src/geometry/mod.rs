//! Canvas configuration and triangle geometry.
//!
//! This module provides the coordinate infrastructure for the ternary plot:
//!
//! - [`Point`] and [`Margins`]: canvas-pixel primitives
//! - [`CanvasConfig`]: canvas size and margins, immutable per render pass
//! - [`triangle::TriangleVertices`]: the single authoritative vertex formula
//! - [`transform::to_cartesian`]: the barycentric coordinate transform

pub mod transform;
pub mod triangle;

pub use transform::to_cartesian;
pub use triangle::{GridLine, TickMark, TriangleVertices};

use serde::{Deserialize, Serialize};

/// A 2-D point in canvas-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position, increasing rightward.
    pub x: f64,
    /// Vertical position, increasing downward (SVG convention).
    pub y: f64,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between this point and another.
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Margins around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
}

impl Margins {
    /// Uniform margins on all four sides.
    #[must_use]
    pub fn uniform(size: f64) -> Self {
        Self {
            top: size,
            right: size,
            bottom: size,
            left: size,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(50.0)
    }
}

/// Canvas size and margins for a render pass.
///
/// Determines the plot area and therefore the triangle's vertex placement.
/// Treated as immutable once handed to the assembler; a changed canvas is a
/// new configuration.
///
/// # Example
///
/// ```
/// use worldview_plot::CanvasConfig;
///
/// let canvas = CanvasConfig::builder()
///     .width(800.0)
///     .height(700.0)
///     .margin(50.0)
///     .build();
/// assert!((canvas.plot_width() - 700.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels.
    pub width: f64,

    /// Canvas height in pixels.
    pub height: f64,

    /// Margins around the plot area.
    pub margins: Margins,
}

impl CanvasConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> CanvasConfigBuilder {
        CanvasConfigBuilder::default()
    }

    /// Width of the plot area (canvas width minus horizontal margins).
    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    /// Height of the plot area (canvas height minus vertical margins).
    #[must_use]
    pub fn plot_height(&self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }
}

impl Default for CanvasConfig {
    /// The canvas the survey plot has always used: 800x700 with 50px margins.
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 700.0,
            margins: Margins::default(),
        }
    }
}

/// Builder for [`CanvasConfig`].
#[derive(Debug, Default)]
pub struct CanvasConfigBuilder {
    width: Option<f64>,
    height: Option<f64>,
    margins: Option<Margins>,
}

impl CanvasConfigBuilder {
    /// Set the canvas width.
    #[must_use]
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the canvas height.
    #[must_use]
    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set uniform margins on all four sides.
    #[must_use]
    pub fn margin(mut self, size: f64) -> Self {
        self.margins = Some(Margins::uniform(size));
        self
    }

    /// Set per-side margins.
    #[must_use]
    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = Some(margins);
        self
    }

    /// Build the configuration, falling back to the 800x700 default.
    #[must_use]
    pub fn build(self) -> CanvasConfig {
        let default = CanvasConfig::default();
        CanvasConfig {
            width: self.width.unwrap_or(default.width),
            height: self.height.unwrap_or(default.height),
            margins: self.margins.unwrap_or(default.margins),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas() {
        let c = CanvasConfig::default();
        assert!((c.width - 800.0).abs() < 1e-12);
        assert!((c.height - 700.0).abs() < 1e-12);
        assert!((c.plot_width() - 700.0).abs() < 1e-12);
        assert!((c.plot_height() - 600.0).abs() < 1e-12);
    }

    #[test]
    fn test_builder_partial() {
        let c = CanvasConfig::builder().width(1000.0).build();
        assert!((c.width - 1000.0).abs() < 1e-12);
        assert!((c.height - 700.0).abs() < 1e-12);
        assert!((c.margins.left - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_midpoint() {
        let m = Point::new(0.0, 0.0).midpoint(&Point::new(10.0, 4.0));
        assert!((m.x - 5.0).abs() < 1e-12);
        assert!((m.y - 2.0).abs() < 1e-12);
    }
}
