//! Triangle vertex placement, tick marks and interior grid lines.
//!
//! [`TriangleVertices::from_canvas`] is the one place vertices are derived
//! from a canvas configuration. Earlier renderings of this plot carried
//! several disagreeing copies of the formula (margins added twice, or not at
//! all); every consumer now derives vertices here, so the placement stays
//! consistent across layout changes.

use serde::{Deserialize, Serialize};

use crate::geometry::{CanvasConfig, Point};
use crate::score::Perspective;

/// Tick spacing along the bottom edge, in percent.
const TICK_STEP: u32 = 10;

/// Length of a tick mark below the baseline, in pixels.
const TICK_LENGTH: f64 = 6.0;

/// Vertical offset from the baseline to a tick's numeric label.
const TICK_LABEL_OFFSET: f64 = 20.0;

/// The three vertices of the plot triangle, one per score axis.
///
/// The axis-to-vertex mapping is fixed: top = Modern, left = PostModern,
/// right = PreModern. It must not be permuted; the barycentric transform
/// and label anchoring both rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleVertices {
    /// Apex vertex (Modern axis).
    pub top: Point,
    /// Bottom-left vertex (PostModern axis).
    pub left: Point,
    /// Bottom-right vertex (PreModern axis).
    pub right: Point,
}

impl TriangleVertices {
    /// Derive the vertices for a canvas configuration.
    ///
    /// Margins are applied exactly once:
    ///
    /// - `top = (plot_width / 2 + margin.left, margin.top)`
    /// - `left = (margin.left, height - margin.bottom)`
    /// - `right = (width - margin.right, height - margin.bottom)`
    ///
    /// # Example
    ///
    /// ```
    /// use worldview_plot::{CanvasConfig, TriangleVertices};
    ///
    /// let v = TriangleVertices::from_canvas(&CanvasConfig::default());
    /// assert!((v.top.x - 400.0).abs() < 1e-12);
    /// assert!((v.top.y - 50.0).abs() < 1e-12);
    /// assert!((v.left.x - 50.0).abs() < 1e-12);
    /// assert!((v.right.x - 750.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_canvas(canvas: &CanvasConfig) -> Self {
        let m = canvas.margins;
        Self {
            top: Point::new(canvas.plot_width() / 2.0 + m.left, m.top),
            left: Point::new(m.left, canvas.height - m.bottom),
            right: Point::new(canvas.width - m.right, canvas.height - m.bottom),
        }
    }

    /// The vertex anchoring a perspective's axis label.
    #[must_use]
    pub fn anchor_for(&self, perspective: Perspective) -> Point {
        match perspective {
            Perspective::PreModern => self.right,
            Perspective::Modern => self.top,
            Perspective::PostModern => self.left,
        }
    }

    /// Centroid of the triangle.
    #[must_use]
    pub fn centroid(&self) -> Point {
        Point::new(
            (self.top.x + self.left.x + self.right.x) / 3.0,
            (self.top.y + self.left.y + self.right.y) / 3.0,
        )
    }

    /// Point at `t` in `[0, 1]` along the bottom edge, left to right.
    #[must_use]
    pub fn bottom_edge_point(&self, t: f64) -> Point {
        Point::new(
            self.left.x + t * (self.right.x - self.left.x),
            self.left.y + t * (self.right.y - self.left.y),
        )
    }

    /// Tick marks at every 10% step along the bottom edge.
    ///
    /// Each tick is a short perpendicular mark below the baseline plus a
    /// numeric label (`0..=100` step 10).
    #[must_use]
    pub fn tick_marks(&self) -> Vec<TickMark> {
        (0..=100)
            .step_by(TICK_STEP as usize)
            .map(|percent| {
                let base = self.bottom_edge_point(f64::from(percent) / 100.0);
                TickMark {
                    percent,
                    start: base,
                    end: Point::new(base.x, base.y + TICK_LENGTH),
                    label_position: Point::new(base.x, base.y + TICK_LABEL_OFFSET),
                }
            })
            .collect()
    }

    /// Interior grid lines at every 10% step between 10 and 90.
    ///
    /// Each line runs from the bottom-edge step point to the top vertex,
    /// tracing a constant-percentage contour. Rendered dashed and thin,
    /// distinct from the baseline triangle.
    #[must_use]
    pub fn grid_lines(&self) -> Vec<GridLine> {
        (TICK_STEP..100)
            .step_by(TICK_STEP as usize)
            .map(|percent| GridLine {
                percent,
                from: self.bottom_edge_point(f64::from(percent) / 100.0),
                to: self.top,
            })
            .collect()
    }
}

/// A tick mark on the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    /// Percentage this tick marks (0..=100).
    pub percent: u32,
    /// Start of the perpendicular mark (on the baseline).
    pub start: Point,
    /// End of the perpendicular mark (below the baseline).
    pub end: Point,
    /// Where the numeric label is placed.
    pub label_position: Point,
}

/// An interior constant-percentage contour line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    /// Percentage this contour represents (10..=90).
    pub percent: u32,
    /// Start point on the bottom edge.
    pub from: Point,
    /// End point at the top vertex.
    pub to: Point,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_vertices() -> TriangleVertices {
        TriangleVertices::from_canvas(&CanvasConfig::default())
    }

    #[test]
    fn test_vertices_default_canvas() {
        let v = default_vertices();
        assert_eq!(v.top, Point::new(400.0, 50.0));
        assert_eq!(v.left, Point::new(50.0, 650.0));
        assert_eq!(v.right, Point::new(750.0, 650.0));
    }

    #[test]
    fn test_vertices_asymmetric_margins() {
        let canvas = CanvasConfig::builder()
            .width(800.0)
            .height(700.0)
            .margins(crate::geometry::Margins {
                top: 20.0,
                right: 30.0,
                bottom: 40.0,
                left: 10.0,
            })
            .build();
        let v = TriangleVertices::from_canvas(&canvas);
        // plot_width = 800 - 10 - 30 = 760
        assert_eq!(v.top, Point::new(390.0, 20.0));
        assert_eq!(v.left, Point::new(10.0, 660.0));
        assert_eq!(v.right, Point::new(770.0, 660.0));
    }

    #[test]
    fn test_anchor_mapping_is_fixed() {
        let v = default_vertices();
        assert_eq!(v.anchor_for(Perspective::Modern), v.top);
        assert_eq!(v.anchor_for(Perspective::PostModern), v.left);
        assert_eq!(v.anchor_for(Perspective::PreModern), v.right);
    }

    #[test]
    fn test_tick_marks() {
        let v = default_vertices();
        let ticks = v.tick_marks();
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0].percent, 0);
        assert_eq!(ticks[10].percent, 100);
        // First tick sits on the left vertex, last on the right.
        assert_eq!(ticks[0].start, v.left);
        assert_eq!(ticks[10].start, v.right);
        // Marks extend below the baseline.
        for t in &ticks {
            assert!(t.end.y > t.start.y);
            assert!(t.label_position.y > t.end.y);
        }
    }

    #[test]
    fn test_grid_lines() {
        let v = default_vertices();
        let lines = v.grid_lines();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0].percent, 10);
        assert_eq!(lines[8].percent, 90);
        for line in &lines {
            assert_eq!(line.to, v.top);
            assert!((line.from.y - v.left.y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_centroid() {
        let v = default_vertices();
        let c = v.centroid();
        assert!((c.x - 400.0).abs() < 1e-9);
        assert!((c.y - 450.0).abs() < 1e-9);
    }
}
