//! Scene assembly.
//!
//! [`PlotScene`] combines the geometry, the layer visibility state and the
//! label calibration into a complete [`SceneDescription`]. Vertices and the
//! plot point are cached per (scores, canvas) pair, so visibility-only
//! refreshes never recompute geometry.
//!
//! Diagnostics go through [`AdvisorySink`] as structured [`Advisory`]
//! events rather than a terminal, and the debug overlay is gated by an
//! explicit capability flag injected at construction, never inferred from
//! the build environment.

use serde::{Deserialize, Serialize};

use crate::calibration::Calibrator;
use crate::error::Result;
use crate::geometry::{to_cartesian, CanvasConfig, Point, TriangleVertices};
use crate::scene::layers::{Layer, LayerVisibility};
use crate::scene::{colors, Paint, SceneDescription, SceneElement, SceneItem, TextAnchor};
use crate::score::{Perspective, ScoreTriple};

/// Opacity for the corner shading regions.
const SHADING_OPACITY: f64 = 0.15;

/// Radius of the plot-point marker.
const POINT_RADIUS: f64 = 6.0;

/// Radius of the debug marker dot.
const DEBUG_DOT_RADIUS: f64 = 2.0;

/// A non-fatal diagnostic event emitted during scene assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    /// No `on_plot_calculated` callback was supplied; the computed point is
    /// not reported outward. Emitted at most once per assembler.
    MissingCallback,

    /// No scores were supplied at render time; the scene has no plot-point
    /// marker.
    MissingScores,

    /// The debug overlay was requested but the assembler was constructed
    /// without debug capability; the overlay is omitted.
    DebugOverlayUnavailable,
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCallback => {
                write!(f, "no plot callback configured; computed point not reported")
            }
            Self::MissingScores => {
                write!(f, "no scores supplied; rendering without a plot point")
            }
            Self::DebugOverlayUnavailable => {
                write!(f, "debug overlay requested but debug mode is not enabled")
            }
        }
    }
}

/// Receives structured advisory events from the assembler.
pub trait AdvisorySink {
    /// Record one advisory.
    fn record(&mut self, advisory: Advisory);
}

/// An [`AdvisorySink`] that collects advisories in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    advisories: Vec<Advisory>,
}

impl RecordingSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advisories recorded so far, in order.
    #[must_use]
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }
}

impl AdvisorySink for RecordingSink {
    fn record(&mut self, advisory: Advisory) {
        self.advisories.push(advisory);
    }
}

/// Callback invoked with the plot point after each recompute.
pub type PlotCallback = Box<dyn Fn(Point) + Send + Sync>;

/// Cached geometry for the last (scores, canvas) pair.
struct GeometryCache {
    canvas: CanvasConfig,
    scores: Option<ScoreTriple>,
    vertices: TriangleVertices,
    point: Option<Point>,
}

/// Assembles score, geometry, layer and calibration state into scenes.
///
/// # Example
///
/// ```
/// use worldview_plot::{
///     Calibrator, CanvasConfig, LayerVisibility, PlotScene, RecordingSink, ScoreTriple,
/// };
///
/// let mut scene = PlotScene::new(false);
/// let mut sink = RecordingSink::new();
/// let description = scene
///     .render(
///         Some(&ScoreTriple::new(20.0, 50.0, 30.0)),
///         &CanvasConfig::default(),
///         &LayerVisibility::all_visible(),
///         &Calibrator::new(),
///         &mut sink,
///     )
///     .unwrap();
/// assert!(description.plot_point.is_some());
/// ```
pub struct PlotScene {
    debug_enabled: bool,
    on_plot_calculated: Option<PlotCallback>,
    callback_advisory_sent: bool,
    cache: Option<GeometryCache>,
}

impl PlotScene {
    /// Create an assembler.
    ///
    /// `debug_enabled` is the explicit capability flag for the calibration
    /// overlay; production callers pass `false` and the overlay is then
    /// entirely inert.
    #[must_use]
    pub fn new(debug_enabled: bool) -> Self {
        Self {
            debug_enabled,
            on_plot_calculated: None,
            callback_advisory_sent: false,
            cache: None,
        }
    }

    /// Attach the callback invoked after each plot-point recompute.
    #[must_use]
    pub fn with_callback(mut self, callback: PlotCallback) -> Self {
        self.on_plot_calculated = Some(callback);
        self
    }

    /// Whether the debug overlay capability is enabled.
    #[must_use]
    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    /// Build the scene for the given inputs.
    ///
    /// Vertices and the plot point are recomputed only when `scores` or
    /// `canvas` differ from the previous call; layer-visibility or
    /// calibration changes alone reuse the cached geometry. The plot
    /// callback fires exactly once per recompute that yields a point.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::Error::DegenerateInput`] and
    /// [`crate::Error::NegativeScore`] from the coordinate transform; the
    /// scene cannot be computed without a valid simplex. Absent scores are
    /// not an error: the scene renders without a point marker and a
    /// [`Advisory::MissingScores`] event is recorded.
    pub fn render(
        &mut self,
        scores: Option<&ScoreTriple>,
        canvas: &CanvasConfig,
        layers: &LayerVisibility,
        calibrator: &Calibrator,
        sink: &mut dyn AdvisorySink,
    ) -> Result<SceneDescription> {
        let (vertices, point) = self.refresh_geometry(scores, canvas, sink)?;

        let mut items = Vec::new();
        for &layer in Layer::render_order() {
            if !layers.is_visible(layer) {
                continue;
            }
            match layer {
                Layer::Shading => push_shading(&mut items, &vertices),
                Layer::GridLines => push_grid_lines(&mut items, &vertices),
                Layer::Baseline => push_baseline(&mut items, &vertices),
                Layer::CategoryBoundaries => push_category_boundaries(&mut items, &vertices),
                Layer::TickLabels => push_labels(&mut items, &vertices, calibrator),
                Layer::PlotPoint => push_plot_point(&mut items, point),
                Layer::DebugOverlay => {
                    self.push_debug_overlay(&mut items, &vertices, canvas, calibrator, sink);
                }
            }
        }

        Ok(SceneDescription {
            canvas: canvas.clone(),
            items,
            plot_point: point,
        })
    }

    /// Recompute vertices and the plot point if scores or canvas changed.
    fn refresh_geometry(
        &mut self,
        scores: Option<&ScoreTriple>,
        canvas: &CanvasConfig,
        sink: &mut dyn AdvisorySink,
    ) -> Result<(TriangleVertices, Option<Point>)> {
        if let Some(cache) = &self.cache {
            if cache.canvas == *canvas && cache.scores.as_ref() == scores {
                return Ok((cache.vertices, cache.point));
            }
        }

        let vertices = TriangleVertices::from_canvas(canvas);
        let point = match scores {
            Some(triple) => Some(to_cartesian(triple, &vertices)?),
            None => {
                sink.record(Advisory::MissingScores);
                None
            }
        };

        if let Some(point) = point {
            match &self.on_plot_calculated {
                Some(callback) => callback(point),
                None if !self.callback_advisory_sent => {
                    sink.record(Advisory::MissingCallback);
                    self.callback_advisory_sent = true;
                }
                None => {}
            }
        }

        self.cache = Some(GeometryCache {
            canvas: canvas.clone(),
            scores: scores.cloned(),
            vertices,
            point,
        });
        Ok((vertices, point))
    }

    fn push_debug_overlay(
        &self,
        items: &mut Vec<SceneItem>,
        vertices: &TriangleVertices,
        canvas: &CanvasConfig,
        calibrator: &Calibrator,
        sink: &mut dyn AdvisorySink,
    ) {
        if !calibrator.overlay_requested() {
            return;
        }
        if !self.debug_enabled {
            sink.record(Advisory::DebugOverlayUnavailable);
            return;
        }

        let current = calibrator.current_label();
        let placement = calibrator.config().get(current);
        let anchor = vertices.anchor_for(current);

        if calibrator.show_dots() {
            items.push(SceneItem {
                layer: Layer::DebugOverlay,
                element: SceneElement::Circle {
                    center: Point::new(anchor.x + placement.x, anchor.y + placement.y),
                    radius: DEBUG_DOT_RADIUS,
                    paint: Paint::fill(colors::DEBUG_DOT),
                },
            });
        }

        if calibrator.show_coordinates() {
            items.push(SceneItem {
                layer: Layer::DebugOverlay,
                element: SceneElement::Text {
                    content: calibrator.readout(),
                    position: Point::new(
                        canvas.width - canvas.margins.right - 150.0,
                        canvas.margins.top + 20.0,
                    ),
                    anchor: TextAnchor::End,
                    rotation: 0.0,
                    class: "readout".to_string(),
                },
            });
        }
    }
}

/// Corner shading: one tinted region per perspective, bounded by the
/// vertex, the midpoints of its two edges and the centroid.
fn push_shading(items: &mut Vec<SceneItem>, vertices: &TriangleVertices) {
    let centroid = vertices.centroid();
    let regions = [
        (Perspective::Modern, vertices.top, vertices.left, vertices.right),
        (Perspective::PostModern, vertices.left, vertices.top, vertices.right),
        (Perspective::PreModern, vertices.right, vertices.top, vertices.left),
    ];
    for (perspective, corner, adjacent_a, adjacent_b) in regions {
        let color = perspective_color(perspective);
        items.push(SceneItem {
            layer: Layer::Shading,
            element: SceneElement::Polygon {
                points: vec![
                    corner,
                    corner.midpoint(&adjacent_a),
                    centroid,
                    corner.midpoint(&adjacent_b),
                ],
                paint: Paint::fill(color).with_opacity(SHADING_OPACITY),
            },
        });
    }
}

fn push_grid_lines(items: &mut Vec<SceneItem>, vertices: &TriangleVertices) {
    for line in vertices.grid_lines() {
        items.push(SceneItem {
            layer: Layer::GridLines,
            element: SceneElement::Segment {
                from: line.from,
                to: line.to,
                paint: Paint::stroke(colors::GRID, 1.0).with_dash(),
            },
        });
    }
}

/// Baseline triangle outline plus the tick marks along the bottom edge.
fn push_baseline(items: &mut Vec<SceneItem>, vertices: &TriangleVertices) {
    items.push(SceneItem {
        layer: Layer::Baseline,
        element: SceneElement::Polygon {
            points: vec![vertices.top, vertices.right, vertices.left],
            paint: Paint::stroke(colors::OUTLINE, 1.5),
        },
    });
    for tick in vertices.tick_marks() {
        items.push(SceneItem {
            layer: Layer::Baseline,
            element: SceneElement::Segment {
                from: tick.start,
                to: tick.end,
                paint: Paint::stroke(colors::OUTLINE, 1.0),
            },
        });
    }
}

/// The inner mix triangle joining the three edge midpoints.
fn push_category_boundaries(items: &mut Vec<SceneItem>, vertices: &TriangleVertices) {
    items.push(SceneItem {
        layer: Layer::CategoryBoundaries,
        element: SceneElement::Polygon {
            points: vec![
                vertices.top.midpoint(&vertices.left),
                vertices.top.midpoint(&vertices.right),
                vertices.left.midpoint(&vertices.right),
            ],
            paint: Paint::stroke(colors::OUTLINE, 1.0),
        },
    });
}

/// Tick numbers plus the three calibrated axis labels.
fn push_labels(items: &mut Vec<SceneItem>, vertices: &TriangleVertices, calibrator: &Calibrator) {
    for tick in vertices.tick_marks() {
        items.push(SceneItem {
            layer: Layer::TickLabels,
            element: SceneElement::Text {
                content: tick.percent.to_string(),
                position: tick.label_position,
                anchor: TextAnchor::Middle,
                rotation: 0.0,
                class: "tick-label".to_string(),
            },
        });
    }

    for &perspective in Perspective::all() {
        let placement = calibrator.config().get(perspective);
        let anchor = vertices.anchor_for(perspective);
        items.push(SceneItem {
            layer: Layer::TickLabels,
            element: SceneElement::Text {
                content: perspective.to_string(),
                position: Point::new(anchor.x + placement.x, anchor.y + placement.y),
                anchor: TextAnchor::Middle,
                rotation: placement.r,
                class: "label".to_string(),
            },
        });
    }
}

fn push_plot_point(items: &mut Vec<SceneItem>, point: Option<Point>) {
    let Some(center) = point else { return };
    items.push(SceneItem {
        layer: Layer::PlotPoint,
        element: SceneElement::Circle {
            center,
            radius: POINT_RADIUS,
            paint: Paint {
                fill: Some(colors::POINT.to_string()),
                stroke: Some("#ffffff".to_string()),
                stroke_width: 2.0,
                dashed: false,
                opacity: None,
            },
        },
    });
}

fn perspective_color(perspective: Perspective) -> &'static str {
    match perspective {
        Perspective::PreModern => colors::PREMODERN,
        Perspective::Modern => colors::MODERN,
        Perspective::PostModern => colors::POSTMODERN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn render_default(
        scene: &mut PlotScene,
        scores: Option<&ScoreTriple>,
        sink: &mut RecordingSink,
    ) -> SceneDescription {
        scene
            .render(
                scores,
                &CanvasConfig::default(),
                &LayerVisibility::all_visible(),
                &Calibrator::new(),
                sink,
            )
            .unwrap()
    }

    #[test]
    fn test_full_scene_layer_order() {
        let mut scene = PlotScene::new(false);
        let mut sink = RecordingSink::new();
        let scores = ScoreTriple::new(20.0, 50.0, 30.0);
        let description = render_default(&mut scene, Some(&scores), &mut sink);

        // Items must appear in render order: no later layer before an
        // earlier one.
        let order = Layer::render_order();
        let positions: Vec<usize> = description
            .items
            .iter()
            .map(|item| order.iter().position(|&l| l == item.layer).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);

        // Plot point present and last.
        assert!(description.plot_point.is_some());
        assert_eq!(description.items.last().unwrap().layer, Layer::PlotPoint);
    }

    #[test]
    fn test_point_matches_transform() {
        let mut scene = PlotScene::new(false);
        let mut sink = RecordingSink::new();
        let scores = ScoreTriple::new(20.0, 50.0, 30.0);
        let description = render_default(&mut scene, Some(&scores), &mut sink);
        let point = description.plot_point.unwrap();
        assert!((point.x - 365.0).abs() < 1e-9);
        assert!((point.y - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_callback_fires_once_per_score_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let mut scene = PlotScene::new(false).with_callback(Box::new(move |point| {
            seen_clone.lock().unwrap().push(point);
        }));
        let mut sink = RecordingSink::new();

        let scores = ScoreTriple::new(20.0, 50.0, 30.0);
        render_default(&mut scene, Some(&scores), &mut sink);
        // Visibility-only refresh: same scores, no second invocation.
        render_default(&mut scene, Some(&scores), &mut sink);
        assert_eq!(seen.lock().unwrap().len(), 1);

        let changed = ScoreTriple::new(30.0, 40.0, 30.0);
        render_default(&mut scene, Some(&changed), &mut sink);
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_callback_advisory_once() {
        let mut scene = PlotScene::new(false);
        let mut sink = RecordingSink::new();
        let a = ScoreTriple::new(20.0, 50.0, 30.0);
        let b = ScoreTriple::new(10.0, 60.0, 30.0);
        render_default(&mut scene, Some(&a), &mut sink);
        render_default(&mut scene, Some(&b), &mut sink);

        let count = sink
            .advisories()
            .iter()
            .filter(|&&adv| adv == Advisory::MissingCallback)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_missing_scores_degrades_gracefully() {
        let mut scene = PlotScene::new(false);
        let mut sink = RecordingSink::new();
        let description = render_default(&mut scene, None, &mut sink);

        assert!(description.plot_point.is_none());
        assert!(description.items_for_layer(Layer::PlotPoint).next().is_none());
        assert!(sink.advisories().contains(&Advisory::MissingScores));
        // The rest of the scene still renders.
        assert!(description.items_for_layer(Layer::Baseline).next().is_some());
    }

    #[test]
    fn test_degenerate_scores_propagate() {
        let mut scene = PlotScene::new(false);
        let mut sink = RecordingSink::new();
        let result = scene.render(
            Some(&ScoreTriple::new(0.0, 0.0, 0.0)),
            &CanvasConfig::default(),
            &LayerVisibility::all_visible(),
            &Calibrator::new(),
            &mut sink,
        );
        assert!(matches!(result, Err(crate::Error::DegenerateInput { .. })));
    }

    #[test]
    fn test_hidden_layers_omit_items() {
        let mut scene = PlotScene::new(false);
        let mut sink = RecordingSink::new();
        let mut layers = LayerVisibility::all_visible();
        layers.set_visible(Layer::GridLines, false);
        layers.set_visible(Layer::Shading, false);

        let scores = ScoreTriple::new(20.0, 50.0, 30.0);
        let description = scene
            .render(
                Some(&scores),
                &CanvasConfig::default(),
                &layers,
                &Calibrator::new(),
                &mut sink,
            )
            .unwrap();
        assert!(description.items_for_layer(Layer::GridLines).next().is_none());
        assert!(description.items_for_layer(Layer::Shading).next().is_none());
        assert!(description.items_for_layer(Layer::Baseline).next().is_some());
    }

    #[test]
    fn test_debug_overlay_gated_by_capability() {
        let mut sink = RecordingSink::new();
        let scores = ScoreTriple::new(20.0, 50.0, 30.0);

        // Production assembler: overlay requested but unavailable.
        let mut production = PlotScene::new(false);
        let description = render_default(&mut production, Some(&scores), &mut sink);
        assert!(description.items_for_layer(Layer::DebugOverlay).next().is_none());
        assert!(sink.advisories().contains(&Advisory::DebugOverlayUnavailable));

        // Debug assembler: dot plus readout.
        let mut debug = PlotScene::new(true);
        let mut debug_sink = RecordingSink::new();
        let description = render_default(&mut debug, Some(&scores), &mut debug_sink);
        let overlay: Vec<_> = description.items_for_layer(Layer::DebugOverlay).collect();
        assert_eq!(overlay.len(), 2);
        assert!(!debug_sink
            .advisories()
            .contains(&Advisory::DebugOverlayUnavailable));
    }

    #[test]
    fn test_label_placement_applies_calibration() {
        let mut scene = PlotScene::new(false);
        let mut sink = RecordingSink::new();
        let mut calibrator = Calibrator::new();
        calibrator.select_label("modern");
        calibrator.adjust(crate::calibration::Axis::X, 15.0);
        calibrator.adjust(crate::calibration::Axis::R, 45.0);

        let scores = ScoreTriple::new(20.0, 50.0, 30.0);
        let description = scene
            .render(
                Some(&scores),
                &CanvasConfig::default(),
                &LayerVisibility::all_visible(),
                &calibrator,
                &mut sink,
            )
            .unwrap();

        let modern_label = description
            .items_for_layer(Layer::TickLabels)
            .find_map(|item| match &item.element {
                SceneElement::Text {
                    content,
                    position,
                    rotation,
                    ..
                } if content == "Modern" => Some((*position, *rotation)),
                _ => None,
            })
            .unwrap();
        // Top vertex (400, 50) offset by (15, 0), rotated 45 degrees.
        assert!((modern_label.0.x - 415.0).abs() < 1e-9);
        assert!((modern_label.0.y - 50.0).abs() < 1e-9);
        assert!((modern_label.1 - 45.0).abs() < 1e-9);
    }
}
