//! Layer identifiers, visibility state and the fixed draw order.

use serde::{Deserialize, Serialize};

/// A visual layer of the rendered scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Corner shading tinting each perspective's region.
    Shading,
    /// Interior constant-percentage contour lines.
    GridLines,
    /// Baseline triangle outline and tick marks.
    Baseline,
    /// Category boundary shapes (the inner mix triangle).
    CategoryBoundaries,
    /// Tick numbers and axis text labels.
    TickLabels,
    /// The highlighted plot-point marker.
    PlotPoint,
    /// Calibration dot and readout (debug builds only).
    DebugOverlay,
}

impl Layer {
    /// Fixed draw order, back to front.
    ///
    /// The plot point and debug overlay always composite last so they are
    /// never occluded by other layers.
    #[must_use]
    pub fn render_order() -> &'static [Self] {
        &[
            Self::Shading,
            Self::GridLines,
            Self::Baseline,
            Self::CategoryBoundaries,
            Self::TickLabels,
            Self::PlotPoint,
            Self::DebugOverlay,
        ]
    }

    /// Whether this layer can be toggled off by the UI session.
    ///
    /// Tick labels, the plot point and the debug overlay are not part of
    /// the togglable set; the overlay is gated by the debug capability
    /// flag instead.
    #[must_use]
    pub fn togglable(self) -> bool {
        matches!(
            self,
            Self::Shading | Self::GridLines | Self::Baseline | Self::CategoryBoundaries
        )
    }

    /// Parse from string (case-insensitive).
    ///
    /// Accepts the historical camelCase names used by the web control
    /// widgets, including the `mixTriangle` alias for category boundaries.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "shading" => Some(Self::Shading),
            "gridlines" | "grid_lines" | "grid" => Some(Self::GridLines),
            "baseline" => Some(Self::Baseline),
            "categoryboundaries" | "category_boundaries" | "mixtriangle" | "mix_triangle" => {
                Some(Self::CategoryBoundaries)
            }
            "ticklabels" | "tick_labels" => Some(Self::TickLabels),
            "plotpoint" | "plot_point" | "point" => Some(Self::PlotPoint),
            "debugoverlay" | "debug_overlay" | "debug" => Some(Self::DebugOverlay),
            _ => None,
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shading => write!(f, "shading"),
            Self::GridLines => write!(f, "grid_lines"),
            Self::Baseline => write!(f, "baseline"),
            Self::CategoryBoundaries => write!(f, "category_boundaries"),
            Self::TickLabels => write!(f, "tick_labels"),
            Self::PlotPoint => write!(f, "plot_point"),
            Self::DebugOverlay => write!(f, "debug_overlay"),
        }
    }
}

/// Visibility state for the togglable layers.
///
/// The key set is fixed at construction; toggles are O(1) state updates
/// with no geometry recomputation. Toggling is order-independent: applying
/// a set of toggles yields the same visibility regardless of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerVisibility {
    shading: bool,
    grid_lines: bool,
    baseline: bool,
    category_boundaries: bool,
}

impl LayerVisibility {
    /// All togglable layers visible.
    #[must_use]
    pub fn all_visible() -> Self {
        Self {
            shading: true,
            grid_lines: true,
            baseline: true,
            category_boundaries: true,
        }
    }

    /// Whether a layer is currently visible.
    ///
    /// Non-togglable layers (tick labels, plot point, debug overlay) always
    /// report visible here; the assembler gates the overlay separately.
    #[must_use]
    pub fn is_visible(&self, layer: Layer) -> bool {
        match layer {
            Layer::Shading => self.shading,
            Layer::GridLines => self.grid_lines,
            Layer::Baseline => self.baseline,
            Layer::CategoryBoundaries => self.category_boundaries,
            Layer::TickLabels | Layer::PlotPoint | Layer::DebugOverlay => true,
        }
    }

    /// Set a layer's visibility. No-op for non-togglable layers.
    pub fn set_visible(&mut self, layer: Layer, visible: bool) {
        match layer {
            Layer::Shading => self.shading = visible,
            Layer::GridLines => self.grid_lines = visible,
            Layer::Baseline => self.baseline = visible,
            Layer::CategoryBoundaries => self.category_boundaries = visible,
            Layer::TickLabels | Layer::PlotPoint | Layer::DebugOverlay => {}
        }
    }

    /// Set visibility by layer name.
    ///
    /// Unknown names are a no-op, never an error: control widgets may be
    /// built against a stale key set.
    pub fn set_visible_by_name(&mut self, name: &str, visible: bool) {
        if let Some(layer) = Layer::from_str_loose(name) {
            self.set_visible(layer, visible);
        }
    }

    /// Toggle a layer by name. Unknown names are a no-op.
    pub fn toggle_by_name(&mut self, name: &str) {
        if let Some(layer) = Layer::from_str_loose(name) {
            self.set_visible(layer, !self.is_visible(layer));
        }
    }
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self::all_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_order_ends_with_point_and_overlay() {
        let order = Layer::render_order();
        assert_eq!(order[0], Layer::Shading);
        assert_eq!(order[order.len() - 2], Layer::PlotPoint);
        assert_eq!(order[order.len() - 1], Layer::DebugOverlay);
    }

    #[test]
    fn test_toggle_known_layer() {
        let mut vis = LayerVisibility::all_visible();
        vis.set_visible(Layer::GridLines, false);
        assert!(!vis.is_visible(Layer::GridLines));
        assert!(vis.is_visible(Layer::Shading));
    }

    #[test]
    fn test_unknown_name_is_noop() {
        let mut vis = LayerVisibility::all_visible();
        vis.set_visible_by_name("bogusLayer", false);
        assert_eq!(vis, LayerVisibility::all_visible());
    }

    #[test]
    fn test_historical_aliases() {
        let mut vis = LayerVisibility::all_visible();
        vis.set_visible_by_name("mixTriangle", false);
        assert!(!vis.is_visible(Layer::CategoryBoundaries));
        vis.set_visible_by_name("gridLines", false);
        assert!(!vis.is_visible(Layer::GridLines));
    }

    #[test]
    fn test_toggle_order_independence() {
        let mut ab = LayerVisibility::all_visible();
        ab.toggle_by_name("shading");
        ab.toggle_by_name("baseline");

        let mut ba = LayerVisibility::all_visible();
        ba.toggle_by_name("baseline");
        ba.toggle_by_name("shading");

        assert_eq!(ab, ba);
    }

    #[test]
    fn test_non_togglable_layers_stay_visible() {
        let mut vis = LayerVisibility::all_visible();
        vis.set_visible(Layer::PlotPoint, false);
        assert!(vis.is_visible(Layer::PlotPoint));
    }
}
