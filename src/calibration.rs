//! Interactive label calibration.
//!
//! The plot's three axis labels are positioned by hand: each has a pixel
//! offset and a rotation relative to its anchoring vertex, found by an
//! operator nudging values live during a debugging session. This module
//! owns that state. The calibration config used to be a process-global
//! mutated in place by the debug widget; it is now owned by a single
//! [`Calibrator`] and changed only through its methods, so every edit is an
//! observable transition.
//!
//! Calibration persists only for the lifetime of the session.

use serde::{Deserialize, Serialize};

use crate::score::Perspective;

/// Default step applied by the original calibration buttons.
pub const DEFAULT_STEP: f64 = 5.0;

/// Which value of a label placement an adjustment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Horizontal offset in pixels.
    X,
    /// Vertical offset in pixels.
    Y,
    /// Rotation in degrees.
    R,
}

impl Axis {
    /// Parse from string (case-insensitive).
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "x" => Some(Self::X),
            "y" => Some(Self::Y),
            "r" | "rotation" => Some(Self::R),
            _ => None,
        }
    }
}

/// Offset and rotation for one axis label, relative to its anchor vertex.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelPlacement {
    /// Horizontal offset in pixels.
    pub x: f64,
    /// Vertical offset in pixels.
    pub y: f64,
    /// Rotation in degrees, applied around the offset anchor point.
    pub r: f64,
}

/// Placement configuration for all three labels.
///
/// Defaults carry the values found in the original calibration session:
/// the postmodern label sits 10px right and 40px below its vertex, the
/// other two sit on theirs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Placement for the postmodern label (left vertex).
    pub postmodern: LabelPlacement,
    /// Placement for the modern label (top vertex).
    pub modern: LabelPlacement,
    /// Placement for the premodern label (right vertex).
    pub premodern: LabelPlacement,
}

impl LabelConfig {
    /// Get the placement for a label.
    #[must_use]
    pub fn get(&self, label: Perspective) -> LabelPlacement {
        match label {
            Perspective::PostModern => self.postmodern,
            Perspective::Modern => self.modern,
            Perspective::PreModern => self.premodern,
        }
    }

    fn get_mut(&mut self, label: Perspective) -> &mut LabelPlacement {
        match label {
            Perspective::PostModern => &mut self.postmodern,
            Perspective::Modern => &mut self.modern,
            Perspective::PreModern => &mut self.premodern,
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            postmodern: LabelPlacement {
                x: 10.0,
                y: 40.0,
                r: 0.0,
            },
            modern: LabelPlacement::default(),
            premodern: LabelPlacement::default(),
        }
    }
}

/// The calibration tool state machine.
///
/// Holds the label config, the currently selected label and two independent
/// display toggles. There is no terminal state; every transition is
/// reachable from every other. The calibrator is the sole writer of the
/// config; renderers read it through [`Calibrator::config`].
///
/// # Example
///
/// ```
/// use worldview_plot::{Axis, Calibrator};
///
/// let mut cal = Calibrator::new();
/// cal.select_label("modern");
/// cal.adjust(Axis::X, 5.0);
/// cal.adjust(Axis::Y, -5.0);
/// assert_eq!(cal.readout(), "modern: (5, -5) R0");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calibrator {
    config: LabelConfig,
    current: Perspective,
    show_dots: bool,
    show_coordinates: bool,
}

impl Calibrator {
    /// Create a calibrator with default placements, the postmodern label
    /// selected and both debug displays on.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: LabelConfig::default(),
            current: Perspective::PostModern,
            show_dots: true,
            show_coordinates: true,
        }
    }

    /// Select the label for subsequent adjustments.
    ///
    /// Unknown names fail silently; the selection is unchanged.
    pub fn select_label(&mut self, name: &str) {
        if let Some(label) = Perspective::from_str_loose(name) {
            self.current = label;
        }
    }

    /// Adjust the selected label's placement by `delta`.
    ///
    /// Adjustments are unbounded; operators are trusted to find visually
    /// sane values. A `+d` followed by `-d` restores the original value
    /// exactly.
    pub fn adjust(&mut self, axis: Axis, delta: f64) {
        let placement = self.config.get_mut(self.current);
        match axis {
            Axis::X => placement.x += delta,
            Axis::Y => placement.y += delta,
            Axis::R => placement.r += delta,
        }
    }

    /// Flip display of the debug marker dots.
    pub fn toggle_dots(&mut self) {
        self.show_dots = !self.show_dots;
    }

    /// Flip display of the live coordinate readout.
    pub fn toggle_coordinates(&mut self) {
        self.show_coordinates = !self.show_coordinates;
    }

    /// Formatted readout for the selected label: `"<label>: (x, y) R<r>"`.
    ///
    /// A debugging aid only; production rendering never consumes it.
    #[must_use]
    pub fn readout(&self) -> String {
        let p = self.config.get(self.current);
        format!("{}: ({}, {}) R{}", self.current.label_key(), p.x, p.y, p.r)
    }

    /// The currently selected label.
    #[must_use]
    pub fn current_label(&self) -> Perspective {
        self.current
    }

    /// Whether debug marker dots are shown.
    #[must_use]
    pub fn show_dots(&self) -> bool {
        self.show_dots
    }

    /// Whether the coordinate readout is shown.
    #[must_use]
    pub fn show_coordinates(&self) -> bool {
        self.show_coordinates
    }

    /// Whether any debug overlay element is requested.
    #[must_use]
    pub fn overlay_requested(&self) -> bool {
        self.show_dots || self.show_coordinates
    }

    /// Read-only view of the label config for rendering.
    #[must_use]
    pub fn config(&self) -> &LabelConfig {
        &self.config
    }
}

impl Default for Calibrator {
    fn default() -> Self {
        Self::new()
    }
}
