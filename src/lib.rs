//! # worldview-plot
//!
//! Ternary plot scene engine for three-way worldview score visualization.
//!
//! A survey produces a compositional score across three perspectives
//! (premodern / modern / postmodern). This library maps that triple to a
//! point inside a triangular (barycentric) diagram and assembles a
//! renderable scene with togglable layers, calibrated text labels and an
//! SVG backend.
//!
//! ## Quick Start
//!
//! ```rust
//! use worldview_plot::{
//!     render_svg, Calibrator, CanvasConfig, LayerVisibility, PlotScene, RecordingSink,
//!     ScoreTriple,
//! };
//!
//! let mut scene = PlotScene::new(false);
//! let mut sink = RecordingSink::new();
//! let description = scene.render(
//!     Some(&ScoreTriple::new(20.0, 50.0, 30.0)),
//!     &CanvasConfig::default(),
//!     &LayerVisibility::all_visible(),
//!     &Calibrator::new(),
//!     &mut sink,
//! )?;
//! let svg = render_svg(&description);
//! # assert!(svg.contains("</svg>"));
//! # Ok::<(), worldview_plot::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`error`]: Error types for the library
//! - [`score`]: Score triples and barycentric weights
//! - [`geometry`]: Canvas configuration, triangle vertices, ticks, grid
//! - [`scene`]: Layer composition, scene assembly and SVG rendering
//! - [`calibration`]: Interactive label calibration
//! - [`analysis`]: Perspective classification
//! - [`report`]: JSON/CSV plot reports
//! - [`survey`]: Contract types for the survey collaborator

pub mod analysis;
pub mod calibration;
pub mod error;
pub mod geometry;
pub mod report;
pub mod scene;
pub mod score;
pub mod survey;

// Re-export commonly used types
pub use analysis::{PerspectiveSummary, Strength};
pub use calibration::{Axis, Calibrator, LabelConfig, LabelPlacement};
pub use error::{Error, Result};
pub use geometry::{
    to_cartesian, CanvasConfig, GridLine, Margins, Point, TickMark, TriangleVertices,
};
pub use report::{write_csv_summary, PlotReport};
pub use scene::{
    render_svg, Advisory, AdvisorySink, Layer, LayerVisibility, PlotCallback, PlotScene,
    RecordingSink, SceneDescription, SceneElement, SceneItem,
};
pub use score::{BarycentricWeights, Perspective, ScoreTriple};
pub use survey::{Question, QuestionSet, ResponseOption, SurveySubmission};
