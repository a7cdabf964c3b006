//! SVG rendering for scene descriptions.
//!
//! Turns a [`SceneDescription`] into a standalone SVG document. Text styles
//! are CSS classes with light and dark mode via media queries; shapes carry
//! their paint inline.

use std::fmt::Write as _;

use crate::scene::{Paint, SceneDescription, SceneElement};

/// Dash pattern for reduced-weight strokes.
const DASH_PATTERN: &str = "4 4";

/// Render a scene description to an SVG string.
///
/// Items are emitted in the order the assembler composed them, so the
/// layer ordering is preserved.
///
/// # Example
///
/// ```
/// use worldview_plot::{
///     render_svg, Calibrator, CanvasConfig, LayerVisibility, PlotScene, RecordingSink,
///     ScoreTriple,
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
///
/// let svg = render_svg(&description);
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("</svg>"));
/// ```
#[must_use]
pub fn render_svg(description: &SceneDescription) -> String {
    let mut svg = String::with_capacity(8192);
    let width = description.canvas.width;
    let height = description.canvas.height;

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
        width, height
    );

    // CSS with dark mode support
    svg.push_str(
        r#"<style>
  :root {
    --bg-color: #ffffff;
    --text-color: #1a1a1a;
  }
  @media (prefers-color-scheme: dark) {
    :root {
      --bg-color: #1a1a1a;
      --text-color: #e0e0e0;
    }
  }
  .background { fill: var(--bg-color); }
  .label { font: bold 14px system-ui, sans-serif; fill: var(--text-color); }
  .tick-label { font: 11px system-ui, sans-serif; fill: var(--text-color); }
  .readout { font: 12px ui-monospace, monospace; fill: var(--text-color); }
</style>
"#,
    );

    let _ = writeln!(
        svg,
        r#"<rect class="background" width="{}" height="{}"/>"#,
        width, height
    );

    for item in &description.items {
        write_element(&mut svg, &item.element);
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_element(svg: &mut String, element: &SceneElement) {
    match element {
        SceneElement::Polygon { points, paint } => {
            let mut path = String::new();
            for (i, p) in points.iter().enumerate() {
                let prefix = if i == 0 { "M" } else { " L" };
                let _ = write!(path, "{} {:.2},{:.2}", prefix, p.x, p.y);
            }
            path.push_str(" Z");
            let _ = writeln!(svg, r#"<path d="{}"{}/>"#, path, paint_attrs(paint));
        }
        SceneElement::Segment { from, to, paint } => {
            let _ = writeln!(
                svg,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"{}/>"#,
                from.x,
                from.y,
                to.x,
                to.y,
                paint_attrs(paint)
            );
        }
        SceneElement::Circle {
            center,
            radius,
            paint,
        } => {
            let _ = writeln!(
                svg,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{}"{}/>"#,
                center.x,
                center.y,
                radius,
                paint_attrs(paint)
            );
        }
        SceneElement::Text {
            content,
            position,
            anchor,
            rotation,
            class,
        } => {
            let transform = if rotation.abs() > f64::EPSILON {
                format!(
                    r#" transform="rotate({} {:.2} {:.2})""#,
                    rotation, position.x, position.y
                )
            } else {
                String::new()
            };
            let _ = writeln!(
                svg,
                r#"<text x="{:.2}" y="{:.2}" text-anchor="{}" class="{}"{}>{}</text>"#,
                position.x,
                position.y,
                anchor.as_svg(),
                class,
                transform,
                escape_text(content)
            );
        }
    }
}

/// Inline presentation attributes for a shape's paint.
fn paint_attrs(paint: &Paint) -> String {
    let mut attrs = String::new();
    match &paint.fill {
        Some(fill) => {
            let _ = write!(attrs, r#" fill="{}""#, fill);
        }
        None => attrs.push_str(r#" fill="none""#),
    }
    if let Some(stroke) = &paint.stroke {
        let _ = write!(
            attrs,
            r#" stroke="{}" stroke-width="{}""#,
            stroke, paint.stroke_width
        );
    }
    if paint.dashed {
        let _ = write!(attrs, r#" stroke-dasharray="{}""#, DASH_PATTERN);
    }
    if let Some(opacity) = paint.opacity {
        let _ = write!(attrs, r#" opacity="{}""#, opacity);
    }
    attrs
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::Calibrator;
    use crate::geometry::CanvasConfig;
    use crate::scene::assembler::{PlotScene, RecordingSink};
    use crate::scene::layers::{Layer, LayerVisibility};
    use crate::score::ScoreTriple;

    fn render_description(layers: &LayerVisibility) -> SceneDescription {
        let mut scene = PlotScene::new(false);
        let mut sink = RecordingSink::new();
        scene
            .render(
                Some(&ScoreTriple::new(20.0, 50.0, 30.0)),
                &CanvasConfig::default(),
                layers,
                &Calibrator::new(),
                &mut sink,
            )
            .unwrap()
    }

    #[test]
    fn test_svg_basic_structure() {
        let svg = render_svg(&render_description(&LayerVisibility::all_visible()));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains(r#"viewBox="0 0 800 700""#));
        assert!(svg.contains("PreModern"));
        assert!(svg.contains("Modern"));
        assert!(svg.contains("PostModern"));
    }

    #[test]
    fn test_svg_plot_point_marker() {
        let svg = render_svg(&render_description(&LayerVisibility::all_visible()));
        // The marker circle lands at the computed plot point.
        assert!(svg.contains(r#"cx="365.00" cy="350.00" r="6""#));
    }

    #[test]
    fn test_svg_hidden_grid_omits_dashes() {
        let mut layers = LayerVisibility::all_visible();
        layers.set_visible(Layer::GridLines, false);
        let svg = render_svg(&render_description(&layers));
        assert!(!svg.contains("stroke-dasharray"));
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
    }
}
