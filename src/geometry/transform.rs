//! Barycentric coordinate transform.
//!
//! Maps a score triple to a pixel position inside the plot triangle. The
//! result is a convex combination of the three vertices, so valid input can
//! never land outside the closed triangle.

use crate::error::Result;
use crate::geometry::{Point, TriangleVertices};
use crate::score::ScoreTriple;

/// Convert a score triple to a Cartesian plot point.
///
/// Components are normalized by their sum into barycentric weights
/// `(w_pre, w_mod, w_post)`, then combined:
///
/// ```text
/// point = w_post * left + w_mod * top + w_pre * right
/// ```
///
/// Deterministic and side-effect free.
///
/// # Errors
///
/// Fails with [`crate::Error::DegenerateInput`] when the components sum to
/// zero and [`crate::Error::NegativeScore`] for negative components; it
/// never returns a NaN-positioned point.
///
/// # Example
///
/// ```
/// use worldview_plot::{to_cartesian, CanvasConfig, ScoreTriple, TriangleVertices};
///
/// let vertices = TriangleVertices::from_canvas(&CanvasConfig::default());
/// let point = to_cartesian(&ScoreTriple::new(20.0, 50.0, 30.0), &vertices).unwrap();
/// assert!((point.x - 365.0).abs() < 1e-9);
/// assert!((point.y - 350.0).abs() < 1e-9);
/// ```
pub fn to_cartesian(scores: &ScoreTriple, vertices: &TriangleVertices) -> Result<Point> {
    let w = scores.weights()?;
    Ok(Point::new(
        vertices.left.x * w.postmodern + vertices.top.x * w.modern + vertices.right.x * w.premodern,
        vertices.left.y * w.postmodern + vertices.top.y * w.modern + vertices.right.y * w.premodern,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::geometry::CanvasConfig;

    fn default_vertices() -> TriangleVertices {
        TriangleVertices::from_canvas(&CanvasConfig::default())
    }

    #[test]
    fn test_pure_scores_land_on_vertices() {
        let v = default_vertices();
        let pre = to_cartesian(&ScoreTriple::new(100.0, 0.0, 0.0), &v).unwrap();
        assert!((pre.x - v.right.x).abs() < 1e-9);
        assert!((pre.y - v.right.y).abs() < 1e-9);

        let modern = to_cartesian(&ScoreTriple::new(0.0, 100.0, 0.0), &v).unwrap();
        assert!((modern.x - v.top.x).abs() < 1e-9);
        assert!((modern.y - v.top.y).abs() < 1e-9);

        let post = to_cartesian(&ScoreTriple::new(0.0, 0.0, 100.0), &v).unwrap();
        assert!((post.x - v.left.x).abs() < 1e-9);
        assert!((post.y - v.left.y).abs() < 1e-9);
    }

    #[test]
    fn test_end_to_end_scenario() {
        // 800x700 canvas, 50px margins, scores (20, 50, 30).
        let v = default_vertices();
        let p = to_cartesian(&ScoreTriple::new(20.0, 50.0, 30.0), &v).unwrap();
        // x = 50*0.3 + 400*0.5 + 750*0.2 = 15 + 200 + 150
        assert!((p.x - 365.0).abs() < 1e-9);
        // y = 650*0.3 + 50*0.5 + 650*0.2 = 195 + 25 + 130
        assert!((p.y - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_invariance() {
        let v = default_vertices();
        let a = to_cartesian(&ScoreTriple::new(10.0, 20.0, 70.0), &v).unwrap();
        let b = to_cartesian(&ScoreTriple::new(1.0, 2.0, 7.0), &v).unwrap();
        assert!((a.x - b.x).abs() < 1e-9);
        assert!((a.y - b.y).abs() < 1e-9);
    }

    #[test]
    fn test_result_stays_inside_triangle() {
        let v = default_vertices();
        for &(pre, modern, post) in &[
            (33.0, 33.0, 34.0),
            (1.0, 1.0, 98.0),
            (90.0, 5.0, 5.0),
            (0.0, 50.0, 50.0),
        ] {
            let p = to_cartesian(&ScoreTriple::new(pre, modern, post), &v).unwrap();
            assert!(p.x >= v.left.x - 1e-9 && p.x <= v.right.x + 1e-9);
            assert!(p.y >= v.top.y - 1e-9 && p.y <= v.left.y + 1e-9);
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }

    #[test]
    fn test_degenerate_input() {
        let v = default_vertices();
        let err = to_cartesian(&ScoreTriple::new(0.0, 0.0, 0.0), &v).unwrap_err();
        assert!(matches!(err, Error::DegenerateInput { .. }));
    }
}
