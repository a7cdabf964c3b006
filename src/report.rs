//! Report types for plot results.
//!
//! A [`PlotReport`] captures everything the survey backend stores for one
//! submission: the scores, the computed plot point, the perspective
//! classification and a timestamp. Reports serialize to JSON; batches also
//! get a CSV summary.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::PerspectiveSummary;
use crate::error::Result;
use crate::geometry::Point;
use crate::score::ScoreTriple;

/// Result of plotting and classifying one score triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotReport {
    /// Human-readable perspective description.
    pub perspective: String,

    /// The input scores.
    pub scores: ScoreTriple,

    /// The computed plot point.
    pub point: Point,

    /// Full classification.
    pub summary: PerspectiveSummary,

    /// When this report was generated.
    #[serde(with = "chrono_rfc3339")]
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl PlotReport {
    /// Create a report stamped with the current time.
    #[must_use]
    pub fn new(scores: ScoreTriple, point: Point, summary: PerspectiveSummary) -> Self {
        Self {
            perspective: summary.description(),
            scores,
            point,
            summary,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Write this report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Write a CSV summary of a batch of reports.
///
/// Columns: perspective, pre, mod, post, x, y, strength.
pub fn write_csv_summary(reports: &[PlotReport], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["perspective", "pre", "mod", "post", "x", "y", "strength"])?;

    for report in reports {
        wtr.write_record([
            &report.perspective,
            &format!("{:.1}", report.scores.premodern),
            &format!("{:.1}", report.scores.modern),
            &format!("{:.1}", report.scores.postmodern),
            &format!("{:.2}", report.point.x),
            &format!("{:.2}", report.point.y),
            &report.summary.strength.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

// Custom serialization for timestamps as RFC 3339 strings
mod chrono_rfc3339 {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        dt.to_rfc3339().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{to_cartesian, CanvasConfig, TriangleVertices};

    fn sample_report(pre: f64, modern: f64, post: f64) -> PlotReport {
        let scores = ScoreTriple::new(pre, modern, post);
        let vertices = TriangleVertices::from_canvas(&CanvasConfig::default());
        let point = to_cartesian(&scores, &vertices).unwrap();
        let summary = PerspectiveSummary::from_scores(&scores).unwrap();
        PlotReport::new(scores, point, summary)
    }

    #[test]
    fn test_report_description() {
        let report = sample_report(10.0, 80.0, 10.0);
        assert_eq!(report.perspective, "Strongly Modern");
    }

    #[test]
    fn test_json_roundtrip() {
        let report = sample_report(20.0, 50.0, 30.0);
        let json = serde_json::to_string(&report).unwrap();
        let back: PlotReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.perspective, report.perspective);
        assert_eq!(back.point, report.point);
    }

    #[test]
    fn test_write_json_and_csv() {
        let dir = tempfile::tempdir().unwrap();
        let report = sample_report(20.0, 50.0, 30.0);

        let json_path = dir.path().join("report.json");
        report.write_json(&json_path).unwrap();
        let contents = std::fs::read_to_string(&json_path).unwrap();
        assert!(contents.contains("\"perspective\""));

        let csv_path = dir.path().join("summary.csv");
        write_csv_summary(&[report], &csv_path).unwrap();
        let contents = std::fs::read_to_string(&csv_path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "perspective,pre,mod,post,x,y,strength"
        );
        let row = lines.next().unwrap();
        assert!(row.contains("20.0"));
        assert!(row.contains("365.00"));
    }
}
