//! Perspective classification.
//!
//! Classifies a finished score triple into a primary perspective, a
//! strength band and an optional secondary influence, and phrases the
//! result for the survey report. Scores here are final percentages and
//! must sum to ~100; the plot itself has no such requirement.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::score::{Perspective, ScoreTriple};

/// Tolerance for the sum-to-100 validation.
const SUM_TOLERANCE: f64 = 0.1;

/// Gap between the two minor scores above which the larger one counts as a
/// secondary influence.
const SECONDARY_GAP: f64 = 10.0;

/// Strength band of the primary perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    /// The primary score is exactly 100.
    Pure,
    /// The primary score is above 70.
    Strong,
    /// The primary score is between 50 and 70.
    Moderate,
    /// No score reaches 50.
    Mixed,
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pure => write!(f, "Pure"),
            Self::Strong => write!(f, "Strong"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Mixed => write!(f, "Mixed"),
        }
    }
}

/// Classification of a score triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerspectiveSummary {
    /// Perspective with the highest score.
    pub primary: Perspective,

    /// How dominant the primary perspective is.
    pub strength: Strength,

    /// Secondary influence, when the primary is moderate and the two minor
    /// scores differ by more than 10 points.
    pub secondary: Option<Perspective>,

    /// The scores this summary was computed from, in `(pre, mod, post)`
    /// order.
    pub scores: [f64; 3],
}

impl PerspectiveSummary {
    /// Classify a score triple.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScoreSum`] unless the components sum to
    /// 100 ± 0.1.
    pub fn from_scores(scores: &ScoreTriple) -> Result<Self> {
        let values = [scores.premodern, scores.modern, scores.postmodern];
        let sum: f64 = values.iter().sum();
        if !(100.0 - SUM_TOLERANCE..=100.0 + SUM_TOLERANCE).contains(&sum) {
            return Err(Error::InvalidScoreSum { sum });
        }

        let (primary_idx, &max_score) = values
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .unwrap_or((0, &values[0]));
        let primary = Perspective::all()[primary_idx];

        let mut secondary = None;
        let strength = if max_score >= 100.0 {
            Strength::Pure
        } else if max_score > 70.0 {
            Strength::Strong
        } else if max_score < 50.0 {
            Strength::Mixed
        } else {
            // Moderate: a clear runner-up counts as a secondary influence.
            let minors: Vec<(usize, f64)> = values
                .iter()
                .copied()
                .enumerate()
                .filter(|&(i, _)| i != primary_idx)
                .collect();
            if (minors[0].1 - minors[1].1).abs() > SECONDARY_GAP {
                let (idx, _) = if minors[0].1 > minors[1].1 {
                    minors[0]
                } else {
                    minors[1]
                };
                secondary = Some(Perspective::all()[idx]);
            }
            Strength::Moderate
        };

        Ok(Self {
            primary,
            strength,
            secondary,
            scores: values,
        })
    }

    /// Human-readable description of the perspective.
    ///
    /// # Example
    ///
    /// ```
    /// use worldview_plot::{PerspectiveSummary, ScoreTriple};
    ///
    /// let summary =
    ///     PerspectiveSummary::from_scores(&ScoreTriple::new(10.0, 80.0, 10.0)).unwrap();
    /// assert_eq!(summary.description(), "Strongly Modern");
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self.strength {
            Strength::Pure => format!("Pure {}", self.primary),
            Strength::Mixed => "Mixed Perspective".to_string(),
            Strength::Strong => format!("Strongly {}", self.primary),
            Strength::Moderate => match self.secondary {
                Some(secondary) => {
                    format!("Moderately {} with {} influences", self.primary, secondary)
                }
                None => format!("Moderately {}", self.primary),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(pre: f64, modern: f64, post: f64) -> PerspectiveSummary {
        PerspectiveSummary::from_scores(&ScoreTriple::new(pre, modern, post)).unwrap()
    }

    #[test]
    fn test_pure() {
        let s = summary(0.0, 100.0, 0.0);
        assert_eq!(s.primary, Perspective::Modern);
        assert_eq!(s.strength, Strength::Pure);
        assert_eq!(s.description(), "Pure Modern");
    }

    #[test]
    fn test_strong() {
        let s = summary(80.0, 10.0, 10.0);
        assert_eq!(s.primary, Perspective::PreModern);
        assert_eq!(s.strength, Strength::Strong);
        assert_eq!(s.description(), "Strongly PreModern");
    }

    #[test]
    fn test_moderate_with_secondary() {
        let s = summary(5.0, 60.0, 35.0);
        assert_eq!(s.primary, Perspective::Modern);
        assert_eq!(s.strength, Strength::Moderate);
        assert_eq!(s.secondary, Some(Perspective::PostModern));
        assert_eq!(
            s.description(),
            "Moderately Modern with PostModern influences"
        );
    }

    #[test]
    fn test_moderate_without_secondary() {
        let s = summary(22.0, 56.0, 22.0);
        assert_eq!(s.strength, Strength::Moderate);
        assert_eq!(s.secondary, None);
        assert_eq!(s.description(), "Moderately Modern");
    }

    #[test]
    fn test_mixed() {
        let s = summary(34.0, 33.0, 33.0);
        assert_eq!(s.strength, Strength::Mixed);
        assert_eq!(s.description(), "Mixed Perspective");
    }

    #[test]
    fn test_sum_validation() {
        let err =
            PerspectiveSummary::from_scores(&ScoreTriple::new(10.0, 10.0, 10.0)).unwrap_err();
        assert!(matches!(err, Error::InvalidScoreSum { .. }));
        // Within tolerance passes.
        assert!(PerspectiveSummary::from_scores(&ScoreTriple::new(33.3, 33.3, 33.45)).is_ok());
    }
}
