//! Contract types for the survey collaborator.
//!
//! The question/answer exchange lives in a separate service; this crate
//! only consumes its wire shapes. Types here mirror that service's schema
//! so a host can deserialize a question set, collect answers and hand the
//! resulting tallies to the plot engine.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::score::ScoreTriple;

/// One selectable answer for a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseOption {
    /// Stable identifier.
    pub id: String,

    /// Display text.
    pub text: String,

    /// Score contribution in `(pre, mod, post)` order.
    pub scores: Vec<f64>,
}

/// A survey question with its answer options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Question text.
    pub text: String,

    /// Answer options in display order.
    pub responses: Vec<ResponseOption>,
}

/// The full question set, keyed by question id (`Q1`, `Q2`, ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuestionSet {
    /// Questions by id.
    pub questions: HashMap<String, Question>,
}

/// A completed survey submission with metadata.
///
/// `n1`/`n2`/`n3` are the raw category tallies in `(pre, mod, post)`
/// order; `plot_x`/`plot_y` record the point the client computed so stored
/// submissions can be re-plotted without re-running the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveySubmission {
    /// Client session identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Answers to the six questions (1..=6 each).
    #[serde(default)]
    pub q1_response: Option<u8>,
    #[serde(default)]
    pub q2_response: Option<u8>,
    #[serde(default)]
    pub q3_response: Option<u8>,
    #[serde(default)]
    pub q4_response: Option<u8>,
    #[serde(default)]
    pub q5_response: Option<u8>,
    #[serde(default)]
    pub q6_response: Option<u8>,

    /// Raw PreModern tally.
    #[serde(default)]
    pub n1: Option<u32>,
    /// Raw Modern tally.
    #[serde(default)]
    pub n2: Option<u32>,
    /// Raw PostModern tally.
    #[serde(default)]
    pub n3: Option<u32>,

    /// Plot point recorded by the client.
    #[serde(default)]
    pub plot_x: Option<f64>,
    #[serde(default)]
    pub plot_y: Option<f64>,

    /// Browser user agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,

    /// Coarse region, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Submission channel.
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String {
    "local".to_string()
}

impl SurveySubmission {
    /// How many of the six questions were answered.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        [
            self.q1_response,
            self.q2_response,
            self.q3_response,
            self.q4_response,
            self.q5_response,
            self.q6_response,
        ]
        .iter()
        .filter(|r| r.is_some())
        .count()
    }

    /// Convert the raw tallies into a score triple for plotting.
    ///
    /// Returns `None` unless all three tallies are present. The triple
    /// carries the raw values; the plot engine normalizes by the sum.
    #[must_use]
    pub fn score_triple(&self) -> Option<ScoreTriple> {
        match (self.n1, self.n2, self.n3) {
            (Some(n1), Some(n2), Some(n3)) => Some(ScoreTriple::new(
                f64::from(n1),
                f64::from(n2),
                f64::from(n3),
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_set_deserialize() {
        let json = r#"{
            "questions": {
                "Q1": {
                    "text": "What grounds truth?",
                    "responses": [
                        {"id": "q1a", "text": "Tradition", "scores": [100.0, 0.0, 0.0]},
                        {"id": "q1b", "text": "Evidence", "scores": [0.0, 100.0, 0.0]}
                    ]
                }
            }
        }"#;
        let set: QuestionSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.questions.len(), 1);
        assert_eq!(set.questions["Q1"].responses.len(), 2);
    }

    #[test]
    fn test_submission_defaults() {
        let submission: SurveySubmission = serde_json::from_str("{}").unwrap();
        assert_eq!(submission.source, "local");
        assert_eq!(submission.answered_count(), 0);
        assert!(submission.score_triple().is_none());
    }

    #[test]
    fn test_score_triple_from_tallies() {
        let submission: SurveySubmission =
            serde_json::from_str(r#"{"n1": 120, "n2": 300, "n3": 180}"#).unwrap();
        let scores = submission.score_triple().unwrap();
        let w = scores.weights().unwrap();
        assert!((w.modern - 0.5).abs() < 1e-12);
    }
}
