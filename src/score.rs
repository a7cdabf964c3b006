//! Score triples and barycentric weights.
//!
//! This module fixes the canonical axis order for the whole crate:
//! `(pre, mod, post)` mapped to the triangle vertices `(right, top, left)`.
//! Several historical renderings of this plot disagreed on the order; every
//! consumer now goes through [`ScoreTriple`]'s named fields, so the mapping
//! cannot be silently permuted.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One of the three worldview perspectives.
///
/// Doubles as the axis identifier for the ternary plot and as the key for
/// label calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Perspective {
    /// PreModern axis, anchored at the right vertex.
    PreModern,
    /// Modern axis, anchored at the top vertex.
    Modern,
    /// PostModern axis, anchored at the left vertex.
    PostModern,
}

impl Perspective {
    /// Get all perspective variants in canonical `(pre, mod, post)` order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::PreModern, Self::Modern, Self::PostModern]
    }

    /// Parse from string (case-insensitive).
    ///
    /// Accepts both the display form (`PreModern`) and the lowercase label
    /// key (`premodern`) used by calibration and layer toggles.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "premodern" | "pre" => Some(Self::PreModern),
            "modern" | "mod" => Some(Self::Modern),
            "postmodern" | "post" => Some(Self::PostModern),
            _ => None,
        }
    }

    /// Lowercase label key used for calibration and scene text.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::PreModern => "premodern",
            Self::Modern => "modern",
            Self::PostModern => "postmodern",
        }
    }
}

impl std::fmt::Display for Perspective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PreModern => write!(f, "PreModern"),
            Self::Modern => write!(f, "Modern"),
            Self::PostModern => write!(f, "PostModern"),
        }
    }
}

/// A three-way compositional score.
///
/// Components are non-negative percentages. They need not sum to exactly
/// 100; [`ScoreTriple::weights`] normalizes by the sum, so uniform scaling
/// of all three components leaves the plotted point unchanged.
///
/// # Example
///
/// ```
/// use worldview_plot::ScoreTriple;
///
/// let scores = ScoreTriple::new(20.0, 50.0, 30.0);
/// let w = scores.weights().unwrap();
/// assert!((w.modern - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTriple {
    /// PreModern score (right vertex).
    pub premodern: f64,

    /// Modern score (top vertex).
    pub modern: f64,

    /// PostModern score (left vertex).
    pub postmodern: f64,

    /// Optional name for the perspective mix this triple describes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perspective: Option<String>,
}

impl ScoreTriple {
    /// Create a score triple in canonical `(pre, mod, post)` order.
    #[must_use]
    pub fn new(premodern: f64, modern: f64, postmodern: f64) -> Self {
        Self {
            premodern,
            modern,
            postmodern,
            perspective: None,
        }
    }

    /// Attach a perspective name.
    #[must_use]
    pub fn with_perspective(mut self, name: impl Into<String>) -> Self {
        self.perspective = Some(name.into());
        self
    }

    /// Sum of the three components.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.premodern + self.modern + self.postmodern
    }

    /// Validate the triple: no negative components, positive sum.
    pub fn validate(&self) -> Result<()> {
        if self.premodern < 0.0 {
            return Err(Error::NegativeScore {
                component: "pre",
                value: self.premodern,
            });
        }
        if self.modern < 0.0 {
            return Err(Error::NegativeScore {
                component: "mod",
                value: self.modern,
            });
        }
        if self.postmodern < 0.0 {
            return Err(Error::NegativeScore {
                component: "post",
                value: self.postmodern,
            });
        }
        let sum = self.sum();
        if sum <= 0.0 {
            return Err(Error::DegenerateInput { sum });
        }
        Ok(())
    }

    /// Normalize into barycentric weights summing to 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`] for a zero sum and
    /// [`Error::NegativeScore`] for negative components. Never produces NaN.
    pub fn weights(&self) -> Result<BarycentricWeights> {
        self.validate()?;
        let sum = self.sum();
        Ok(BarycentricWeights {
            premodern: self.premodern / sum,
            modern: self.modern / sum,
            postmodern: self.postmodern / sum,
        })
    }
}

/// Normalized barycentric weights for a score triple.
///
/// Each weight is in `[0, 1]` and the three sum to 1 (within floating-point
/// tolerance), making the plotted point a convex combination of the
/// triangle's vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarycentricWeights {
    /// Weight on the right vertex.
    pub premodern: f64,
    /// Weight on the top vertex.
    pub modern: f64,
    /// Weight on the left vertex.
    pub postmodern: f64,
}

impl BarycentricWeights {
    /// Sum of the weights (1.0 within tolerance for valid input).
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.premodern + self.modern + self.postmodern
    }
}
