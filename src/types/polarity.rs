//! Compound-score breakdown produced by the valence engine.

use serde::{Deserialize, Serialize};

/// Proportions of negative, neutral and positive valence in a text, plus
/// the normalised compound score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    /// Share of negative valence (0.0 to 1.0).
    pub neg: f64,
    /// Share of neutral words (0.0 to 1.0).
    pub neu: f64,
    /// Share of positive valence (0.0 to 1.0).
    pub pos: f64,
    /// Normalised sum of valences (-1.0 to 1.0).
    pub compound: f64,
}
