//! Combined analysis output.

use serde::{Deserialize, Serialize};

use super::{ScoreTable, SentimentLabel, SentimentScore, TokenClassification};

/// Everything produced for one analyzed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Length of the analyzed text in characters.
    pub text_len: usize,
    pub score: SentimentScore,
    pub table: ScoreTable,
    pub label: SentimentLabel,
    pub tokens: TokenClassification,
}

impl AnalysisReport {
    pub fn new(text: &str, score: SentimentScore, tokens: TokenClassification) -> Self {
        Self {
            text_len: text.chars().count(),
            score,
            table: score.to_table(),
            label: SentimentLabel::from_polarity(score.polarity),
            tokens,
        }
    }
}
