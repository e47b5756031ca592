//! Overall sentiment label.

use serde::{Deserialize, Serialize};

/// Overall sentiment of a text, taken from the sign of its polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    /// Polarity above zero.
    Positive,
    /// Polarity below zero.
    Negative,
    /// Polarity exactly zero.
    Neutral,
}

impl SentimentLabel {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Text face shown next to the label.
    pub fn face(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => ":)",
            SentimentLabel::Negative => ":(",
            SentimentLabel::Neutral => ":|",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        };
        f.write_str(name)
    }
}
