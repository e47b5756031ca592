//! Public types for the Sentimeter API.

mod label;
mod polarity;
mod report;
mod score;
mod token;

pub use label::SentimentLabel;
pub use polarity::PolarityScores;
pub use report::AnalysisReport;
pub use score::{ScoreRow, ScoreTable, SentimentScore};
pub use token::{
    GroupEntry, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD, TokenClassification, TokenSentiment,
};

/// Pretty-printed JSON for any output type.
pub fn to_json<T: serde::Serialize>(value: &T) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
