//! Sentimeter - lexicon-based sentiment scoring
//!
//! This crate scores free-form text two ways:
//!
//! - an aggregate polarity/subjectivity pair for the whole text, reshaped
//!   into a two-row table for display;
//! - a per-token classification that buckets every whitespace-delimited
//!   token into positive, negative and neutral groups by its compound score.
//!
//! Both scorers sit behind engine traits ([`AggregateEngine`],
//! [`TokenEngine`]) so the built-in lexicon engines can be swapped for
//! other implementations.
//!
//! # Example
//!
//! ```rust
//! use sentimeter::{Sentimeter, SentimentLabel};
//!
//! fn main() -> sentimeter::Result<()> {
//!     let analyzer = Sentimeter::builder().build()?;
//!     let report = analyzer.analyze("I love this but I hate that")?;
//!
//!     assert_eq!(report.label, SentimentLabel::Negative);
//!     assert_eq!(report.tokens.neutral, ["I", "this", "but", "I", "that"]);
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod config;
pub mod engines;
pub mod error;
pub mod telemetry;
pub mod types;
mod version;

// Re-export main types at crate root
pub use analyzer::{Analyzer, Sentimeter, SentimeterBuilder};
pub use engines::{AggregateEngine, PatternEngine, TokenEngine, VaderEngine};
pub use error::{Result, SentimeterError};
pub use version::{GIT_BRANCH, GIT_SHA, PKG_VERSION, git_dirty, version_string};

// Re-export all types
pub use types::{
    AnalysisReport, GroupEntry, PolarityScores, ScoreRow, ScoreTable, SentimentLabel,
    SentimentScore, TokenClassification, TokenSentiment,
};
