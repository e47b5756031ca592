//! Analyzer facade over the two scoring components.
//!
//! An [`Analyzer`] owns one [`AggregateScorer`] and one [`TokenClassifier`]
//! and runs them for a single text. It keeps no state between calls, so the
//! same text always produces the same report.

mod builder;
pub mod classifier;
pub mod scorer;

pub use builder::{Sentimeter, SentimeterBuilder};
pub use classifier::{TokenClassifier, tokenize};
pub use scorer::AggregateScorer;

use std::sync::Arc;
use std::time::Instant;

use tracing::instrument;

use crate::Result;
use crate::engines::{AggregateEngine, TokenEngine};
use crate::telemetry;
use crate::types::{AnalysisReport, ScoreTable, SentimentScore, TokenClassification};

/// Runs the aggregate scorer and the token classifier over a text.
#[derive(Debug, Clone)]
pub struct Analyzer {
    scorer: AggregateScorer,
    classifier: TokenClassifier,
}

impl Analyzer {
    pub fn new(aggregate: Arc<dyn AggregateEngine>, token: Arc<dyn TokenEngine>) -> Self {
        Self {
            scorer: AggregateScorer::new(aggregate),
            classifier: TokenClassifier::new(token),
        }
    }

    pub fn scorer(&self) -> &AggregateScorer {
        &self.scorer
    }

    pub fn classifier(&self) -> &TokenClassifier {
        &self.classifier
    }

    /// Run both components and combine their output.
    #[instrument(skip(self, text), fields(operation = "analyze", text_len = text.len()))]
    pub fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        timed("analyze", || {
            let score = self.scorer.score(text)?;
            let tokens = self.classifier.classify(text)?;
            Ok(AnalysisReport::new(text, score, tokens))
        })
    }

    /// Aggregate polarity/subjectivity only.
    #[instrument(skip(self, text), fields(operation = "score", text_len = text.len()))]
    pub fn score(&self, text: &str) -> Result<SentimentScore> {
        timed("score", || self.scorer.score(text))
    }

    /// Aggregate score reshaped as a two-row table.
    pub fn score_table(&self, text: &str) -> Result<ScoreTable> {
        Ok(self.score(text)?.to_table())
    }

    /// Per-token classification only.
    #[instrument(skip(self, text), fields(operation = "classify_tokens", text_len = text.len()))]
    pub fn classify_tokens(&self, text: &str) -> Result<TokenClassification> {
        timed("classify_tokens", || self.classifier.classify(text))
    }
}

fn timed<T>(operation: &'static str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let start = Instant::now();
    let result = f();
    record_request(operation, start, result.is_ok());
    result
}

fn record_request(operation: &'static str, start: Instant, ok: bool) {
    let status = if ok { "ok" } else { "error" };
    let elapsed = start.elapsed().as_secs_f64();
    metrics::counter!(telemetry::REQUESTS_TOTAL,
        "operation" => operation,
        "status" => status,
    )
    .increment(1);
    metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS,
        "operation" => operation,
    )
    .record(elapsed);
}
