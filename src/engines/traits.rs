//! Engine traits for the two scoring capabilities.
//!
//! Engines implement one capability-specific trait each rather than a
//! single combined trait, so the aggregate scorer and the token classifier
//! can be backed by different lexicons or by entirely external libraries.
//!
//! Engines are treated as black boxes: whatever they return is used as-is,
//! and any error they raise is propagated to the caller unmodified.

use crate::Result;
use crate::types::SentimentScore;

// ============================================================================
// Aggregate Engine
// ============================================================================

/// Engine producing a polarity/subjectivity pair for a whole text.
pub trait AggregateEngine: Send + Sync {
    /// Engine name for logging/debugging.
    fn name(&self) -> &str;

    /// Score a whole text. Empty text yields a zero score.
    fn analyze(&self, text: &str) -> Result<SentimentScore>;
}

// ============================================================================
// Token Engine
// ============================================================================

/// Engine producing a compound score in `[-1.0, 1.0]` for a single token.
pub trait TokenEngine: Send + Sync {
    /// Engine name for logging/debugging.
    fn name(&self) -> &str;

    /// Compound score for one token.
    fn score(&self, token: &str) -> Result<f64>;

    /// Score several tokens.
    ///
    /// Default implementation calls `score` sequentially.
    fn score_batch(&self, tokens: &[&str]) -> Result<Vec<f64>> {
        let mut results = Vec::with_capacity(tokens.len());
        for token in tokens {
            results.push(self.score(token)?);
        }
        Ok(results)
    }
}

impl<T: AggregateEngine + ?Sized> AggregateEngine for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn analyze(&self, text: &str) -> Result<SentimentScore> {
        (**self).analyze(text)
    }
}

impl<T: TokenEngine + ?Sized> TokenEngine for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn score(&self, token: &str) -> Result<f64> {
        (**self).score(token)
    }

    fn score_batch(&self, tokens: &[&str]) -> Result<Vec<f64>> {
        (**self).score_batch(tokens)
    }
}
