//! Token classifier: buckets whitespace tokens by compound score.
//!
//! Tokens are maximal runs of non-whitespace characters, taken verbatim:
//! no punctuation stripping, no case folding. Each token is scored on its
//! own and routed through [`TokenSentiment::classify`].

use std::sync::Arc;

use tracing::debug;

use crate::Result;
use crate::engines::TokenEngine;
use crate::telemetry;
use crate::types::{TokenClassification, TokenSentiment};

/// Whitespace-delimited tokens of a text, in order.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Runs the per-token engine over every token and partitions the results.
#[derive(Clone)]
pub struct TokenClassifier {
    engine: Arc<dyn TokenEngine>,
}

impl TokenClassifier {
    pub fn new(engine: Arc<dyn TokenEngine>) -> Self {
        Self { engine }
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Decision for a single token.
    pub fn classify_token(&self, token: &str) -> Result<TokenSentiment> {
        let score = self.engine.score(token)?;
        Ok(TokenSentiment::classify(score))
    }

    /// Partition every token of `text`. Empty text yields empty groups.
    pub fn classify(&self, text: &str) -> Result<TokenClassification> {
        let tokens: Vec<&str> = tokenize(text).collect();
        let scores = self.engine.score_batch(&tokens)?;
        let mut result = TokenClassification::new();
        for (token, score) in tokens.into_iter().zip(scores) {
            let sentiment = TokenSentiment::classify(score);
            debug!(token, class = sentiment.class_name(), "classified token");
            metrics::counter!(telemetry::TOKENS_TOTAL, "class" => sentiment.class_name())
                .increment(1);
            result.push(token, sentiment);
        }
        Ok(result)
    }
}

impl std::fmt::Debug for TokenClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenClassifier")
            .field("engine", &self.engine.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_keeps_raw_substrings() {
        let tokens: Vec<_> = tokenize("  Hello,\tworld!!\n  :) ").collect();
        assert_eq!(tokens, ["Hello,", "world!!", ":)"]);
    }

    #[test]
    fn tokenize_empty() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize(" \r\n ").count(), 0);
    }
}
