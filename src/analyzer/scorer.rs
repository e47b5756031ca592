//! Aggregate scorer: whole-text polarity and subjectivity.

use std::sync::Arc;

use crate::Result;
use crate::engines::AggregateEngine;
use crate::types::{ScoreTable, SentimentScore};

/// Runs the aggregate engine and reshapes its output for display.
#[derive(Clone)]
pub struct AggregateScorer {
    engine: Arc<dyn AggregateEngine>,
}

impl AggregateScorer {
    pub fn new(engine: Arc<dyn AggregateEngine>) -> Self {
        Self { engine }
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Polarity/subjectivity for the whole text. Engine errors propagate.
    pub fn score(&self, text: &str) -> Result<SentimentScore> {
        self.engine.analyze(text)
    }

    /// Score reshaped into the `polarity`/`subjectivity` table.
    pub fn table(&self, text: &str) -> Result<ScoreTable> {
        Ok(self.score(text)?.to_table())
    }
}

impl std::fmt::Debug for AggregateScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AggregateScorer")
            .field("engine", &self.engine.name())
            .finish()
    }
}
