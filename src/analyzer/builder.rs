//! Builder for configuring analyzer instances

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use super::Analyzer;
use crate::Result;
use crate::config::Config;
use crate::engines::{
    AggregateEngine, EmojiLexicon, PatternEngine, TokenEngine, VaderEngine, VaderLexicon,
};

/// Main entry point for creating analyzers.
pub struct Sentimeter;

impl Sentimeter {
    /// Create a new builder for configuring the analyzer.
    pub fn builder() -> SentimeterBuilder {
        SentimeterBuilder::new()
    }
}

/// Builder for configuring analyzers.
///
/// Without any configuration the built-in engines are used with their
/// embedded lexicons.
#[derive(Default)]
pub struct SentimeterBuilder {
    aggregate_engine: Option<Arc<dyn AggregateEngine>>,
    token_engine: Option<Arc<dyn TokenEngine>>,
    pattern_lexicon: Option<PathBuf>,
    vader_lexicon: Option<PathBuf>,
    emoji_lexicon: Option<PathBuf>,
}

impl SentimeterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom engine for the aggregate score.
    pub fn aggregate_engine(mut self, engine: impl AggregateEngine + 'static) -> Self {
        self.aggregate_engine = Some(Arc::new(engine));
        self
    }

    /// Use a custom engine for per-token scores.
    pub fn token_engine(mut self, engine: impl TokenEngine + 'static) -> Self {
        self.token_engine = Some(Arc::new(engine));
        self
    }

    /// Load the polarity/subjectivity lexicon from a file.
    pub fn pattern_lexicon(mut self, path: impl Into<PathBuf>) -> Self {
        self.pattern_lexicon = Some(path.into());
        self
    }

    /// Load the valence lexicon from a file.
    pub fn vader_lexicon(mut self, path: impl Into<PathBuf>) -> Self {
        self.vader_lexicon = Some(path.into());
        self
    }

    /// Load the emoji description table from a file.
    pub fn emoji_lexicon(mut self, path: impl Into<PathBuf>) -> Self {
        self.emoji_lexicon = Some(path.into());
        self
    }

    /// Apply lexicon paths from a loaded configuration.
    pub fn config(mut self, config: &Config) -> Self {
        if let Some(ref path) = config.lexicons.pattern {
            self.pattern_lexicon = Some(path.clone());
        }
        if let Some(ref path) = config.lexicons.vader {
            self.vader_lexicon = Some(path.clone());
        }
        if let Some(ref path) = config.lexicons.emoji {
            self.emoji_lexicon = Some(path.clone());
        }
        self
    }

    /// Build the analyzer.
    ///
    /// Fails only when a configured lexicon cannot be read or parsed.
    pub fn build(self) -> Result<Analyzer> {
        let Self {
            aggregate_engine,
            token_engine,
            pattern_lexicon,
            vader_lexicon,
            emoji_lexicon,
        } = self;

        let aggregate: Arc<dyn AggregateEngine> = match (aggregate_engine, pattern_lexicon) {
            (Some(engine), path) => {
                if let Some(path) = path {
                    warn!(
                        path = %path.display(),
                        engine = engine.name(),
                        "custom engine overrides pattern lexicon"
                    );
                }
                engine
            }
            (None, Some(path)) => {
                info!(path = %path.display(), "loading pattern lexicon");
                Arc::new(PatternEngine::from_path(&path)?)
            }
            (None, None) => Arc::new(PatternEngine::embedded()?),
        };

        let token: Arc<dyn TokenEngine> = match token_engine {
            Some(engine) => {
                for path in vader_lexicon.iter().chain(emoji_lexicon.iter()) {
                    warn!(
                        path = %path.display(),
                        engine = engine.name(),
                        "custom engine overrides valence lexicon"
                    );
                }
                engine
            }
            None => Arc::new(vader_engine(vader_lexicon, emoji_lexicon)?),
        };

        Ok(Analyzer::new(aggregate, token))
    }
}

fn vader_engine(valence: Option<PathBuf>, emoji: Option<PathBuf>) -> Result<VaderEngine> {
    let lexicon = match valence {
        Some(path) => {
            info!(path = %path.display(), "loading valence lexicon");
            VaderLexicon::from_path(&path)?
        }
        None => VaderLexicon::embedded()?,
    };
    let emoji = match emoji {
        Some(path) => {
            info!(path = %path.display(), "loading emoji lexicon");
            EmojiLexicon::from_path(&path)?
        }
        None => EmojiLexicon::embedded()?,
    };
    Ok(VaderEngine::with_lexicon(lexicon).with_emoji(emoji))
}
