//! Sentimeter error types

/// Sentimeter error types
#[derive(Debug, thiserror::Error)]
pub enum SentimeterError {
    // Engine errors
    /// A sentiment engine failed while scoring. Propagated as-is.
    #[error("engine '{engine}' failed: {message}")]
    Engine { engine: String, message: String },

    // Lexicon errors
    #[error("lexicon error at line {line}: {message}")]
    Lexicon { line: usize, message: String },

    // Data errors
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl SentimeterError {
    /// Shorthand for an engine failure.
    pub fn engine(engine: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Engine {
            engine: engine.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a malformed lexicon row.
    pub fn lexicon(line: usize, message: impl Into<String>) -> Self {
        Self::Lexicon {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for Sentimeter operations
pub type Result<T> = std::result::Result<T, SentimeterError>;
