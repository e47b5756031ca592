//! Sentiment engines.
//!
//! Two built-in engines ship with the crate, each driven by an embedded
//! lexicon that can be swapped for a user-supplied file:
//!
//! - [`PatternEngine`]: polarity/subjectivity averaging over known words,
//!   with modifier and negation handling. Backs the aggregate scorer.
//! - [`VaderEngine`]: rule-based valence scoring normalised to a compound
//!   score. Backs the token classifier.

pub mod lexicon;
pub mod pattern;
pub mod traits;
pub mod vader;

pub use lexicon::{EmojiLexicon, PatternEntry, PatternLexicon, VaderLexicon};
pub use pattern::PatternEngine;
pub use traits::{AggregateEngine, TokenEngine};
pub use vader::VaderEngine;
