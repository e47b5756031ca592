//! Polarity/subjectivity engine.
//!
//! Scores a text by averaging the polarity and subjectivity of every known
//! word. Context adjusts individual assessments before averaging:
//!
//! - an adverb marked as a modifier scales the next known word by its
//!   intensity (`very good` = 0.7 × 1.3);
//! - a negation (`not`, `n't`, `never`) before a known word turns it into
//!   `polarity × -0.5` (`not good` is slightly bad, `not bad` slightly good);
//! - `!` boosts the preceding assessment's polarity by 25%.
//!
//! Text without any known word scores `(0.0, 0.0)`.

use std::path::Path;

use crate::Result;
use crate::types::SentimentScore;

use super::lexicon::{PatternEntry, PatternLexicon};
use super::traits::AggregateEngine;

const NEGATIONS: &[&str] = &["not", "n't", "never"];

/// Exclamation boost applied to the preceding assessment.
const EXCLAMATION_BOOST: f64 = 1.25;

/// Scaling applied to negated polarity.
const NEGATION_SCALAR: f64 = -0.5;

/// One scored phrase: a known word plus the modifiers and negation merged
/// into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub words: Vec<String>,
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Assessment under construction.
struct Draft {
    words: Vec<String>,
    polarity: f64,
    subjectivity: f64,
    intensity: f64,
    negated: bool,
}

impl Draft {
    fn new(word: &str, entry: &PatternEntry) -> Self {
        Self {
            words: vec![word.to_string()],
            polarity: entry.polarity,
            subjectivity: entry.subjectivity,
            intensity: entry.intensity,
            negated: false,
        }
    }

    fn finish(self) -> Assessment {
        let polarity = if self.negated {
            self.polarity * NEGATION_SCALAR
        } else {
            self.polarity
        };
        Assessment {
            words: self.words,
            polarity,
            subjectivity: self.subjectivity,
        }
    }
}

/// Lexicon-averaging engine for whole-text polarity and subjectivity.
#[derive(Debug, Clone)]
pub struct PatternEngine {
    lexicon: PatternLexicon,
}

impl PatternEngine {
    /// Engine backed by the embedded English lexicon.
    pub fn embedded() -> Result<Self> {
        Ok(Self::with_lexicon(PatternLexicon::embedded()?))
    }

    /// Engine backed by a lexicon file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_lexicon(PatternLexicon::from_path(path)?))
    }

    pub fn with_lexicon(lexicon: PatternLexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &PatternLexicon {
        &self.lexicon
    }

    /// Split text into lower-cased words, `n't` contractions, `!` marks and
    /// emoticons known to the lexicon. Other punctuation is dropped.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            let lower = chunk.to_lowercase();
            if !lower.chars().all(char::is_alphanumeric) && self.lexicon.contains(&lower) {
                tokens.push(lower);
                continue;
            }

            let mut word = String::new();
            for c in lower.chars() {
                if c.is_alphanumeric() || c == '\'' || c == '-' {
                    word.push(c);
                } else {
                    flush_word(&mut word, &mut tokens);
                    if c == '!' {
                        tokens.push("!".to_string());
                    }
                }
            }
            flush_word(&mut word, &mut tokens);
        }
        tokens
    }

    /// Scored phrases found in the text, in order.
    pub fn assessments(&self, text: &str) -> Vec<Assessment> {
        let mut drafts: Vec<Draft> = Vec::new();
        // Preceding modifier and negation still in effect
        let mut modifier: Option<String> = None;
        let mut negation: Option<String> = None;

        for word in self.tokenize(text) {
            if let Some(entry) = self.lexicon.get(&word) {
                let merged = match drafts.last_mut() {
                    Some(last) if modifier.is_some() => {
                        last.words.push(word.clone());
                        last.polarity = (entry.polarity * last.intensity).clamp(-1.0, 1.0);
                        last.subjectivity = (entry.subjectivity * last.intensity).clamp(-1.0, 1.0);
                        last.intensity = entry.intensity;
                        true
                    }
                    _ => false,
                };
                if !merged {
                    drafts.push(Draft::new(&word, entry));
                }
                if let Some(neg) = negation.take()
                    && let Some(last) = drafts.last_mut()
                {
                    last.words.insert(0, neg);
                    last.intensity = 1.0 / last.intensity;
                    last.negated = true;
                }
                modifier = entry.modifier.then(|| word.clone());
                if NEGATIONS.contains(&word.as_str()) {
                    negation = Some(word);
                }
                continue;
            }

            if NEGATIONS.contains(&word.as_str()) {
                negation = Some(word.clone());
            } else if negation.is_some() && word.trim_matches('\'').chars().count() > 1 {
                // Negation carries across one-letter words only
                negation = None;
            }

            if negation.is_some() && modifier.is_some() {
                // "really not good"
                if let (Some(neg), Some(last)) = (negation.take(), drafts.last_mut()) {
                    last.words.push(neg);
                    last.negated = true;
                }
            } else if modifier.is_some() && word.chars().count() > 2 {
                modifier = None;
            }

            if word == "!"
                && let Some(last) = drafts.last_mut()
            {
                last.words.push(word);
                last.polarity = (last.polarity * EXCLAMATION_BOOST).clamp(-1.0, 1.0);
            }
        }

        drafts.into_iter().map(Draft::finish).collect()
    }

    /// Mean polarity and subjectivity over all assessments.
    pub fn sentiment(&self, text: &str) -> SentimentScore {
        let assessments = self.assessments(text);
        if assessments.is_empty() {
            return SentimentScore::default();
        }
        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.polarity).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / n;
        SentimentScore::new(polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0))
    }
}

fn flush_word(word: &mut String, tokens: &mut Vec<String>) {
    let trimmed = word.trim_matches(|c| c == '\'' || c == '-');
    if !trimmed.is_empty() {
        match trimmed.strip_suffix("n't") {
            Some(stem) if !stem.is_empty() => {
                tokens.push(stem.to_string());
                tokens.push("n't".to_string());
            }
            _ => tokens.push(trimmed.to_string()),
        }
    }
    word.clear();
}

impl AggregateEngine for PatternEngine {
    fn name(&self) -> &str {
        "pattern"
    }

    fn analyze(&self, text: &str) -> Result<SentimentScore> {
        Ok(self.sentiment(text))
    }
}
