//! Lexicon loading for the built-in engines.
//!
//! All lexicons are tab-separated text, one entry per line. Lines without a
//! tab are split on whitespace instead. Blank lines and lines starting with
//! `#` are skipped.
//!
//! Pattern rows: `word polarity subjectivity intensity [RB]`, where the
//! trailing `RB` marks an adverb that modifies the following word.
//!
//! Valence rows: `word valence [...]`. Extra columns are ignored, so the
//! upstream four-column VADER lexicon (word, mean, std-dev, raw ratings)
//! loads unchanged, including entries such as `( '}{' )` that contain
//! spaces.
//!
//! Emoji rows: `emoji description`. The valence engine replaces each emoji
//! with its description before scoring.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{Result, SentimeterError};

const EMBEDDED_PATTERN: &str = include_str!("../../data/pattern_en.tsv");
const EMBEDDED_VADER: &str = include_str!("../../data/vader_en.tsv");
const EMBEDDED_EMOJI: &str = include_str!("../../data/emoji_en.tsv");

/// Emoji presentation selector, dropped when emoji are described.
const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Non-comment, non-blank lines with their 1-based line numbers.
fn rows(source: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(n, line)| (n, columns(line)))
}

fn columns(line: &str) -> Vec<&str> {
    if line.contains('\t') {
        line.split('\t').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    }
}

fn parse_f64(value: &str, line: usize, column: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|e| SentimeterError::lexicon(line, format!("invalid {column} '{value}': {e}")))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SentimeterError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// Pattern lexicon
// ============================================================================

/// Polarity, subjectivity and intensity for one word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    pub intensity: f64,
    /// Adverb that scales the next known word by its intensity.
    pub modifier: bool,
}

/// Word table for [`PatternEngine`](super::PatternEngine).
#[derive(Debug, Clone, Default)]
pub struct PatternLexicon {
    words: HashMap<String, PatternEntry>,
}

impl PatternLexicon {
    /// The lexicon compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_PATTERN)
    }

    /// Load a lexicon file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::parse(&read(path.as_ref())?)
    }

    pub fn parse(source: &str) -> Result<Self> {
        let mut words = HashMap::new();
        for (line, cols) in rows(source) {
            if cols.len() < 4 {
                return Err(SentimeterError::lexicon(
                    line,
                    format!("expected at least 4 columns, found {}", cols.len()),
                ));
            }
            let modifier = match cols.get(4) {
                None => false,
                Some(&"RB") => true,
                Some(other) => {
                    return Err(SentimeterError::lexicon(
                        line,
                        format!("unknown tag '{other}'"),
                    ));
                }
            };
            let entry = PatternEntry {
                polarity: parse_f64(cols[1], line, "polarity")?,
                subjectivity: parse_f64(cols[2], line, "subjectivity")?,
                intensity: parse_f64(cols[3], line, "intensity")?,
                modifier,
            };
            words.insert(cols[0].to_lowercase(), entry);
        }
        debug!(entries = words.len(), "parsed pattern lexicon");
        Ok(Self { words })
    }

    pub fn get(&self, word: &str) -> Option<&PatternEntry> {
        self.words.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// ============================================================================
// Valence lexicon
// ============================================================================

/// Word-to-valence table for [`VaderEngine`](super::VaderEngine).
///
/// Valences are on the upstream scale of roughly `-4.0..=4.0`.
#[derive(Debug, Clone, Default)]
pub struct VaderLexicon {
    words: HashMap<String, f64>,
}

impl VaderLexicon {
    /// The lexicon compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_VADER)
    }

    /// Load a lexicon file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::parse(&read(path.as_ref())?)
    }

    pub fn parse(source: &str) -> Result<Self> {
        let mut words = HashMap::new();
        for (line, cols) in rows(source) {
            if cols.len() < 2 {
                return Err(SentimeterError::lexicon(line, "missing valence column"));
            }
            let valence = parse_f64(cols[1], line, "valence")?;
            words.insert(cols[0].to_lowercase(), valence);
        }
        debug!(entries = words.len(), "parsed valence lexicon");
        Ok(Self { words })
    }

    /// Valence of a lower-cased word.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// ============================================================================
// Emoji lexicon
// ============================================================================

/// Emoji-to-description table for [`VaderEngine`](super::VaderEngine).
#[derive(Debug, Clone, Default)]
pub struct EmojiLexicon {
    emoji: HashMap<char, String>,
}

impl EmojiLexicon {
    /// The table compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_EMOJI)
    }

    /// Load a table file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::parse(&read(path.as_ref())?)
    }

    /// Parse a table. Keys spanning several code points (flags, keycaps,
    /// joined sequences) are skipped since text is described one character
    /// at a time.
    pub fn parse(source: &str) -> Result<Self> {
        let mut emoji = HashMap::new();
        let mut skipped = 0usize;
        for (line, cols) in rows(source) {
            let description = match cols.get(1) {
                Some(d) if !d.is_empty() => *d,
                _ => return Err(SentimeterError::lexicon(line, "missing description column")),
            };
            let mut chars = cols[0].chars().filter(|&c| c != VARIATION_SELECTOR);
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    emoji.insert(c, description.to_string());
                }
                _ => skipped += 1,
            }
        }
        debug!(entries = emoji.len(), skipped, "parsed emoji lexicon");
        Ok(Self { emoji })
    }

    pub fn get(&self, emoji: char) -> Option<&str> {
        self.emoji.get(&emoji).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.emoji.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emoji.is_empty()
    }

    /// Replace every known emoji with its description, separated from a
    /// preceding word by a space. Text without known emoji is borrowed.
    pub fn describe<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !text.chars().any(|c| self.emoji.contains_key(&c)) {
            return Cow::Borrowed(text);
        }
        let mut out = String::with_capacity(text.len() * 2);
        let mut prev_space = true;
        for c in text.chars() {
            if c == VARIATION_SELECTOR {
                continue;
            }
            match self.emoji.get(&c) {
                Some(description) => {
                    if !prev_space {
                        out.push(' ');
                    }
                    out.push_str(description);
                    prev_space = false;
                }
                None => {
                    out.push(c);
                    prev_space = c == ' ';
                }
            }
        }
        Cow::Owned(out.trim().to_string())
    }
}
