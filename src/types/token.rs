//! Per-token classification types.
//!
//! A token is classified from its compound score using fixed thresholds:
//! strictly above `0.1` is positive, at or below `-0.1` is negative, and
//! everything in between is neutral. The band is asymmetric (`0.1` itself is
//! neutral while `-0.1` is negative) and that asymmetry is part of the
//! contract.

use serde::{Deserialize, Serialize};

/// Scores strictly above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Scores at or below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Three-way decision for a single token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class", content = "score", rename_all = "snake_case")]
pub enum TokenSentiment {
    Positive(f64),
    Negative(f64),
    Neutral,
}

impl TokenSentiment {
    /// Classify a compound score.
    pub fn classify(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            TokenSentiment::Positive(score)
        } else if score <= NEGATIVE_THRESHOLD {
            TokenSentiment::Negative(score)
        } else {
            TokenSentiment::Neutral
        }
    }

    /// Label used for logging and metrics.
    pub fn class_name(&self) -> &'static str {
        match self {
            TokenSentiment::Positive(_) => "positive",
            TokenSentiment::Negative(_) => "negative",
            TokenSentiment::Neutral => "neutral",
        }
    }
}

/// One entry in a positive/negative group.
///
/// Groups interleave a token entry with its score entry, so a group for
/// `["love", "like"]` reads `[Token("love"), Score(0.64), Token("like"), Score(0.36)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupEntry {
    Token(String),
    Score(f64),
}

/// Tokens partitioned into positive, negative and neutral groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenClassification {
    pub positives: Vec<GroupEntry>,
    pub negatives: Vec<GroupEntry>,
    pub neutral: Vec<String>,
}

impl TokenClassification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token according to its decision.
    pub fn push(&mut self, token: &str, sentiment: TokenSentiment) {
        match sentiment {
            TokenSentiment::Positive(score) => {
                self.positives.push(GroupEntry::Token(token.to_string()));
                self.positives.push(GroupEntry::Score(score));
            }
            TokenSentiment::Negative(score) => {
                self.negatives.push(GroupEntry::Token(token.to_string()));
                self.negatives.push(GroupEntry::Score(score));
            }
            TokenSentiment::Neutral => self.neutral.push(token.to_string()),
        }
    }

    /// `(token, score)` pairs from the positives group.
    pub fn positive_pairs(&self) -> Vec<(&str, f64)> {
        pairs(&self.positives)
    }

    /// `(token, score)` pairs from the negatives group.
    pub fn negative_pairs(&self) -> Vec<(&str, f64)> {
        pairs(&self.negatives)
    }

    /// Number of tokens across all three groups.
    pub fn token_count(&self) -> usize {
        self.positives.len() / 2 + self.negatives.len() / 2 + self.neutral.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positives.is_empty() && self.negatives.is_empty() && self.neutral.is_empty()
    }
}

fn pairs(entries: &[GroupEntry]) -> Vec<(&str, f64)> {
    entries
        .chunks_exact(2)
        .filter_map(|chunk| match chunk {
            [GroupEntry::Token(t), GroupEntry::Score(s)] => Some((t.as_str(), *s)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_clear_cases() {
        assert_eq!(TokenSentiment::classify(0.6369), TokenSentiment::Positive(0.6369));
        assert_eq!(TokenSentiment::classify(-0.5719), TokenSentiment::Negative(-0.5719));
        assert_eq!(TokenSentiment::classify(0.0), TokenSentiment::Neutral);
    }

    #[test]
    fn classify_upper_boundary_is_exclusive() {
        // Exactly 0.1 stays neutral
        assert_eq!(TokenSentiment::classify(0.1), TokenSentiment::Neutral);
        assert_eq!(
            TokenSentiment::classify(0.1000001),
            TokenSentiment::Positive(0.1000001)
        );
    }

    #[test]
    fn classify_lower_boundary_is_inclusive() {
        // Exactly -0.1 is already negative
        assert_eq!(TokenSentiment::classify(-0.1), TokenSentiment::Negative(-0.1));
        assert_eq!(TokenSentiment::classify(-0.0999999), TokenSentiment::Neutral);
    }

    #[test]
    fn push_interleaves_token_and_score() {
        let mut c = TokenClassification::new();
        c.push("love", TokenSentiment::Positive(0.6369));
        c.push("I", TokenSentiment::Neutral);
        c.push("hate", TokenSentiment::Negative(-0.5719));

        assert_eq!(
            c.positives,
            vec![GroupEntry::Token("love".into()), GroupEntry::Score(0.6369)]
        );
        assert_eq!(c.negative_pairs(), vec![("hate", -0.5719)]);
        assert_eq!(c.neutral, vec!["I".to_string()]);
        assert_eq!(c.token_count(), 3);
    }

    #[test]
    fn serializes_mixed_groups() {
        let mut c = TokenClassification::new();
        c.push("good", TokenSentiment::Positive(0.4404));
        c.push("it", TokenSentiment::Neutral);

        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "positives": ["good", 0.4404],
                "negatives": [],
                "neutral": ["it"],
            })
        );
    }

    #[test]
    fn deserializes_mixed_groups() {
        let c: TokenClassification = serde_json::from_str(
            r#"{"positives": ["good", 0.4404], "negatives": ["bad", -0.5423], "neutral": []}"#,
        )
        .unwrap();
        assert_eq!(c.positive_pairs(), vec![("good", 0.4404)]);
        assert_eq!(c.negative_pairs(), vec![("bad", -0.5423)]);
    }
}
