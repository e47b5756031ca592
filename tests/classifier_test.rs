//! Tests for the token classifier's partition and threshold policy.

use std::collections::HashMap;
use std::sync::Arc;

use sentimeter::analyzer::{TokenClassifier, tokenize};
use sentimeter::{GroupEntry, Result, TokenEngine, TokenSentiment, VaderEngine};

// ============================================================================
// Stub engines
// ============================================================================

/// Returns fixed scores per token, 0.0 for anything else.
struct FixedScores(HashMap<&'static str, f64>);

impl FixedScores {
    fn new(scores: &[(&'static str, f64)]) -> Self {
        Self(scores.iter().copied().collect())
    }
}

impl TokenEngine for FixedScores {
    fn name(&self) -> &str {
        "fixed"
    }

    fn score(&self, token: &str) -> Result<f64> {
        Ok(self.0.get(token).copied().unwrap_or(0.0))
    }
}

fn classifier(scores: &[(&'static str, f64)]) -> TokenClassifier {
    TokenClassifier::new(Arc::new(FixedScores::new(scores)))
}

fn vader() -> TokenClassifier {
    TokenClassifier::new(Arc::new(VaderEngine::embedded().unwrap()))
}

// ============================================================================
// Threshold policy
// ============================================================================

#[test]
fn score_of_exactly_point_one_is_neutral() {
    let c = classifier(&[("meh", 0.1)]);
    let result = c.classify("meh").unwrap();
    assert!(result.positives.is_empty());
    assert_eq!(result.neutral, ["meh"]);
}

#[test]
fn score_of_exactly_minus_point_one_is_negative() {
    // The neutral band is (-0.1, 0.1]: the lower edge belongs to negatives.
    let c = classifier(&[("hmm", -0.1)]);
    let result = c.classify("hmm").unwrap();
    assert!(result.neutral.is_empty());
    assert_eq!(
        result.negatives,
        vec![GroupEntry::Token("hmm".into()), GroupEntry::Score(-0.1)]
    );
}

#[test]
fn just_inside_the_band_is_neutral() {
    let c = classifier(&[("a", 0.0999), ("b", -0.0999)]);
    let result = c.classify("a b").unwrap();
    assert_eq!(result.neutral, ["a", "b"]);
}

#[test]
fn classify_token_returns_tagged_decision() {
    let c = classifier(&[("up", 0.5), ("down", -0.5)]);
    assert_eq!(c.classify_token("up").unwrap(), TokenSentiment::Positive(0.5));
    assert_eq!(c.classify_token("down").unwrap(), TokenSentiment::Negative(-0.5));
    assert_eq!(c.classify_token("flat").unwrap(), TokenSentiment::Neutral);
}

// ============================================================================
// Partition
// ============================================================================

#[test]
fn empty_text_yields_empty_groups() {
    let result = vader().classify("").unwrap();
    assert!(result.is_empty());
    assert_eq!(result.token_count(), 0);
}

#[test]
fn every_token_lands_in_exactly_one_group() {
    let text = "great  awful\tthe great\nthing awful ok";
    let c = classifier(&[("great", 0.6), ("awful", -0.5)]);
    let result = c.classify(text).unwrap();

    assert_eq!(result.token_count(), tokenize(text).count());
    assert_eq!(result.positive_pairs(), vec![("great", 0.6), ("great", 0.6)]);
    assert_eq!(result.negative_pairs(), vec![("awful", -0.5), ("awful", -0.5)]);
    assert_eq!(result.neutral, ["the", "thing", "ok"]);
}

#[test]
fn tokens_are_not_normalised() {
    // Raw substrings are scored and stored, punctuation and case included.
    let c = classifier(&[("Great!", 0.7)]);
    let result = c.classify("Great! great!").unwrap();
    assert_eq!(result.positive_pairs(), vec![("Great!", 0.7)]);
    assert_eq!(result.neutral, ["great!"]);
}

#[test]
fn love_and_hate_example() {
    let result = vader().classify("I love this but I hate that").unwrap();

    let positives = result.positive_pairs();
    assert_eq!(positives.len(), 1);
    assert_eq!(positives[0].0, "love");
    assert!(positives[0].1 > 0.1);

    let negatives = result.negative_pairs();
    assert_eq!(negatives.len(), 1);
    assert_eq!(negatives[0].0, "hate");
    assert!(negatives[0].1 <= -0.1);

    assert_eq!(result.neutral, ["I", "this", "but", "I", "that"]);
}

#[test]
fn classification_is_idempotent() {
    let c = vader();
    let text = "What a wonderful, terrible, ordinary day!";
    assert_eq!(c.classify(text).unwrap(), c.classify(text).unwrap());
}

// ============================================================================
// Error propagation
// ============================================================================

struct BrokenEngine;

impl TokenEngine for BrokenEngine {
    fn name(&self) -> &str {
        "broken"
    }

    fn score(&self, token: &str) -> Result<f64> {
        if token == "boom" {
            Err(sentimeter::SentimeterError::engine("broken", "lexicon state corrupted"))
        } else {
            Ok(0.0)
        }
    }
}

#[test]
fn engine_error_propagates_unmodified() {
    let c = TokenClassifier::new(Arc::new(BrokenEngine));
    let err = c.classify("fine then boom").unwrap_err();
    assert_eq!(err.to_string(), "engine 'broken' failed: lexicon state corrupted");
    assert!(c.classify("fine then").is_ok());
}

// ============================================================================
// Built-in valence engine
// ============================================================================

#[test]
fn emoji_tokens_are_classified() {
    let result = vader().classify("great 😍 day 😡").unwrap();
    let positives: Vec<&str> = result.positive_pairs().iter().map(|(t, _)| *t).collect();
    assert_eq!(positives, ["great", "😍"]);
    assert_eq!(result.negative_pairs()[0].0, "😡");
    assert_eq!(result.neutral, ["day"]);
}

#[test]
fn common_words_are_classified() {
    let result = vader()
        .classify("waste recommend favorite terrible thanks table")
        .unwrap();
    assert_eq!(
        result.positive_pairs(),
        vec![("recommend", 0.3612), ("favorite", 0.4588), ("thanks", 0.4404)]
    );
    assert_eq!(result.negative_pairs(), vec![("waste", -0.4215), ("terrible", -0.4767)]);
    assert_eq!(result.neutral, ["table"]);
}
