//! Rule-based valence engine producing compound scores.
//!
//! Emoji are first replaced with their text descriptions. Each word's
//! lexicon valence is adjusted by its neighbourhood (boosters,
//! negations, ALL-CAPS emphasis, `but` contrast, `least`, `no`) and the
//! adjusted valences are summed, amplified by `!`/`?` emphasis and
//! normalised into `[-1.0, 1.0]` with `sum / sqrt(sum² + 15)`.

use std::path::Path;

use crate::Result;
use crate::types::PolarityScores;

use super::lexicon::{EmojiLexicon, VaderLexicon};
use super::traits::TokenEngine;

/// Booster increment for intensifiers ("very good").
const B_INCR: f64 = 0.293;
/// Booster decrement for dampeners ("slightly good").
const B_DECR: f64 = -0.293;
/// ALL-CAPS emphasis in mixed-case text.
const C_INCR: f64 = 0.733;
/// Negation scalar.
const N_SCALAR: f64 = -0.74;
/// Normalisation constant approximating the maximum expected sum.
const ALPHA: f64 = 15.0;

const NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

const BOOSTERS_UP: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerable", "considerably",
    "decidedly", "deeply", "enormous", "enormously", "entirely", "especially", "exceptional",
    "exceptionally", "extreme", "extremely", "fabulously", "fully", "greatly", "hella", "highly",
    "hugely", "incredible", "incredibly", "intensely", "major", "majorly", "more", "most",
    "particularly", "purely", "quite", "really", "remarkably", "so", "substantially",
    "thoroughly", "total", "totally", "tremendous", "tremendously", "uber", "unbelievably",
    "unusually", "utter", "utterly", "very",
];

const BOOSTERS_DOWN: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "kindof", "kind-of", "less", "little", "marginal",
    "marginally", "occasional", "occasionally", "partly", "scarce", "scarcely", "slight",
    "slightly", "somewhat", "sorta", "sortof", "sort-of",
];

/// At least one cased character and no lowercase ones.
fn is_upper(word: &str) -> bool {
    let mut cased = false;
    for c in word.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

fn booster(word: &str) -> Option<f64> {
    if BOOSTERS_UP.contains(&word) {
        Some(B_INCR)
    } else if BOOSTERS_DOWN.contains(&word) {
        Some(B_DECR)
    } else {
        None
    }
}

/// Whether any of the lower-cased words negates, including `n't` forms.
fn negated(words: &[&str]) -> bool {
    words
        .iter()
        .any(|w| NEGATE.contains(w) || w.contains("n't"))
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Strip surrounding ASCII punctuation unless that leaves two characters or
/// fewer, which keeps emoticons such as `:)` intact.
fn strip_punctuation(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

/// Extra intensity from `!` and repeated `?`.
fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * 0.292;
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * 0.18,
        _ => 0.96,
    };
    exclamations + question_amp
}

/// Words of a text prepared for valence lookup.
struct SentiText<'a> {
    words: Vec<&'a str>,
    lower: Vec<String>,
    /// Some, but not all, words are ALL CAPS.
    cap_differential: bool,
}

impl<'a> SentiText<'a> {
    fn new(text: &'a str) -> Self {
        let words: Vec<&str> = text.split_whitespace().map(strip_punctuation).collect();
        let lower = words.iter().map(|w| w.to_lowercase()).collect();
        let allcaps = words.iter().filter(|w| is_upper(w)).count();
        let differential = words.len() - allcaps;
        Self {
            cap_differential: differential > 0 && differential < words.len(),
            words,
            lower,
        }
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

/// Valence engine with compound-score normalisation.
#[derive(Debug, Clone)]
pub struct VaderEngine {
    lexicon: VaderLexicon,
    emoji: EmojiLexicon,
}

impl VaderEngine {
    /// Engine backed by the embedded English lexicon and emoji table.
    pub fn embedded() -> Result<Self> {
        Ok(Self::with_lexicon(VaderLexicon::embedded()?).with_emoji(EmojiLexicon::embedded()?))
    }

    /// Engine backed by a lexicon file and the embedded emoji table.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_lexicon(VaderLexicon::from_path(path)?).with_emoji(EmojiLexicon::embedded()?))
    }

    /// Engine without an emoji table; emoji score as unknown words.
    pub fn with_lexicon(lexicon: VaderLexicon) -> Self {
        Self {
            lexicon,
            emoji: EmojiLexicon::default(),
        }
    }

    /// Replace the emoji table.
    pub fn with_emoji(mut self, emoji: EmojiLexicon) -> Self {
        self.emoji = emoji;
        self
    }

    pub fn lexicon(&self) -> &VaderLexicon {
        &self.lexicon
    }

    pub fn emoji(&self) -> &EmojiLexicon {
        &self.emoji
    }

    /// Negative/neutral/positive proportions and compound score for a text.
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let described = self.emoji.describe(text);
        let text: &str = &described;
        let st = SentiText::new(text);
        let mut sentiments = Vec::with_capacity(st.len());

        for i in 0..st.len() {
            let word = st.lower[i].as_str();
            let kind_of = word == "kind" && st.lower.get(i + 1).is_some_and(|w| w == "of");
            if booster(word).is_some() || kind_of {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.valence(&st, i));
        }

        but_check(&st, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn in_lexicon(&self, word: &str) -> bool {
        self.lexicon.contains(word)
    }

    fn valence(&self, st: &SentiText<'_>, i: usize) -> f64 {
        let word = st.lower[i].as_str();
        let Some(base) = self.lexicon.get(word) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" directly before another lexicon word acts as a negation only
        if word == "no" && st.lower.get(i + 1).is_some_and(|next| self.in_lexicon(next)) {
            valence = 0.0;
        }
        let after_no = (i > 0 && st.lower[i - 1] == "no")
            || (i > 1 && st.lower[i - 2] == "no")
            || (i > 2
                && st.lower[i - 3] == "no"
                && ["or", "nor"].contains(&st.lower[i - 1].as_str()));
        if after_no {
            valence = base * N_SCALAR;
        }

        if is_upper(st.words[i]) && st.cap_differential {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for distance in 0..3 {
            if i <= distance {
                break;
            }
            let prev = i - (distance + 1);
            if self.in_lexicon(&st.lower[prev]) {
                continue;
            }
            let mut scalar = self.scalar_inc_dec(st, prev, valence);
            if distance == 1 {
                scalar *= 0.95;
            } else if distance == 2 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = negation_check(valence, &st.lower, distance, i);
        }

        self.least_check(valence, &st.lower, i)
    }

    fn scalar_inc_dec(&self, st: &SentiText<'_>, index: usize, valence: f64) -> f64 {
        let Some(mut scalar) = booster(&st.lower[index]) else {
            return 0.0;
        };
        if valence < 0.0 {
            scalar = -scalar;
        }
        if is_upper(st.words[index]) && st.cap_differential {
            if valence > 0.0 {
                scalar += C_INCR;
            } else {
                scalar -= C_INCR;
            }
        }
        scalar
    }

    fn least_check(&self, valence: f64, lower: &[String], i: usize) -> f64 {
        if i > 0 && lower[i - 1] == "least" && !self.in_lexicon(&lower[i - 1]) {
            if i > 1 && (lower[i - 2] == "at" || lower[i - 2] == "very") {
                return valence;
            }
            return valence * N_SCALAR;
        }
        valence
    }
}

fn negation_check(valence: f64, lower: &[String], distance: usize, i: usize) -> f64 {
    let so_this = |w: &str| w == "so" || w == "this";
    match distance {
        0 if negated(&[lower[i - 1].as_str()]) => valence * N_SCALAR,
        1 => {
            if lower[i - 2] == "never" && so_this(&lower[i - 1]) {
                valence * 1.25
            } else if lower[i - 2] == "without" && lower[i - 1] == "doubt" {
                valence
            } else if negated(&[lower[i - 2].as_str()]) {
                valence * N_SCALAR
            } else {
                valence
            }
        }
        2 => {
            // "never so ..." two words back, or "so"/"this" directly before
            if (lower[i - 3] == "never" && so_this(&lower[i - 2])) || so_this(&lower[i - 1]) {
                valence * 1.25
            } else if lower[i - 3] == "without"
                && (lower[i - 2] == "doubt" || lower[i - 1] == "doubt")
            {
                valence
            } else if negated(&[lower[i - 3].as_str()]) {
                valence * N_SCALAR
            } else {
                valence
            }
        }
        _ => valence,
    }
}

/// Words before the first `but` are halved, words after it weighted 1.5×.
fn but_check(st: &SentiText<'_>, sentiments: &mut [f64]) {
    let Some(bi) = st.lower.iter().position(|w| w == "but") else {
        return;
    };
    for (si, sentiment) in sentiments.iter_mut().enumerate() {
        if si < bi {
            *sentiment *= 0.5;
        } else if si > bi {
            *sentiment *= 1.5;
        }
    }
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::default();
    }

    let emphasis = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    if pos_sum > f64::abs(neg_sum) {
        pos_sum += emphasis;
    } else if pos_sum < f64::abs(neg_sum) {
        neg_sum -= emphasis;
    }

    let total = pos_sum + f64::abs(neg_sum) + neu_count;
    PolarityScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

impl TokenEngine for VaderEngine {
    fn name(&self) -> &str {
        "vader"
    }

    fn score(&self, token: &str) -> Result<f64> {
        Ok(self.polarity_scores(token).compound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> VaderEngine {
        VaderEngine::embedded().unwrap()
    }

    fn compound(text: &str) -> f64 {
        engine().polarity_scores(text).compound
    }

    #[test]
    fn single_words_match_reference_values() {
        assert_eq!(compound("love"), 0.6369);
        assert_eq!(compound("hate"), -0.5719);
        assert_eq!(compound("good"), 0.4404);
        assert_eq!(compound("bad"), -0.5423);
    }

    #[test]
    fn empty_and_unknown_score_zero() {
        assert_eq!(engine().polarity_scores(""), PolarityScores::default());
        let scores = engine().polarity_scores("table");
        assert_eq!(scores.compound, 0.0);
        assert_eq!(scores.neu, 1.0);
    }

    #[test]
    fn surrounding_punctuation_stripped() {
        assert_eq!(compound("\"hate.\""), -0.5719);
        // exclamation still adds emphasis
        assert_eq!(compound("love!"), 0.6696);
    }

    #[test]
    fn short_tokens_keep_punctuation() {
        assert!(compound(":)") > 0.1);
        assert!(compound(":(") < -0.1);
    }

    #[test]
    fn booster_increases_intensity() {
        assert_eq!(compound("very good"), 0.4927);
        assert_eq!(compound("very"), 0.0);
    }

    #[test]
    fn negation_flips_sign() {
        assert!(compound("not good") < 0.0);
        assert!(compound("isn't good") < 0.0);
        assert!(compound("not bad") > 0.0);
    }

    #[test]
    fn caps_emphasis_only_in_mixed_case() {
        assert!(compound("GOOD day") > compound("good day"));
        assert_eq!(compound("GOOD"), compound("good"));
    }

    #[test]
    fn but_shifts_weight_to_second_clause() {
        let scores = engine().polarity_scores("I love this but I hate that");
        // halved love (1.6) + 1.5x hate (-4.05)
        assert!(scores.compound < 0.0);
        assert!(scores.neg > scores.pos);
    }

    #[test]
    fn proportions_sum_to_one() {
        let s = engine().polarity_scores("The food was good but the service was terrible");
        assert!((s.neg + s.neu + s.pos - 1.0).abs() < 0.01);
    }

    #[test]
    fn kind_of_is_neutralised() {
        assert!(compound("kind") > 0.1);
        assert_eq!(compound("kind of"), 0.0);
    }

    #[test]
    fn emoji_scored_by_description() {
        // "smiling face with heart-eyes": smiling 1.6
        assert_eq!(compound("😍"), 0.3818);
        // "enraged face": enraged -1.7
        assert_eq!(compound("😡"), -0.4019);
        assert!(compound("😢") <= -0.1);
        assert!(compound("😂") > 0.1);
        assert_eq!(compound("❤"), 0.0);
    }

    #[test]
    fn emoji_next_to_words() {
        assert_eq!(compound("love😍"), compound("love 😍"));
        assert_eq!(compound("good ❤️"), compound("good"));
    }

    #[test]
    fn emoji_ignored_without_table() {
        let bare = VaderEngine::with_lexicon(VaderLexicon::embedded().unwrap());
        assert_eq!(bare.polarity_scores("😍").compound, 0.0);
        assert!(bare.emoji().is_empty());
    }

    #[test]
    fn common_words_match_reference_values() {
        for (word, expected) in [
            ("waste", -0.4215),
            ("recommend", 0.3612),
            ("favorite", 0.4588),
            ("great", 0.6249),
            ("terrible", -0.4767),
            ("happy", 0.5719),
            ("sad", -0.4767),
            ("thanks", 0.4404),
            ("worst", -0.6249),
            ("awesome", 0.6249),
        ] {
            assert_eq!(compound(word), expected, "word: {word}");
        }
    }

    #[test]
    fn this_directly_before_amplifies() {
        // "this" one word back counts even without "never" further back
        assert_eq!(compound("it was that good"), 0.4404);
        assert_eq!(compound("it was this good"), 0.5228);
        assert!(compound("it is never so good") > 0.0);
    }

    #[test]
    fn from_path_keeps_embedded_emoji() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vader.tsv");
        std::fs::write(&path, "smiling\t1.6\n").unwrap();

        let e = VaderEngine::from_path(&path).unwrap();
        assert_eq!(e.lexicon().len(), 1);
        assert_eq!(e.polarity_scores("😍").compound, 0.3818);
    }

    #[test]
    fn token_engine_uses_compound() {
        let e = engine();
        assert_eq!(TokenEngine::score(&e, "love").unwrap(), 0.6369);
        assert_eq!(e.name(), "vader");
    }
}
