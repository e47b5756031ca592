//! Aggregate sentiment score types.

use serde::{Deserialize, Serialize};

/// Polarity/subjectivity pair for a whole text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Negative-to-positive sentiment (-1.0 to 1.0).
    pub polarity: f64,
    /// Factual-to-opinionated (0.0 to 1.0).
    pub subjectivity: f64,
}

impl SentimentScore {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
        }
    }

    /// Reshape into a two-row table: `polarity`, then `subjectivity`.
    pub fn to_table(&self) -> ScoreTable {
        ScoreTable {
            rows: vec![
                ScoreRow::new(ScoreTable::POLARITY, self.polarity),
                ScoreRow::new(ScoreTable::SUBJECTIVITY, self.subjectivity),
            ],
        }
    }
}

/// A single `(metric, value)` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub metric: String,
    pub value: f64,
}

impl ScoreRow {
    pub fn new(metric: impl Into<String>, value: f64) -> Self {
        Self {
            metric: metric.into(),
            value,
        }
    }
}

/// Ordered metric table derived from a [`SentimentScore`].
///
/// Always holds exactly two rows in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    rows: Vec<ScoreRow>,
}

impl ScoreTable {
    pub const POLARITY: &'static str = "polarity";
    pub const SUBJECTIVITY: &'static str = "subjectivity";

    pub fn rows(&self) -> &[ScoreRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a metric value by name.
    pub fn get(&self, metric: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.metric == metric)
            .map(|row| row.value)
    }
}

impl From<SentimentScore> for ScoreTable {
    fn from(score: SentimentScore) -> Self {
        score.to_table()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_in_fixed_order() {
        let table = SentimentScore::new(-0.15, 0.75).to_table();
        let names: Vec<_> = table.rows().iter().map(|r| r.metric.as_str()).collect();
        assert_eq!(names, ["polarity", "subjectivity"]);
        assert_eq!(table.get("polarity"), Some(-0.15));
        assert_eq!(table.get("subjectivity"), Some(0.75));
    }

    #[test]
    fn zero_score_still_has_two_rows() {
        let table = ScoreTable::from(SentimentScore::default());
        assert_eq!(table.len(), 2);
        assert!(table.rows().iter().all(|r| r.value == 0.0));
    }

    #[test]
    fn unknown_metric_is_none() {
        let table = SentimentScore::new(0.5, 0.5).to_table();
        assert_eq!(table.get("compound"), None);
    }
}
