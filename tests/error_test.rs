use sentimeter::{Result, SentimeterError};

#[test]
fn test_error_display() {
    let err = SentimeterError::engine("vader", "lexicon missing");
    assert_eq!(err.to_string(), "engine 'vader' failed: lexicon missing");
}

#[test]
fn test_lexicon_error_names_line() {
    let err = SentimeterError::lexicon(12, "missing valence column");
    assert!(err.to_string().contains("line 12"));
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(SentimeterError::Configuration("bad".into()))
    }
    assert!(returns_error().is_err());
}

// ============================================================================
// Conversions
// ============================================================================

#[test]
fn io_error_names_path() {
    let err = sentimeter::engines::PatternLexicon::from_path("/nonexistent/pattern.tsv")
        .unwrap_err();
    match &err {
        SentimeterError::Io { path, source } => {
            assert_eq!(path, std::path::Path::new("/nonexistent/pattern.tsv"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().starts_with("failed to read /nonexistent/pattern.tsv"));
}

#[test]
fn unserializable_output_is_json_error() {
    let mut map = std::collections::HashMap::new();
    map.insert((1, 2), 0.5);
    let err = sentimeter::types::to_json(&map).unwrap_err();
    assert!(matches!(err, SentimeterError::Json(_)));
}

#[test]
fn json_error_converts() {
    fn parse() -> Result<sentimeter::SentimentScore> {
        Ok(serde_json::from_str("{not json")?)
    }
    assert!(matches!(parse().unwrap_err(), SentimeterError::Json(_)));
}
