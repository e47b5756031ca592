//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder; without one, all metric
//! calls are no-ops.
//!
//! # Common labels
//!
//! - `operation`: "analyze", "score" or "classify_tokens"
//! - `status`: outcome: "ok" or "error"
//! - `class`: token class: "positive", "negative" or "neutral"

/// Total analyzer requests.
///
/// Labels: `operation`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "sentimeter_requests_total";

/// Request duration in seconds.
///
/// Labels: `operation`.
pub const REQUEST_DURATION_SECONDS: &str = "sentimeter_request_duration_seconds";

/// Total tokens classified.
///
/// Labels: `class`.
pub const TOKENS_TOTAL: &str = "sentimeter_tokens_total";
