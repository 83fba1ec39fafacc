//! Extraction Client — one backend call per fragment, fail-soft.
//!
//! Every outcome is classified into a `ParseResult`. Only `Records` reaches the
//! normalizer; `Malformed` and `TransportError` are logged and contribute nothing.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::experience::models::RawRecord;
use crate::experience::prompts::{build_experience_prompt, EXPERIENCE_SYSTEM};
use crate::llm_client::{strip_json_fences, ExtractionBackend, LlmError};

/// Wrapper keys some models use instead of returning a bare array.
const WRAPPER_KEYS: &[&str] = &["experience", "jobs", "items"];

/// Longest excerpt of a malformed reply kept for logging.
const LOG_EXCERPT_CHARS: usize = 200;

/// Outcome of a single extraction call.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    /// The reply parsed into a list of candidate records (possibly empty).
    Records(Vec<RawRecord>),
    /// The backend answered, but not with JSON of the expected shape.
    Malformed(String),
    /// The call itself failed: network, API status, timeout, empty content.
    TransportError(String),
}

impl ParseResult {
    /// Degrades every non-`Records` outcome to an empty list.
    pub fn into_records(self) -> Vec<RawRecord> {
        match self {
            ParseResult::Records(records) => records,
            ParseResult::Malformed(_) | ParseResult::TransportError(_) => Vec::new(),
        }
    }
}

/// Classifies raw backend text.
pub fn parse_backend_output(raw: &str) -> ParseResult {
    let text = strip_json_fences(raw);

    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) => return ParseResult::Malformed(raw.to_string()),
    };

    match value {
        Value::Array(items) => ParseResult::Records(items),
        Value::Object(mut map) => {
            for key in WRAPPER_KEYS {
                if matches!(map.get(*key), Some(Value::Array(_))) {
                    if let Some(Value::Array(items)) = map.remove(*key) {
                        return ParseResult::Records(items);
                    }
                }
            }
            ParseResult::Records(vec![Value::Object(map)])
        }
        _ => ParseResult::Malformed(raw.to_string()),
    }
}

/// Calls the injected backend once per fragment, bounded by a timeout.
#[derive(Clone)]
pub struct ExtractionClient {
    backend: Arc<dyn ExtractionBackend>,
    timeout: Duration,
}

impl ExtractionClient {
    pub fn new(backend: Arc<dyn ExtractionBackend>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    /// Performs exactly one backend call and classifies the outcome. Never errors.
    pub async fn call(&self, fragment: &str) -> ParseResult {
        let prompt = build_experience_prompt(fragment);
        let outcome =
            tokio::time::timeout(self.timeout, self.backend.complete(&prompt, EXPERIENCE_SYSTEM))
                .await;

        match outcome {
            Ok(Ok(text)) => parse_backend_output(&text),
            Ok(Err(err)) => ParseResult::TransportError(err.to_string()),
            Err(_) => {
                ParseResult::TransportError(LlmError::Timeout(self.timeout.as_secs()).to_string())
            }
        }
    }

    /// Extracts candidate records from one fragment; any failure yields an empty list.
    pub async fn extract(&self, index: usize, fragment: &str) -> Vec<RawRecord> {
        let result = self.call(fragment).await;

        match &result {
            ParseResult::Records(records) => {
                debug!(fragment = index, records = records.len(), "fragment extracted");
            }
            ParseResult::Malformed(raw) => {
                warn!(
                    fragment = index,
                    excerpt = %excerpt(raw),
                    "extraction backend returned malformed output, skipping fragment"
                );
            }
            ParseResult::TransportError(reason) => {
                warn!(fragment = index, %reason, "extraction call failed, skipping fragment");
            }
        }

        result.into_records()
    }
}

fn excerpt(raw: &str) -> String {
    raw.chars().take(LOG_EXCERPT_CHARS).collect()
}
