//! Experience Pipeline — chunk → extract → normalize → dedup, with fallback.
//!
//! The fallback extractor replaces the AI result only when that result is empty;
//! the two are never merged.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::Config;
use crate::experience::client::ExtractionClient;
use crate::experience::dedup::dedup;
use crate::experience::dispatcher::ChunkDispatcher;
use crate::experience::fallback::extract_fallback;
use crate::experience::models::{ExperienceRecord, RawRecord};
use crate::experience::normalizer::{normalize, NormalizeOptions};
use crate::llm_client::ExtractionBackend;

pub struct ExperiencePipeline {
    dispatcher: ChunkDispatcher,
    options: NormalizeOptions,
}

impl ExperiencePipeline {
    pub fn new(dispatcher: ChunkDispatcher, options: NormalizeOptions) -> Self {
        Self {
            dispatcher,
            options,
        }
    }

    /// Wires a pipeline from config around an injected backend.
    pub fn from_config(backend: Arc<dyn ExtractionBackend>, config: &Config) -> Self {
        let client =
            ExtractionClient::new(backend, Duration::from_secs(config.extraction_timeout_secs));
        Self::new(
            ChunkDispatcher::new(client, config.chunk_max_chars),
            NormalizeOptions {
                company_location_comma: config.company_location_comma,
            },
        )
    }

    pub async fn extract(&self, text: &str) -> Vec<ExperienceRecord> {
        let raw = self.dispatcher.dispatch(text).await;
        let raw_count = raw.len();
        let records = dedup(normalize_all(&raw, self.options));

        if records.is_empty() {
            let fallback = extract_fallback(text);
            info!(
                raw_candidates = raw_count,
                fallback_records = fallback.len(),
                "AI extraction found no experience, using fallback extractor"
            );
            return fallback;
        }

        info!(
            raw_candidates = raw_count,
            records = records.len(),
            "experience extracted"
        );
        records
    }
}

fn normalize_all(raw: &[RawRecord], options: NormalizeOptions) -> Vec<ExperienceRecord> {
    raw.iter()
        .enumerate()
        .filter_map(|(idx, candidate)| match normalize(candidate, options) {
            Ok(record) => Some(record),
            Err(rejection) => {
                debug!(candidate = idx, %rejection, "dropping candidate record");
                None
            }
        })
        .collect()
}
