// Experience extraction: chunking, per-fragment LLM extraction, normalization,
// deduplication, and the deterministic fallback.
// All LLM calls go through llm_client — nothing here talks HTTP directly.

pub mod chunker;
pub mod client;
pub mod dedup;
pub mod dispatcher;
pub mod fallback;
pub mod models;
pub mod normalizer;
pub mod pipeline;
pub mod prompts;

pub use models::ExperienceRecord;
pub use pipeline::ExperiencePipeline;
