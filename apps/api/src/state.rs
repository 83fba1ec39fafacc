use std::sync::Arc;

use crate::config::Config;
use crate::experience::ExperiencePipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup around the injected extraction backend.
    pub experience: Arc<ExperiencePipeline>,
}
