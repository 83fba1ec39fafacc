// Résumé parsing: document conversion, the deterministic field extractors,
// and the `/parse` endpoint that assembles them around the experience pipeline.

pub mod contact;
pub mod document;
pub mod education;
pub mod handlers;
pub mod models;
pub mod service;
pub mod similarity;
pub mod skills;
