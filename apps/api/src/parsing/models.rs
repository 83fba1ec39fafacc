use serde::Serialize;

use crate::experience::ExperienceRecord;

/// Response body of `POST /parse`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeResponse {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: Vec<ExperienceRecord>,
    pub education: Vec<String>,
    pub skills: Vec<String>,
    /// 0–100, present only when a job description was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
}
