//! Assembles a `ResumeResponse` from plain résumé text.
//!
//! Flow: contact fields → experience pipeline → education → skills →
//!       optional job-description match score.

use tracing::info;

use crate::experience::ExperiencePipeline;
use crate::parsing::contact::extract_contact;
use crate::parsing::education::extract_education;
use crate::parsing::models::ResumeResponse;
use crate::parsing::similarity::match_score;
use crate::parsing::skills::extract_skills;

pub async fn build_resume(
    text: &str,
    job_description: Option<&str>,
    pipeline: &ExperiencePipeline,
) -> ResumeResponse {
    let contact = extract_contact(text);
    let experience = pipeline.extract(text).await;
    let education = extract_education(text);
    let skills = extract_skills(text);

    let match_score = job_description
        .map(str::trim)
        .filter(|jd| !jd.is_empty())
        .map(|jd| match_score(text, jd));

    info!(
        chars = text.chars().count(),
        experience = experience.len(),
        education = education.len(),
        skills = skills.len(),
        scored = match_score.is_some(),
        "resume parsed"
    );

    ResumeResponse {
        name: contact.name,
        email: contact.email,
        phone: contact.phone,
        experience,
        education,
        skills,
        match_score,
    }
}
