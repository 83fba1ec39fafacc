use serde::Serialize;

/// A candidate record as returned by the extraction backend, before any validation.
pub type RawRecord = serde_json::Value;

/// One job entry in the final `experience` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExperienceRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    /// Free-form date range, e.g. "2019 – Present".
    pub years: String,
    pub bullets: Vec<String>,
}

impl ExperienceRecord {
    /// The `(title, company, years)` triple used for merge decisions.
    pub fn dedup_key(&self) -> (&str, &str, &str) {
        (&self.title, &self.company, &self.years)
    }

    /// True when none of the identifying fields carries a value.
    pub fn has_empty_key(&self) -> bool {
        self.title.is_empty() && self.company.is_empty() && self.years.is_empty()
    }

    /// A record is kept if it can be identified or at least carries bullets.
    pub fn is_meaningful(&self) -> bool {
        !self.has_empty_key() || !self.bullets.is_empty()
    }
}
