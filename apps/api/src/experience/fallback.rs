//! Fallback Extractor — deterministic line scan used only when the AI-assisted
//! pipeline finds nothing.
//!
//! A line naming a job title opens a record; bullet lines attach to the open record.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::experience::models::ExperienceRecord;
use crate::experience::normalizer::BULLET_GLYPH;

static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(manager|director|engineer|designer|developer|lead|analyst|consultant|architect|specialist|coordinator|administrator|scientist|intern|officer|president|founder|writer|editor|strategist)s?\b",
    )
    .unwrap()
});

const BULLET_PREFIXES: &[char] = &[BULLET_GLYPH, '-', '*'];

pub fn extract_fallback(text: &str) -> Vec<ExperienceRecord> {
    let mut records = Vec::new();
    let mut current: Option<ExperienceRecord> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(bullet) = line.strip_prefix(BULLET_PREFIXES) {
            if let Some(record) = current.as_mut() {
                let bullet = bullet.trim();
                if !bullet.is_empty() {
                    record.bullets.push(bullet.to_string());
                }
            }
            continue;
        }

        if TITLE_RE.is_match(line) {
            if let Some(done) = current.take() {
                records.push(done);
            }
            current = Some(ExperienceRecord {
                title: line.to_string(),
                ..Default::default()
            });
        }
    }

    if let Some(done) = current {
        records.push(done);
    }

    records
}
