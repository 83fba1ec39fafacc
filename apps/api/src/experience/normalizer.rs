//! Record Normalizer — turns loosely-typed backend output into `ExperienceRecord`s.
//!
//! Coercion rules for scalar fields:
//! - string → trimmed
//! - number / bool → display form
//! - array → string-like items joined with ", "
//! - null / object / missing → empty

use serde_json::{Map, Value};
use thiserror::Error;

use crate::experience::models::{ExperienceRecord, RawRecord};

pub const BULLET_GLYPH: char = '•';

/// Punctuation that can separate a job header from a glued bullet.
const HEADER_TRIM: &[char] = &['-', '–', '—'];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("candidate is not a JSON object")]
    NotAnObject,

    #[error("candidate has no title, company, years, or bullets")]
    Meaningless,
}

#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    /// Append "," to `company` when `location` is also set ("Company, Location" display).
    pub company_location_comma: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            company_location_comma: true,
        }
    }
}

/// Validates and repairs one raw candidate.
pub fn normalize(raw: &RawRecord, options: NormalizeOptions) -> Result<ExperienceRecord, Rejection> {
    let obj = raw.as_object().ok_or(Rejection::NotAnObject)?;

    let mut record = ExperienceRecord {
        title: coerce_text(obj.get("title")),
        company: coerce_text(obj.get("company")),
        location: coerce_text(obj.get("location")),
        years: coerce_text(obj.get("years")),
        bullets: coerce_bullets(obj.get("bullets")),
    };

    if let Some((title, glued)) = split_header_bullet(&record.title) {
        record.title = title;
        if let Some(bullet) = glued {
            record.bullets.insert(0, bullet);
        }
    }

    if options.company_location_comma {
        apply_company_location_comma(&mut record);
    }

    if !record.is_meaningful() {
        return Err(Rejection::Meaningless);
    }

    Ok(record)
}

/// Detaches a bullet that the backend glued onto a job header.
///
/// Returns `None` when `title` has no bullet glyph. Otherwise splits on the first
/// glyph: the head (trimmed of whitespace and dashes) is the new title, the rest
/// (trimmed) is the detached bullet, `None` if it is empty.
pub fn split_header_bullet(title: &str) -> Option<(String, Option<String>)> {
    let (head, rest) = title.split_once(BULLET_GLYPH)?;

    let head = head
        .trim()
        .trim_matches(|c: char| HEADER_TRIM.contains(&c) || c.is_whitespace())
        .to_string();
    let rest = rest.trim();
    let bullet = (!rest.is_empty()).then(|| rest.to_string());

    Some((head, bullet))
}

fn apply_company_location_comma(record: &mut ExperienceRecord) {
    if !record.company.is_empty() && !record.location.is_empty() && !record.company.ends_with(',')
    {
        record.company.push(',');
    }
}

fn coerce_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(scalar_text)
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::Null) | Some(Value::Object(_)) | None => String::new(),
    }
}

fn coerce_bullets(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(bullet_text).collect(),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Vec::new()
            } else {
                vec![s.to_string()]
            }
        }
        _ => Vec::new(),
    }
}

fn bullet_text(item: &Value) -> Option<String> {
    match item {
        Value::Object(map) => text_field(map),
        other => scalar_text(other),
    }
}

fn text_field(map: &Map<String, Value>) -> Option<String> {
    map.get("text")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}
