use once_cell::sync::Lazy;
use regex::Regex;

static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(Bachelor|Master|Associate|B\.?S\.?|M\.?S\.?|MBA|PhD)").unwrap()
});
static SCHOOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(University|College|Institute|School)").unwrap());

/// Lines that name both a degree and a school, trimmed of list punctuation.
pub fn extract_education(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| DEGREE_RE.is_match(line) && SCHOOL_RE.is_match(line))
        .map(|line| line.trim_matches(|c: char| c == ' ' || c == '•' || c == '-').to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
