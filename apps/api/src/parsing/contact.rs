use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.[A-Za-z]{2,}").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,2}\s*)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}").unwrap()
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

pub fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        name: guess_name(text),
        email: first_match(&EMAIL_RE, text),
        phone: first_match(&PHONE_RE, text),
    }
}

/// The first non-empty line that is neither an email nor a phone number.
pub fn guess_name(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !EMAIL_RE.is_match(line) && !PHONE_RE.is_match(line))
        .unwrap_or_default()
        .to_string()
}

fn first_match(re: &Regex, text: &str) -> String {
    re.find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
