use std::collections::BTreeSet;

/// The fixed keyword list matched against résumé text.
pub const SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "Marketing",
    "Design",
    "Leadership",
    "Content",
    "UX",
    "SEO",
    "Analytics",
    "Copywriting",
];

/// Case-insensitive substring match against `SKILLS`; sorted and unique.
pub fn extract_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    SKILLS
        .iter()
        .filter(|skill| lower.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
