// Experience extraction LLM prompt templates.

pub const EXPERIENCE_SYSTEM: &str = crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// Per-fragment instruction. `{chunk}` is replaced with the fragment text.
pub const EXPERIENCE_PROMPT: &str = r#"Return ONLY a JSON array; each object must look like:
{
 "title": "", "company": "", "location": "", "years": "Start – End",
 "bullets": ["...", "..."]
}
If info missing leave it blank. Resume chunk:

{chunk}

JSON:"#;

pub fn build_experience_prompt(fragment: &str) -> String {
    EXPERIENCE_PROMPT.replace("{chunk}", fragment)
}
