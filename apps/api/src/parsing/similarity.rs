//! Résumé ↔ job-description similarity: TF-IDF vectors over the two-document
//! corpus, cosine similarity, reported as a 0–100 percentage.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
        "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
        "amongst", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
        "anywhere", "are", "around", "as", "at", "be", "became", "because", "become",
        "becomes", "been", "before", "beforehand", "behind", "being", "below", "beside",
        "besides", "between", "beyond", "both", "but", "by", "can", "cannot", "could", "did",
        "do", "does", "done", "down", "due", "during", "each", "eg", "either", "else",
        "elsewhere", "enough", "etc", "even", "ever", "every", "everyone", "everything",
        "everywhere", "except", "few", "for", "former", "formerly", "from", "further", "get",
        "give", "go", "had", "has", "have", "he", "hence", "her", "here", "hereafter",
        "hereby", "herein", "hers", "herself", "him", "himself", "his", "how", "however", "ie",
        "if", "in", "indeed", "into", "is", "it", "its", "itself", "just", "keep", "last",
        "latter", "least", "less", "made", "many", "may", "me", "meanwhile", "might", "mine",
        "more", "moreover", "most", "mostly", "much", "must", "my", "myself", "namely",
        "neither", "never", "nevertheless", "next", "no", "nobody", "none", "nor", "not",
        "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
        "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
        "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
        "seeming", "seems", "several", "she", "should", "since", "so", "some", "somehow",
        "someone", "something", "sometime", "sometimes", "somewhere", "still", "such", "than",
        "that", "the", "their", "them", "themselves", "then", "thence", "there", "thereafter",
        "thereby", "therefore", "therein", "thereupon", "these", "they", "this", "those",
        "though", "through", "throughout", "thru", "thus", "to", "together", "too", "toward",
        "towards", "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well",
        "were", "what", "whatever", "when", "whence", "whenever", "where", "whereafter",
        "whereas", "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while",
        "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
        "would", "yet", "you", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// Similarity of `resume` to `job_description` as a percentage rounded to 2 decimals.
pub fn match_score(resume: &str, job_description: &str) -> f64 {
    let docs = [term_counts(resume), term_counts(job_description)];

    let mut doc_freq: HashMap<&str, usize> = HashMap::new();
    for counts in &docs {
        for term in counts.keys() {
            *doc_freq.entry(term.as_str()).or_default() += 1;
        }
    }
    if doc_freq.is_empty() {
        return 0.0;
    }

    let n_docs = docs.len() as f64;
    let idf = |term: &str| {
        let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
        ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
    };

    let vectors: Vec<HashMap<&str, f64>> = docs
        .iter()
        .map(|counts| {
            let weighted: HashMap<&str, f64> = counts
                .iter()
                .map(|(term, &tf)| (term.as_str(), tf as f64 * idf(term.as_str())))
                .collect();
            l2_normalize(weighted)
        })
        .collect();

    let cosine: f64 = vectors[0]
        .iter()
        .filter_map(|(term, w)| vectors[1].get(term).map(|v| w * v))
        .sum();

    (cosine * 100.0 * 100.0).round() / 100.0
}

fn term_counts(text: &str) -> HashMap<String, usize> {
    let lower = text.to_lowercase();
    let mut counts = HashMap::new();
    for token in TOKEN_RE.find_iter(&lower) {
        let token = token.as_str();
        if !STOP_WORDS.contains(token) {
            *counts.entry(token.to_string()).or_default() += 1;
        }
    }
    counts
}

fn l2_normalize(mut vector: HashMap<&str, f64>) -> HashMap<&str, f64> {
    let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        vector.values_mut().for_each(|w| *w /= norm);
    }
    vector
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_100() {
        let text = "Senior python engineer building analytics pipelines";
        assert_eq!(match_score(text, text), 100.0);
    }

    #[test]
    fn test_disjoint_texts_score_0() {
        assert_eq!(match_score("python analytics", "marketing copywriting"), 0.0);
    }

    #[test]
    fn test_stop_words_only_scores_0() {
        assert_eq!(match_score("the and of", "a to the"), 0.0);
        assert_eq!(match_score("", ""), 0.0);
    }

    #[test]
    fn test_partial_overlap_is_between_bounds_and_rounded() {
        let score = match_score(
            "Product designer focused on UX research and design systems",
            "We need a UX designer to own our design systems",
        );
        assert!(score > 0.0 && score < 100.0, "score {score}");
        assert_eq!((score * 100.0).round() / 100.0, score);
    }

    #[test]
    fn test_tokens_are_case_insensitive() {
        assert_eq!(match_score("PYTHON Engineer", "python engineer"), 100.0);
    }
}
