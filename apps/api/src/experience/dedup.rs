use std::collections::HashSet;

use crate::experience::models::ExperienceRecord;

/// Collapses duplicate job entries, keeping the first occurrence of each.
///
/// Two records are duplicates when their `(title, company, years)` keys match and
/// are not all empty. Later duplicates are discarded whole; their bullets are not
/// merged into the survivor. Records with an all-empty key are never collapsed,
/// but are dropped when they carry no bullets either.
///
/// Output order is first-seen order, and `dedup(dedup(x)) == dedup(x)`.
pub fn dedup(records: Vec<ExperienceRecord>) -> Vec<ExperienceRecord> {
    let mut seen: HashSet<(String, String, String)> = HashSet::new();
    let mut kept = Vec::with_capacity(records.len());

    for record in records {
        if !record.is_meaningful() {
            continue;
        }

        if !record.has_empty_key() {
            let (title, company, years) = record.dedup_key();
            let key = (title.to_string(), company.to_string(), years.to_string());
            if !seen.insert(key) {
                continue;
            }
        }

        kept.push(record);
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, company: &str, years: &str, bullets: &[&str]) -> ExperienceRecord {
        ExperienceRecord {
            title: title.to_string(),
            company: company.to_string(),
            location: String::new(),
            years: years.to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
        }
    }

    #[test]
    fn test_identical_keys_collapse_to_first_seen() {
        let records = vec![
            record("X", "Y", "2020-2021", &["first bullet"]),
            record("X", "Y", "2020-2021", &["second bullet"]),
        ];

        let result = dedup(records);

        assert_eq!(result, vec![record("X", "Y", "2020-2021", &["first bullet"])]);
    }

    #[test]
    fn test_partial_key_match_is_not_duplicate() {
        let records = vec![
            record("Engineer", "Acme", "2020", &[]),
            record("Engineer", "Acme", "2021", &[]),
            record("Engineer", "Globex", "2020", &[]),
        ];
        assert_eq!(dedup(records).len(), 3);
    }

    #[test]
    fn test_meaningless_record_dropped() {
        let records = vec![
            record("", "", "", &[]),
            record("Engineer", "", "", &[]),
        ];
        assert_eq!(dedup(records), vec![record("Engineer", "", "", &[])]);
    }

    #[test]
    fn test_empty_keys_with_bullets_never_collapse() {
        let records = vec![
            record("", "", "", &["orphan one"]),
            record("", "", "", &["orphan one"]),
        ];
        assert_eq!(dedup(records).len(), 2);
    }

    #[test]
    fn test_first_seen_order_preserved() {
        let records = vec![
            record("B", "", "", &[]),
            record("A", "", "", &[]),
            record("B", "", "", &["dup"]),
            record("C", "", "", &[]),
        ];
        let titles: Vec<_> = dedup(records).into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_location_is_not_part_of_key() {
        let mut second = record("Engineer", "Acme", "2020", &[]);
        second.location = "Remote".to_string();
        let records = vec![record("Engineer", "Acme", "2020", &[]), second];
        assert_eq!(dedup(records).len(), 1);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let records = vec![
            record("X", "Y", "2020", &["a"]),
            record("", "", "", &["orphan"]),
            record("X", "Y", "2020", &["b"]),
            record("", "", "", &[]),
            record("", "", "", &["orphan"]),
            record("Z", "", "", &[]),
        ];

        let once = dedup(records);
        let twice = dedup(once.clone());

        assert_eq!(once, twice);
        assert_eq!(once.len(), 4);
    }
}
