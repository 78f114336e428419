//! Comma-separated tag lists
//!
//! The record service stores tags as one string ("utilities, monthly").
//! Models hold them as a trimmed, de-duplicated list.

/// Split a stored tag string into tags, dropping blanks and duplicates
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|existing| existing.eq_ignore_ascii_case(tag)) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Join tags into the stored representation
pub fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}
