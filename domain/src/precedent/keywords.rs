//! Keyword extraction for precedent indexing and search

/// Characters treated as word separators in addition to whitespace
const SEPARATORS: [char; 12] = [',', '.', ':', ';', '(', ')', '[', ']', '/', '\\', '\n', '\t'];

const STOPWORDS: [&str; 13] = [
    "the", "and", "for", "with", "that", "this", "from", "into", "were", "been", "will", "case",
    "verdict",
];

/// Minimum token length, in bytes
const MIN_KEYWORD_LEN: usize = 3;

/// Extract lowercase keywords from free text
///
/// Tokens shorter than three bytes and common stopwords are dropped; the
/// first occurrence of each remaining token is kept, in order.
///
/// # Example
///
/// ```
/// use senate_domain::precedent::extract_keywords;
///
/// let keywords = extract_keywords("Exclude the trap/cleanup context (cleanup handlers).");
/// assert_eq!(keywords, vec!["exclude", "trap", "cleanup", "context", "handlers"]);
/// ```
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase().replace(SEPARATORS, " ");

    let mut out: Vec<String> = Vec::new();
    for token in lowered.split_whitespace() {
        if token.len() < MIN_KEYWORD_LEN || STOPWORDS.contains(&token) {
            continue;
        }
        if out.iter().any(|seen| seen == token) {
            continue;
        }
        out.push(token.to_string());
    }
    out
}
