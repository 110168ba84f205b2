//! String utilities for the domain layer.

/// Trim surrounding whitespace and cap the result at `max_chars` characters.
///
/// Longer input keeps its first `max_chars - 1` characters followed by `...`.
/// Counts `char`s, so multi-byte text is never split mid-character.
pub fn truncate(s: &str, max_chars: usize) -> String {
    let s = s.trim();
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars <= 1 {
        return String::new();
    }
    let head: String = s.chars().take(max_chars - 1).collect();
    format!("{head}...")
}

/// Returns true when the string is empty or whitespace only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Keep the first `n` distinct, non-blank entries (trimmed), in input order.
pub fn unique_first_n<I, S>(items: I, n: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::with_capacity(n);
    if n == 0 {
        return out;
    }
    for item in items {
        let clean = item.as_ref().trim();
        if clean.is_empty() || out.iter().any(|seen| seen == clean) {
            continue;
        }
        out.push(clean.to_string());
        if out.len() == n {
            break;
        }
    }
    out
}
