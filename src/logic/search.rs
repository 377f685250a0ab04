//! Search Logic
//!
//! Pure functions for filtering list labels by the overlay's search term.
//! Supports wildcard patterns using the glob crate.

/// Match a search query against a row label
///
/// # Pattern Rules
/// - "*" matches any sequence of characters, "?" a single character
/// - Matches are case-insensitive
/// - A pattern matches the whole label or any single word of it
/// - Plain text also matches anywhere inside the label
///
/// # Examples
/// ```
/// use leasefilter::logic::search::search_matches;
///
/// assert!(search_matches("aud", "Audi"));
/// assert!(search_matches("q*", "Q4 e-tron"));
/// assert!(search_matches("electric", "Fuel type: Electric"));
/// assert!(!search_matches("bmw", "Audi"));
/// ```
pub fn search_matches(query: &str, label: &str) -> bool {
    if query.is_empty() {
        return true; // Empty query matches everything
    }

    let query_lower = query.to_lowercase();
    let label_lower = label.to_lowercase();

    if let Ok(pattern) = glob::Pattern::new(&query_lower) {
        if pattern.matches(&label_lower) {
            return true;
        }

        if label_lower
            .split(|c: char| c.is_whitespace() || c == ':')
            .filter(|word| !word.is_empty())
            .any(|word| pattern.matches(word))
        {
            return true;
        }
    }

    // Plain substring (also covers invalid glob patterns)
    label_lower.contains(&query_lower)
}
