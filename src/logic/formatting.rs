//! Formatting and display logic
//!
//! Pure functions for formatting filter selections for display.

/// Summarize selected values for a one-line display
///
/// Shows at most `max_shown` values and counts the rest.
///
/// # Examples
/// ```
/// use leasefilter::logic::formatting::summarize_values;
///
/// assert_eq!(summarize_values::<&str>(&[], 2), "Any");
/// assert_eq!(summarize_values(&["Audi"], 2), "Audi");
/// assert_eq!(summarize_values(&["Audi", "BMW", "Kia", "Volvo"], 2), "Audi, BMW +2");
/// ```
pub fn summarize_values<S: AsRef<str>>(values: &[S], max_shown: usize) -> String {
    if values.is_empty() {
        return "Any".to_string();
    }

    let shown: Vec<&str> = values
        .iter()
        .take(max_shown.max(1))
        .map(|v| v.as_ref())
        .collect();
    let rest = values.len() - shown.len();

    if rest == 0 {
        shown.join(", ")
    } else {
        format!("{} +{}", shown.join(", "), rest)
    }
}

/// Button caption for the closed overlay
///
/// # Examples
/// ```
/// use leasefilter::logic::formatting::filter_button_label;
///
/// assert_eq!(filter_button_label(0), "Filters");
/// assert_eq!(filter_button_label(3), "Filters (3)");
/// ```
pub fn filter_button_label(active_count: usize) -> String {
    if active_count == 0 {
        "Filters".to_string()
    } else {
        format!("Filters ({})", active_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_exactly_max() {
        assert_eq!(summarize_values(&["A4", "Q5"], 2), "A4, Q5");
    }

    #[test]
    fn test_summarize_zero_max_still_shows_one() {
        assert_eq!(summarize_values(&["A4", "Q5"], 0), "A4 +1");
    }

    #[test]
    fn test_summarize_owned_strings() {
        let values = vec!["Diesel".to_string(), "Electric".to_string(), "Petrol".to_string()];
        assert_eq!(summarize_values(&values, 1), "Diesel +2");
    }
}
