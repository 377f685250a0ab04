//! List cursor logic
//!
//! Pure functions for moving the cursor through the current view's rows.

/// Move the cursor down one row, wrapping to the top
///
/// With no cursor the first row is selected. Empty lists have no cursor.
///
/// # Examples
/// ```
/// use leasefilter::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, row_count: usize) -> Option<usize> {
    match (current, row_count) {
        (_, 0) => None,
        (Some(i), n) if i + 1 < n => Some(i + 1),
        (Some(_), _) | (None, _) => Some(0),
    }
}

/// Move the cursor up one row, wrapping to the bottom
///
/// With no cursor the last row is selected.
///
/// # Examples
/// ```
/// use leasefilter::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// ```
pub fn prev_selection(current: Option<usize>, row_count: usize) -> Option<usize> {
    match (current, row_count) {
        (_, 0) => None,
        (Some(i), n) if i > 0 && i <= n => Some(i - 1),
        _ => Some(row_count - 1),
    }
}

/// Keep a cursor inside a list whose length changed (e.g. after typing a
/// search term). A missing cursor is placed on the first row.
pub fn clamp_selection(current: Option<usize>, row_count: usize) -> Option<usize> {
    if row_count == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(row_count - 1))
}
