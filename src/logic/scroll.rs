//! Scroll persistence logic
//!
//! Pure functions deciding where and when list offsets are stored.

use std::time::Duration;

use crate::model::View;

/// Storage key for a view's scroll offset
///
/// The models list is keyed per make so every make keeps its own position.
///
/// # Examples
/// ```
/// use leasefilter::model::View;
/// use leasefilter::logic::scroll::route_key;
///
/// assert_eq!(route_key(View::Makes, None), "makes");
/// assert_eq!(route_key(View::Models, Some("Audi")), "models/audi");
/// assert_eq!(route_key(View::Makes, Some("Audi")), "makes");
/// ```
pub fn route_key(view: View, make: Option<&str>) -> String {
    match (view, make) {
        (View::Models, Some(make)) => format!("{}/{}", view.route_key(), make.trim().to_lowercase()),
        _ => view.route_key().to_string(),
    }
}

/// Debounce decision for pending scroll writes
///
/// A write happens only once the offset has been still for longer than
/// `debounce`, so fast scrolling produces a single write.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use leasefilter::logic::scroll::should_persist;
///
/// let window = Duration::from_millis(150);
/// assert!(!should_persist(false, Duration::from_secs(5), window));
/// assert!(!should_persist(true, Duration::from_millis(20), window));
/// assert!(should_persist(true, Duration::from_millis(200), window));
/// ```
pub fn should_persist(has_pending: bool, since_last_change: Duration, debounce: Duration) -> bool {
    has_pending && since_last_change > debounce
}
