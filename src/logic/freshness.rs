//! Reference data freshness
//!
//! Decides when the catalog is old enough to be fetched again.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Check whether data fetched at `fetched_at` is past its staleness window
///
/// Data that was never fetched is always stale. A clock that moved
/// backwards (fetch time in the future) counts as fresh.
///
/// # Examples
/// ```
/// use chrono::{Duration as ChronoDuration, Utc};
/// use std::time::Duration;
/// use leasefilter::logic::freshness::is_stale;
///
/// let now = Utc::now();
/// let window = Duration::from_secs(600);
/// assert!(is_stale(None, now, window));
/// assert!(!is_stale(Some(now - ChronoDuration::seconds(60)), now, window));
/// assert!(is_stale(Some(now - ChronoDuration::seconds(601)), now, window));
/// ```
pub fn is_stale(fetched_at: Option<DateTime<Utc>>, now: DateTime<Utc>, window: Duration) -> bool {
    let Some(fetched_at) = fetched_at else {
        return true;
    };

    match (now - fetched_at).to_std() {
        Ok(age) => age > window,
        Err(_) => false,
    }
}
