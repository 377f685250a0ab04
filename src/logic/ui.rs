//! UI timing logic
//!
//! Pure functions for time-based UI transitions.

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Check whether a toast shown `elapsed_ms` ago should be dismissed
///
/// # Examples
/// ```
/// use leasefilter::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(0));
/// assert!(!should_dismiss_toast(1500));
/// assert!(should_dismiss_toast(1501));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms > TOAST_DURATION_MS
}
