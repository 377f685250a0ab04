//! Scroll offsets remembered per route across sessions
//!
//! Covers the debounce window and the round trip through a cache file
//! that is reopened the way a second run of the program would.

use leasefilter::cache::CacheDb;
use leasefilter::logic::scroll::route_key;
use leasefilter::model::View;
use leasefilter::scroll::ScrollPersister;
use std::time::{Duration, Instant};

const DEBOUNCE: Duration = Duration::from_millis(150);

#[test]
fn test_offsets_survive_reopening_cache() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("cache.db");
    let audi_models = route_key(View::Models, Some("Audi"));

    {
        let cache = CacheDb::open(&db_path).unwrap();
        let mut persister = ScrollPersister::new(DEBOUNCE);
        let start = Instant::now();

        persister.record("makes", 12, start);
        persister.record(&audi_models, 4, start);
        assert!(persister.flush_if_due(&cache, start + DEBOUNCE * 2).unwrap());
    }

    let cache = CacheDb::open(&db_path).unwrap();
    let mut persister = ScrollPersister::new(DEBOUNCE);
    assert_eq!(persister.restore(&cache, "makes"), 12);
    assert_eq!(persister.restore(&cache, "models/audi"), 4);
    assert_eq!(persister.restore(&cache, "models/bmw"), 0);
}

#[test]
fn test_rapid_scrolling_writes_once_settled() {
    let cache = CacheDb::new_in_memory().unwrap();
    let mut persister = ScrollPersister::new(DEBOUNCE);
    let start = Instant::now();

    // Each change restarts the window
    for step in 0..5u32 {
        let at = start + Duration::from_millis(100) * step;
        persister.record("filters", step as usize, at);
        assert!(!persister.flush_if_due(&cache, at).unwrap());
    }
    assert_eq!(cache.get_scroll_position("filters").unwrap(), None);

    let settled = start + Duration::from_millis(400) + DEBOUNCE + Duration::from_millis(1);
    assert!(persister.flush_if_due(&cache, settled).unwrap());
    assert_eq!(cache.get_scroll_position("filters").unwrap(), Some(4));
    assert!(!persister.has_pending());
}

#[test]
fn test_flush_on_exit_ignores_debounce() {
    let cache = CacheDb::new_in_memory().unwrap();
    let mut persister = ScrollPersister::new(DEBOUNCE);

    persister.record("make-selection", 7, Instant::now());
    persister.flush(&cache).unwrap();

    assert_eq!(cache.get_scroll_position("make-selection").unwrap(), Some(7));
}

#[test]
fn test_route_keys_for_models_are_per_make() {
    assert_eq!(route_key(View::Models, Some("  Mercedes-Benz ")), "models/mercedes-benz");
    assert_eq!(route_key(View::Models, None), "models");
    assert_eq!(route_key(View::Makes, Some("Audi")), "makes");
}
