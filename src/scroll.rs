//! Scroll position persistence
//!
//! Remembers the list offset of every route and writes changes to the
//! cache once scrolling has settled.

use anyhow::Result;
use std::collections::{BTreeSet, HashMap};
use std::time::{Duration, Instant};

use crate::cache::CacheDb;
use crate::logic::scroll::should_persist;

pub struct ScrollPersister {
    debounce: Duration,
    offsets: HashMap<String, usize>,
    dirty: BTreeSet<String>,
    last_change: Option<Instant>,
}

impl ScrollPersister {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            offsets: HashMap::new(),
            dirty: BTreeSet::new(),
            last_change: None,
        }
    }

    /// Remember `offset` for `route_key`. Unchanged offsets are ignored.
    pub fn record(&mut self, route_key: &str, offset: usize, now: Instant) {
        if self.offsets.get(route_key) == Some(&offset) {
            return;
        }
        self.offsets.insert(route_key.to_string(), offset);
        self.dirty.insert(route_key.to_string());
        self.last_change = Some(now);
    }

    pub fn has_pending(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Write pending offsets if the debounce window has passed.
    /// Returns whether a write happened.
    pub fn flush_if_due(&mut self, cache: &CacheDb, now: Instant) -> Result<bool> {
        let since = self
            .last_change
            .map(|at| now.saturating_duration_since(at))
            .unwrap_or_default();

        if !should_persist(self.has_pending(), since, self.debounce) {
            return Ok(false);
        }
        self.flush(cache)?;
        Ok(true)
    }

    /// Write pending offsets now
    pub fn flush(&mut self, cache: &CacheDb) -> Result<()> {
        if self.dirty.is_empty() {
            return Ok(());
        }

        let entries: Vec<(String, usize)> = self
            .dirty
            .iter()
            .filter_map(|key| self.offsets.get(key).map(|offset| (key.clone(), *offset)))
            .collect();

        cache.save_scroll_positions(&entries)?;
        tracing::debug!("persisted {} scroll offsets", entries.len());
        self.dirty.clear();
        Ok(())
    }

    /// Offset to show when `route_key` is entered: the in-memory value,
    /// else the stored one, else 0. Cache errors read as 0.
    pub fn restore(&mut self, cache: &CacheDb, route_key: &str) -> usize {
        if let Some(offset) = self.offsets.get(route_key) {
            return *offset;
        }

        match cache.get_scroll_position(route_key) {
            Ok(Some(offset)) => {
                self.offsets.insert(route_key.to_string(), offset);
                offset
            }
            Ok(None) => 0,
            Err(e) => {
                tracing::warn!("Failed to read scroll position for {}: {}", route_key, e);
                0
            }
        }
    }
}
