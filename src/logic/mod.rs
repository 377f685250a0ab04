//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Classification of reference-data load failures
//! - formatting: Filter summaries for display
//! - freshness: Staleness window for reference data
//! - navigation: List cursor movement
//! - scroll: Scroll offset keys and debounce decisions
//! - search: Search term matching
//! - ui: Toast timing

pub mod errors;
pub mod formatting;
pub mod freshness;
pub mod navigation;
pub mod scroll;
pub mod search;
pub mod ui;
