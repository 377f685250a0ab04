//! Catalog Model
//!
//! Reference data shown by the overlay and its load state.

use chrono::{DateTime, Utc};

use super::types::LoadState;
use crate::catalog::Catalog;

#[derive(Clone, Debug, Default)]
pub struct CatalogModel {
    /// Last good catalog (live or snapshot)
    pub catalog: Catalog,

    pub load_state: LoadState,

    /// When `catalog` was fetched; None until something was loaded
    pub fetched_at: Option<DateTime<Utc>>,

    /// When the last refresh was started, successful or not
    pub attempted_at: Option<DateTime<Utc>>,
}

impl CatalogModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_loading(&mut self, now: DateTime<Utc>) {
        self.load_state = LoadState::Loading;
        self.attempted_at = Some(now);
    }

    /// Install a freshly loaded catalog
    pub fn apply_loaded(&mut self, catalog: Catalog, fetched_at: DateTime<Utc>) {
        self.catalog = catalog;
        self.fetched_at = Some(fetched_at);
        self.load_state = LoadState::Ready;
    }

    /// Record a failed refresh; the previous catalog stays in place
    pub fn apply_failed(&mut self, message: String) {
        self.load_state = LoadState::Failed(message);
    }

    /// Most recent fetch or fetch attempt, whichever is later
    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.fetched_at.max(self.attempted_at)
    }

    pub fn has_data(&self) -> bool {
        !self.catalog.is_empty()
    }
}
