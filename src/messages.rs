//! Message types for the Elm Architecture pattern
//!
//! Every event the run loop observes is turned into a `Msg` and handed to
//! `App::update`.
//!
//! Message sources:
//! - User input (keyboard events)
//! - Catalog service replies
//! - Timers (one tick per loop iteration)

use crossterm::event::KeyEvent;

use leasefilter::services::CatalogResponse;

/// Unified message type for all application events
#[derive(Debug)]
pub enum Msg {
    /// User pressed a key
    KeyPress(KeyEvent),

    /// Reference data refresh finished
    Catalog(CatalogResponse),

    /// Periodic tick for time-based updates
    /// (toast expiry, scroll persistence, catalog staleness)
    Tick,
}
