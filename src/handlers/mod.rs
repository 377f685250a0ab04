//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - catalog: Replies from the background catalog service
//! - keyboard: User keyboard input
//!
//! Handlers are functions that take &mut App and process one event.

pub mod catalog;
pub mod keyboard;

// Re-export for convenience
pub use catalog::handle_catalog_response;
pub use keyboard::handle_key;
