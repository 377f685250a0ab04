//! Lease Filter Library
//!
//! The filter overlay's navigation model and everything the terminal
//! front end needs around it: reference data, storage, and pure logic.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod logic;
pub mod model;
pub mod scroll;
pub mod services;
pub mod utils;
