//! chirp - a terminal mock of a social feed
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod models;
pub mod seed;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod widgets;
