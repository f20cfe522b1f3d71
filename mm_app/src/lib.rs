//! # mm_app
//!
//! Settings loading, logging and process wiring for the market maker notifier

pub mod cli;
pub mod config_loader;
pub mod tracing_setup;
