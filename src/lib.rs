//! codesift library crate.
//!
//! The binary in `main.rs` plus the integration tests both drive the
//! review pipeline through these modules.

pub mod bundle;
pub mod config;
pub mod constants;
pub mod env;
pub mod github;
pub mod models;
pub mod output;
pub mod prompt;
pub mod providers;
pub mod service;
