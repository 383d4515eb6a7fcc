//! Command-line surface.
//!
//! Subcommands and flags are declared with clap's derive macros.

pub mod args;
