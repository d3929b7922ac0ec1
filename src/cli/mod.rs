//! Command-line interface over the theme engine.
//!
//! Exposes the three operations frontends need: list the selectable themes
//! per category, show the active selection, and submit a new selection and
//! receive a human-readable per-category report.

mod commands;
pub mod formatting;

pub use commands::{Cli, Commands, run};
