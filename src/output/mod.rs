//! Terminal output formatting
//!
//! Display utilities for the line-mode game and CLI commands.

pub mod display;
pub mod formatters;

pub use display::{print_grid, print_keyboard, print_share, print_stats, print_summary};
