//! CLI module for Policy Table
//!
//! One-shot `list` and `statuses` commands plus the interactive `tui`.
//! Filtering lives in `policy_table_core`; these modules only gather input
//! and render the visible set.

pub mod config;
pub mod error;
pub mod output;

pub mod list;
pub mod statuses;

pub mod tui;
