// SPDX-License-Identifier: MIT OR Apache-2.0

//! fzgrep - Interactive fuzzy line search library
//!
//! Shared modules for the fzgrep CLI tool.

pub mod config;
pub mod errors;
pub mod output;
pub mod search;
pub mod stats;
