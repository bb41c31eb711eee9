//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - Timer scheduling
//! - The theming boundary

pub mod cli;
pub mod config;
pub mod scheduler;
pub mod theme;
pub mod tui;
