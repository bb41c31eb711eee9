//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components for each panel
//! - Reusable widgets (scene, particle field)
//! - Palettes and background assets
//! - Configuration (styles, keybindings)

pub mod assets;
pub mod components;
pub mod config;
pub mod palette;
pub mod widgets;
