//! # Study Nook
//!
//! A cozy terminal study companion: a themed room (library or cafe), a
//! pomodoro-style focus timer, a mock "who is studying" panel, a cosmetic
//! ambient sound panel and drifting particle overlays. Built with Ratatui
//! around an Elm-like architecture.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state owned by the root view
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (timers, theming, rendering)
//! - **View** (`presentation::components`): stateless rendering of the state
//!
//! ## Example Usage
//!
//! ```rust
//! use studynook::{core::msg::{timer::TimerMsg, Msg}, update, AppState, Cmd};
//!
//! let state = AppState::default();
//! let (state, commands) = update(Msg::Timer(TimerMsg::Start), state);
//!
//! assert!(state.timer.is_running());
//! assert!(matches!(commands[0], Cmd::StartInterval { .. }));
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Elm core: state, messages, update, commands, translation
//! - [`domain`] - Session phases, environments, particles, presence, ambience
//! - [`infrastructure`] - Terminal, scheduler, theming boundary, config, CLI
//! - [`integration`] - Runtime and the main loop
//! - [`presentation`] - Components, widgets, palettes, keybindings and styles
//! - [`utils`] - Logging, panic handling, paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState,
    translator::translate_raw_to_domain, update::update,
};
pub use crate::integration::elm_integration::{ElmRuntime, ElmRuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
