//! Integration layer
//!
//! Wires the Elm core to the terminal:
//! - `ElmRuntime`: queues, translation, update and command execution
//! - `AppRunner`: the main loop over terminal events
//! - `Renderer`: draws the root view
//! - `Coalescer`: render/resize coalescing decisions

pub mod app_runner;
pub mod coalescer;
pub mod elm_integration;
pub mod renderer;
