//! Domain logic
//!
//! This module contains the study-room vocabulary, independent of the UI:
//! - Session phases and their fixed durations
//! - Environments (themes)
//! - Particle generation
//! - Presence and ambient catalogs
//! - Transition descriptions and the icon table

pub mod ambient;
pub mod environment;
pub mod glyphs;
pub mod particle;
pub mod presence;
pub mod session;
pub mod transition;
