//! Reusable widgets

pub mod particle_field;
pub mod scene;
