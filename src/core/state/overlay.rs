use rand::{rngs::StdRng, SeedableRng};

use crate::{
    core::{cmd::Cmd, msg::overlay::OverlayMsg},
    domain::{
        environment::Environment,
        particle::{generate_particles, generate_theme_group, Particle},
    },
};

pub const DEFAULT_PARTICLE_COUNT: usize = 20;
pub const MAX_PARTICLE_COUNT: usize = 60;
pub const DENSITY_STEP: usize = 5;

/// Decorative particles drawn over the background
///
/// The random source is owned here and injected at construction, so tests
/// can hand in a seeded generator.
#[derive(Debug, Clone)]
pub struct OverlayState {
    rng: StdRng,
    count: usize,
    environment: Environment,
    particles: Vec<Particle>,
    theme_group: Vec<Particle>,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::new(
            StdRng::from_entropy(),
            DEFAULT_PARTICLE_COUNT,
            Environment::default(),
        )
    }
}

impl OverlayState {
    /// Mounts the overlay, generating the first batch
    pub fn new(rng: StdRng, count: usize, environment: Environment) -> Self {
        let mut overlay = Self {
            rng,
            count: count.min(MAX_PARTICLE_COUNT),
            environment,
            particles: vec![],
            theme_group: vec![],
        };
        overlay.regenerate();
        overlay
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Embers in the library, steam in the cafe
    pub fn theme_group(&self) -> &[Particle] {
        &self.theme_group
    }

    fn regenerate(&mut self) {
        self.particles = generate_particles(&mut self.rng, self.count);
        self.theme_group = generate_theme_group(&mut self.rng, self.environment);
    }

    fn set_count(&mut self, count: usize) {
        let count = count.min(MAX_PARTICLE_COUNT);
        if count != self.count {
            self.count = count;
            self.particles = generate_particles(&mut self.rng, count);
        }
    }

    /// The theme-specific group belongs to the environment, so a switch re-mounts it
    pub fn set_environment(&mut self, environment: Environment) {
        if environment != self.environment {
            self.environment = environment;
            self.theme_group = generate_theme_group(&mut self.rng, environment);
        }
    }

    pub fn update(&mut self, msg: OverlayMsg) -> Vec<Cmd> {
        match msg {
            OverlayMsg::SetCount(count) => self.set_count(count),
            OverlayMsg::IncreaseDensity => self.set_count(self.count + DENSITY_STEP),
            OverlayMsg::DecreaseDensity => self.set_count(self.count.saturating_sub(DENSITY_STEP)),
            OverlayMsg::Regenerate => self.regenerate(),
        }
        vec![]
    }
}
