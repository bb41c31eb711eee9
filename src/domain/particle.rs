//! Procedural placement of decorative particles.
//!
//! Particles are generated once per batch and carry no identity beyond it.
//! The random source is always passed in, so callers decide between an
//! entropy-seeded generator and a fixed seed.

use std::ops::{Range, RangeInclusive};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::environment::Environment;

/// Number of ember particles drawn in the library
pub const EMBER_COUNT: usize = 8;
/// Number of steam wisps drawn in the cafe
pub const STEAM_COUNT: usize = 5;

/// A single decorative particle, positioned in percentage space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Horizontal position, 0..=100 percent of the container width
    pub x: f64,
    /// Vertical position, 0..=100 percent of the container height
    pub y: f64,
    pub size: f64,
    pub delay_secs: f64,
    pub duration_secs: f64,
}

/// Sampling ranges for one group of particles
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleRanges {
    pub x: RangeInclusive<f64>,
    pub y: RangeInclusive<f64>,
    pub size: RangeInclusive<f64>,
    pub delay_secs: Range<f64>,
    pub duration_secs: Range<f64>,
}

impl ParticleRanges {
    /// Floating dust motes spread over the whole scene
    pub fn dust() -> Self {
        Self {
            x: 0.0..=100.0,
            y: 0.0..=100.0,
            size: 2.0..=6.0,
            delay_secs: 0.0..5.0,
            duration_secs: 8.0..12.0,
        }
    }

    /// Fireplace embers rising from the bottom of the library
    pub fn embers() -> Self {
        Self {
            x: 20.0..=80.0,
            y: 60.0..=90.0,
            size: 1.0..=3.0,
            delay_secs: 0.0..3.0,
            duration_secs: 6.0..9.0,
        }
    }

    /// Steam curling up from a coffee cup in the cafe. Wisps share one size.
    pub fn steam() -> Self {
        Self {
            x: 30.0..=70.0,
            y: 70.0..=90.0,
            size: 6.0..=6.0,
            delay_secs: 0.0..4.0,
            duration_secs: 5.0..7.0,
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Particle {
        Particle {
            x: rng.gen_range(self.x.clone()),
            y: rng.gen_range(self.y.clone()),
            size: rng.gen_range(self.size.clone()),
            delay_secs: rng.gen_range(self.delay_secs.clone()),
            duration_secs: rng.gen_range(self.duration_secs.clone()),
        }
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Particle> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}

/// Generates `count` dust particles with independently sampled parameters
pub fn generate_particles<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    ParticleRanges::dust().generate(rng, count)
}

pub fn generate_embers<R: Rng + ?Sized>(rng: &mut R) -> Vec<Particle> {
    ParticleRanges::embers().generate(rng, EMBER_COUNT)
}

pub fn generate_steam<R: Rng + ?Sized>(rng: &mut R) -> Vec<Particle> {
    ParticleRanges::steam().generate(rng, STEAM_COUNT)
}

/// The secondary particle group belonging to an environment
pub fn generate_theme_group<R: Rng + ?Sized>(rng: &mut R, env: Environment) -> Vec<Particle> {
    match env {
        Environment::Library => generate_embers(rng),
        Environment::Cafe => generate_steam(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn within(p: &Particle, ranges: &ParticleRanges) -> bool {
        ranges.x.contains(&p.x)
            && ranges.y.contains(&p.y)
            && ranges.size.contains(&p.size)
            && ranges.delay_secs.contains(&p.delay_secs)
            && ranges.duration_secs.contains(&p.duration_secs)
    }

    #[test]
    fn test_generate_twenty_particles_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = generate_particles(&mut rng, 20);

        assert_eq!(particles.len(), 20);
        for p in &particles {
            assert!((0.0..=100.0).contains(&p.x), "x out of range: {}", p.x);
            assert!((0.0..=100.0).contains(&p.y), "y out of range: {}", p.y);
            assert!(within(p, &ParticleRanges::dust()));
        }
    }

    #[test]
    fn test_generate_zero_particles() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_particles(&mut rng, 0).is_empty());
    }

    #[test]
    fn test_theme_groups_have_fixed_counts() {
        let mut rng = StdRng::seed_from_u64(3);
        let embers = generate_theme_group(&mut rng, Environment::Library);
        let steam = generate_theme_group(&mut rng, Environment::Cafe);

        assert_eq!(embers.len(), EMBER_COUNT);
        assert_eq!(steam.len(), STEAM_COUNT);
        assert!(embers.iter().all(|p| within(p, &ParticleRanges::embers())));
        assert!(steam.iter().all(|p| within(p, &ParticleRanges::steam())));
    }

    #[test]
    fn test_same_seed_same_batch() {
        let a = generate_particles(&mut StdRng::seed_from_u64(42), 10);
        let b = generate_particles(&mut StdRng::seed_from_u64(42), 10);
        assert_eq!(a, b);
    }
}
