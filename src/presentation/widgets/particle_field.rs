//! Animated particles over the background scene

use std::time::Duration;

use ratatui::{prelude::*, widgets::Widget};

use crate::domain::{
    glyphs,
    particle::Particle,
    transition::{Easing, Transition, VisualState},
};

/// Below this opacity a particle is not drawn at all
const MIN_VISIBLE_OPACITY: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Dust,
    Ember,
    Steam,
}

impl ParticleKind {
    fn glyph(self, size: f64) -> &'static str {
        match self {
            ParticleKind::Ember => glyphs::icon("particle.ember"),
            ParticleKind::Steam => glyphs::icon("particle.steam"),
            ParticleKind::Dust if size < 3.0 => glyphs::icon("particle.small"),
            ParticleKind::Dust if size < 5.0 => glyphs::icon("particle.medium"),
            ParticleKind::Dust => glyphs::icon("particle.large"),
        }
    }

    /// How far (percent of the height) a particle rises over one loop
    fn rise(self) -> f64 {
        match self {
            ParticleKind::Dust => -10.0,
            ParticleKind::Ember => -40.0,
            ParticleKind::Steam => -25.0,
        }
    }
}

/// The looping rise-and-fade every particle plays
pub fn particle_transition(particle: &Particle, kind: ParticleKind) -> Transition {
    Transition::new(
        VisualState::default(),
        VisualState {
            offset_y: kind.rise(),
            ..VisualState::hidden()
        },
        Duration::from_secs_f64(particle.duration_secs.max(0.0)),
    )
    .delay(Duration::from_secs_f64(particle.delay_secs.max(0.0)))
    .easing(Easing::EaseOut)
    .repeating()
}

pub struct ParticleField<'a> {
    particles: &'a [Particle],
    kind: ParticleKind,
    style: Style,
    elapsed: Duration,
}

impl<'a> ParticleField<'a> {
    pub fn new(particles: &'a [Particle], kind: ParticleKind, style: Style) -> Self {
        Self {
            particles,
            kind,
            style,
            elapsed: Duration::ZERO,
        }
    }

    pub fn elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Cell for a particle at `visual`, if it is inside the area and visible
    fn cell(&self, particle: &Particle, visual: &VisualState, area: Rect) -> Option<(u16, u16)> {
        if visual.opacity < MIN_VISIBLE_OPACITY || area.is_empty() {
            return None;
        }
        let y_percent = particle.y + visual.offset_y;
        if !(0.0..=100.0).contains(&y_percent) {
            return None;
        }
        let col = (particle.x / 100.0 * f64::from(area.width - 1)).round() as u16;
        let row = (y_percent / 100.0 * f64::from(area.height - 1)).round() as u16;
        Some((area.x + col, area.y + row))
    }
}

impl Widget for ParticleField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for particle in self.particles {
            let visual = particle_transition(particle, self.kind).sample(self.elapsed);
            let Some((x, y)) = self.cell(particle, &visual, area) else {
                continue;
            };
            let style = if visual.opacity < 0.5 {
                self.style.add_modifier(Modifier::DIM)
            } else {
                self.style
            };
            buf.set_string(x, y, self.kind.glyph(particle.size), style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::particle::{generate_embers, generate_particles};
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn drawn_cells(buf: &Buffer) -> usize {
        buf.content().iter().filter(|c| c.symbol() != " ").count()
    }

    #[test]
    fn test_particles_drawn_inside_area() {
        let mut rng = StdRng::seed_from_u64(3);
        let particles = generate_particles(&mut rng, 20);
        let area = Rect::new(2, 1, 40, 12);
        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 20));

        ParticleField::new(&particles, ParticleKind::Dust, Style::default()).render(area, &mut buf);

        let drawn = drawn_cells(&buf);
        assert!(drawn > 0 && drawn <= particles.len());
        for y in 0..20 {
            for x in 0..50 {
                if buf[(x, y)].symbol() != " " {
                    assert!(area.contains(Position::new(x, y)));
                }
            }
        }
    }

    #[test]
    fn test_no_particles_draws_nothing() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        ParticleField::new(&[], ParticleKind::Steam, Style::default()).render(area, &mut buf);
        assert_eq!(drawn_cells(&buf), 0);
    }

    #[test]
    fn test_transition_rises_and_fades() {
        let mut rng = StdRng::seed_from_u64(9);
        let ember = generate_embers(&mut rng)[0];
        let transition = particle_transition(&ember, ParticleKind::Ember);

        let start = transition.sample(Duration::ZERO);
        let later = transition.sample(Duration::from_secs_f64(
            ember.delay_secs + ember.duration_secs * 0.9,
        ));
        assert!(later.opacity < start.opacity);
        assert!(later.offset_y < start.offset_y);
    }

    #[test]
    fn test_zero_sized_area_is_safe() {
        let mut rng = StdRng::seed_from_u64(1);
        let particles = generate_particles(&mut rng, 5);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 10));
        ParticleField::new(&particles, ParticleKind::Dust, Style::default())
            .render(Rect::new(0, 0, 0, 0), &mut buf);
        assert_eq!(drawn_cells(&buf), 0);
    }
}
