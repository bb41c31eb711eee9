//! Background scene with the particle overlays on top

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::environment::Environment,
    presentation::{
        components::ViewContext,
        widgets::{
            particle_field::{ParticleField, ParticleKind},
            scene::SceneWidget,
        },
    },
};

#[derive(Debug, Clone, Default)]
pub struct OverlayComponent;

impl OverlayComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, ctx: &ViewContext, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(format!(" {} ", ctx.theme.title()))
            .title_bottom(
                Line::styled(format!(" {} ", ctx.theme.description()), ctx.palette.muted)
                    .right_aligned(),
            )
            .border_style(ctx.palette.border)
            .border_type(BorderType::Rounded);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        frame.render_widget(
            SceneWidget::new(ctx.theme.background_asset(), ctx.palette.muted),
            inner,
        );

        let overlay = &state.overlay;
        frame.render_widget(
            ParticleField::new(overlay.particles(), ParticleKind::Dust, ctx.palette.particle)
                .elapsed(ctx.elapsed),
            inner,
        );

        let kind = match overlay.environment() {
            Environment::Library => ParticleKind::Ember,
            Environment::Cafe => ParticleKind::Steam,
        };
        frame.render_widget(
            ParticleField::new(overlay.theme_group(), kind, ctx.palette.theme_particle)
                .elapsed(ctx.elapsed),
            inner,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::msg::overlay::OverlayMsg, infrastructure::config::Config};
    use rand::{rngs::StdRng, SeedableRng};
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn count_particles(state: &AppState) -> color_eyre::Result<usize> {
        let mut terminal = Terminal::new(TestBackend::new(60, 20))?;
        let ctx = ViewContext::new(state, state.environment, Duration::ZERO);
        terminal.draw(|f| OverlayComponent::new().view(state, &ctx, f, f.area()))?;
        let glyphs = ["·", "•", "✦", "*", "~"];
        Ok(terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|c| glyphs.contains(&c.symbol()))
            .count())
    }

    #[test]
    fn test_more_particles_draw_more() -> color_eyre::Result<()> {
        let mut state = AppState::new_with_rng(Config::default(), StdRng::seed_from_u64(11));
        state.overlay.update(OverlayMsg::SetCount(0));
        let sparse = count_particles(&state)?;

        state.overlay.update(OverlayMsg::SetCount(40));
        let dense = count_particles(&state)?;

        assert!(dense > sparse);
        Ok(())
    }

    #[test]
    fn test_frame_names_and_describes_room() -> color_eyre::Result<()> {
        let mut state = AppState::new_with_rng(Config::default(), StdRng::seed_from_u64(3));
        state.select_environment(Environment::Cafe);
        let mut terminal = Terminal::new(TestBackend::new(60, 12))?;
        let ctx = ViewContext::new(&state, state.environment, Duration::ZERO);
        terminal.draw(|f| OverlayComponent::new().view(&state, &ctx, f, f.area()))?;

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Café Glow"), "{text}");
        assert!(text.contains("Jazz music, coffee aromas"), "{text}");
        Ok(())
    }
}
