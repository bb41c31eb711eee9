//! Focus timer panel

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, Panel},
    domain::glyphs,
    presentation::components::ViewContext,
};

#[derive(Debug, Clone, Default)]
pub struct TimerComponent;

impl TimerComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, ctx: &ViewContext, frame: &mut Frame, area: Rect) {
        let timer = &state.timer;
        let block = Block::bordered()
            .title(" Focus Timer ")
            .border_style(ctx.border_style(state, Panel::Timer));
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1), // phase
            Constraint::Length(1), // clock
            Constraint::Length(1), // progress
            Constraint::Length(1), // sessions
            Constraint::Min(0),
        ])
        .split(inner);

        let state_icon = if timer.is_running() {
            glyphs::icon("timer.play")
        } else {
            glyphs::icon("timer.pause")
        };
        let phase = Line::from(vec![
            Span::styled(format!("{state_icon} "), ctx.palette.accent),
            Span::styled(timer.phase().label(), ctx.palette.text),
        ])
        .centered();
        frame.render_widget(Paragraph::new(phase), rows[0]);

        let clock = Line::styled(timer.formatted(), ctx.palette.highlight).centered();
        frame.render_widget(Paragraph::new(clock), rows[1]);

        let gauge = LineGauge::default()
            .filled_style(ctx.palette.accent)
            .unfilled_style(ctx.palette.muted)
            .ratio((timer.progress_percent() / 100.0).clamp(0.0, 1.0));
        frame.render_widget(gauge, rows[2]);

        let sessions = Line::styled(
            format!(
                "{} focus sessions today · {} reset",
                timer.completed_focus_sessions(),
                glyphs::icon("timer.reset")
            ),
            ctx.palette.muted,
        )
        .centered();
        frame.render_widget(Paragraph::new(sessions), rows[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::state::TimerState, domain::session::SessionPhase,
        infrastructure::config::Config,
    };
    use rand::{rngs::StdRng, SeedableRng};
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn render(state: &AppState) -> color_eyre::Result<String> {
        let mut terminal = Terminal::new(TestBackend::new(40, 8))?;
        let ctx = ViewContext::new(state, state.environment, Duration::ZERO);
        terminal.draw(|f| TimerComponent::new().view(state, &ctx, f, f.area()))?;
        Ok(terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect())
    }

    #[test]
    fn test_shows_remaining_time_and_phase() -> color_eyre::Result<()> {
        let mut state = AppState::new_with_rng(Config::default(), StdRng::seed_from_u64(0));
        state.timer = TimerState::new(SessionPhase::Break, 61, true);

        let text = render(&state)?;
        assert!(text.contains("01:01"));
        assert!(text.contains("Break"));
        Ok(())
    }
}
