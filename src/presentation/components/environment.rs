//! Header with the environment selector

use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::{
    core::state::AppState,
    domain::{environment::Environment, glyphs},
    presentation::components::ViewContext,
};

#[derive(Debug, Clone, Default)]
pub struct EnvironmentComponent;

impl EnvironmentComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, ctx: &ViewContext, frame: &mut Frame, area: Rect) {
        let [tabs_area, status_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(24)]).areas(area);

        let titles = Environment::iter().map(|environment| {
            let icon = glyphs::icon(&format!("env.{environment}"));
            format!("{icon} {}", environment.title())
        });
        let selected = Environment::iter().position(|environment| environment == ctx.theme);
        let tabs = Tabs::new(titles)
            .select(selected.unwrap_or(0))
            .style(ctx.palette.muted)
            .highlight_style(ctx.palette.accent)
            .divider("|");
        frame.render_widget(tabs, tabs_area);

        let status = Line::styled(
            format!(
                "{} {} ",
                state.user_status.glyph(),
                state.user_status.label()
            ),
            ctx.palette.text,
        )
        .right_aligned();
        frame.render_widget(Paragraph::new(status), status_area);
    }
}
