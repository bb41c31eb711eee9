//! Splash screen shown while the app starts up

use std::time::Duration;

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::{
        glyphs,
        transition::{Easing, Transition, VisualState},
    },
    presentation::components::ViewContext,
};

const TITLE: &str = "Study Nook";
const SUBTITLE: &str = "a quiet place to focus";

#[derive(Debug, Clone, Default)]
pub struct SplashComponent;

impl SplashComponent {
    pub fn new() -> Self {
        Self
    }

    /// Fade and slide in
    pub fn transition() -> Transition {
        Transition::new(
            VisualState {
                opacity: 0.0,
                offset_y: 10.0,
                scale: 1.0,
            },
            VisualState::default(),
            Duration::from_millis(800),
        )
        .easing(Easing::EaseOut)
    }

    pub fn view(&self, state: &AppState, ctx: &ViewContext, frame: &mut Frame, area: Rect) {
        let visual = Self::transition().sample(ctx.elapsed);
        let styles = &state.config.config.styles;
        let mut title_style = styles.slot("splash", "title");
        let mut subtitle_style = styles.slot("splash", "subtitle");
        if visual.opacity < 0.5 {
            title_style = title_style.add_modifier(Modifier::DIM);
            subtitle_style = subtitle_style.add_modifier(Modifier::DIM);
        }

        let offset = (visual.offset_y / 100.0 * f64::from(area.height)).round() as u16;
        let [_, content, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(4),
            Constraint::Fill(1),
        ])
        .areas(area);
        let content = Rect {
            y: (content.y + offset).min(area.bottom().saturating_sub(content.height)),
            ..content
        };

        let lines = vec![
            Line::styled(
                format!("{} {TITLE} {}", glyphs::icon("env.library"), glyphs::icon("env.cafe")),
                title_style,
            ),
            Line::default(),
            Line::styled(SUBTITLE, subtitle_style),
            Line::styled(ctx.theme.title(), ctx.palette.muted),
        ];
        frame.render_widget(Paragraph::new(lines).centered(), content);
    }
}
