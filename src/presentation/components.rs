//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use std::time::Duration;

use ratatui::prelude::*;

use crate::{
    core::state::{AppState, Panel},
    domain::environment::Environment,
    presentation::palette::Palette,
};

pub mod ambient;
pub mod environment;
pub mod overlay;
pub mod presence;
pub mod splash;
pub mod status_bar;
pub mod timer;

pub use ambient::AmbientComponent;
pub use environment::EnvironmentComponent;
pub use overlay::OverlayComponent;
pub use presence::PresenceComponent;
pub use splash::SplashComponent;
pub use status_bar::StatusBarComponent;
pub use timer::TimerComponent;

/// Per-frame inputs that do not live in `AppState`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewContext {
    /// The theme currently applied through the theming boundary
    pub theme: Environment,
    pub palette: Palette,
    /// Time since the app started, drives every animation
    pub elapsed: Duration,
}

impl ViewContext {
    pub fn new(state: &AppState, theme: Environment, elapsed: Duration) -> Self {
        Self {
            theme,
            palette: Palette::from_styles(&state.config.config.styles, theme),
            elapsed,
        }
    }

    /// Border style of `panel`, highlighted while it has focus
    pub fn border_style(&self, state: &AppState, panel: Panel) -> Style {
        if state.system.focused_panel == panel {
            self.palette.highlight
        } else {
            self.palette.border
        }
    }
}

/// Collection of all components
#[derive(Debug, Default)]
pub struct Components {
    pub environment: EnvironmentComponent,
    pub overlay: OverlayComponent,
    pub timer: TimerComponent,
    pub presence: PresenceComponent,
    pub ambient: AmbientComponent,
    pub status_bar: StatusBarComponent,
    pub splash: SplashComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the whole root view
    pub fn render(&self, frame: &mut Frame, state: &AppState, ctx: &ViewContext) {
        let area = frame.area();
        frame.render_widget(
            ratatui::widgets::Block::default().style(ctx.palette.background),
            area,
        );

        if state.system.show_splash {
            self.splash.view(state, ctx, frame, area);
            return;
        }

        // [header, main area, status bar]
        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

        self.environment.view(state, ctx, frame, rows[0]);

        // [scene with particles, panels]
        let columns = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);
        self.overlay.view(state, ctx, frame, columns[0]);

        let panels = Layout::vertical([
            Constraint::Length(8),
            Constraint::Min(6),
            Constraint::Length(9),
        ])
        .split(columns[1]);
        self.timer.view(state, ctx, frame, panels[0]);
        self.presence.view(state, ctx, frame, panels[1]);
        self.ambient.view(state, ctx, frame, panels[2]);

        self.status_bar.view(state, ctx, frame, rows[2]);
    }
}
