//! Status bar component
//!
//! Displays the latest status message, a clock and session counters.

use chrono::Local;
use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::{core::state::AppState, presentation::components::ViewContext};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, ctx: &ViewContext, frame: &mut Frame, area: Rect) {
        let right = format!(
            "{} particles · {} ",
            state.overlay.count(),
            Local::now().format("%H:%M")
        );
        let [left_area, right_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(right.width() as u16),
        ])
        .areas(area);

        frame.render_widget(Clear, area);
        let message = self.message(state);
        frame.render_widget(
            Paragraph::new(Line::styled(format!(" {message}"), ctx.palette.text)),
            left_area,
        );
        frame.render_widget(
            Paragraph::new(Line::styled(right, ctx.palette.muted)).right_aligned(),
            right_area,
        );
    }

    /// The status message, or a key hint when there is none
    pub fn message(&self, state: &AppState) -> String {
        state
            .system
            .status_message
            .clone()
            .unwrap_or_else(|| String::from("space start/pause · t switch room · tab panels · q quit"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::msg::system::SystemMsg, infrastructure::config::Config};
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_message_falls_back_to_hint() {
        let mut state = AppState::new_with_rng(Config::default(), StdRng::seed_from_u64(0));
        let bar = StatusBarComponent::new();
        assert!(bar.message(&state).contains("q quit"));

        state
            .system
            .update(SystemMsg::UpdateStatusMessage("Break is over".to_string()));
        assert_eq!(bar.message(&state), "Break is over");
    }
}
