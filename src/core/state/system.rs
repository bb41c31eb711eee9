use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// Panels that can take keyboard focus
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Panel {
    #[default]
    Timer,
    Presence,
    Ambient,
}

impl Panel {
    fn position(self) -> usize {
        Panel::iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        let all: Vec<Panel> = Panel::iter().collect();
        all[(self.position() + 1) % all.len()]
    }

    pub fn previous(self) -> Self {
        let all: Vec<Panel> = Panel::iter().collect();
        all[(self.position() + all.len() - 1) % all.len()]
    }
}

/// System-related state
#[derive(Debug, Clone)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub show_splash: bool,
    pub focused_panel: Panel,
    pub status_message: Option<String>,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            should_quit: false,
            should_suspend: false,
            show_splash: true,
            focused_panel: Panel::default(),
            status_message: None,
        }
    }
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            // System control
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::DismissSplash => {
                self.show_splash = false;
                vec![Cmd::RequestRender]
            }

            SystemMsg::FocusNextPanel => {
                self.focused_panel = self.focused_panel.next();
                vec![]
            }

            SystemMsg::FocusPreviousPanel => {
                self.focused_panel = self.focused_panel.previous();
                vec![]
            }

            // Status management
            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message.replace('\n', " "));
                vec![]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![Cmd::LogError { message: error }]
            }
        }
    }
}
