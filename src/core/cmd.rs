use serde::{Deserialize, Serialize};
use strum::Display;

use crate::domain::environment::Environment;

/// Identifies a scheduled timer owned by the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum TimerId {
    /// The 1-second interval driving the focus timer
    FocusTick,
    /// The one-shot delay that dismisses the splash screen
    Splash,
}

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (timers, theming, terminal, logging)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Timer-related commands
    /// Firings carry `generation` back so stale ones can be told apart
    StartInterval {
        id: TimerId,
        period_ms: u64,
        generation: u64,
    },
    StartTimeout { id: TimerId, delay_ms: u64 },
    CancelTimer { id: TimerId },

    // Theming boundary
    ApplyTheme(Environment),

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render
    RequestRender,

    // Logging related
    LogError { message: String },
    LogInfo { message: String },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cmd_batch_empty() {
        let cmd = Cmd::batch(vec![]);
        assert_eq!(cmd, Cmd::None);
    }

    #[test]
    fn test_cmd_batch_single() {
        let original_cmd = Cmd::RequestRender;
        let cmd = Cmd::batch(vec![original_cmd.clone()]);
        assert_eq!(cmd, original_cmd);
    }

    #[test]
    fn test_cmd_batch_multiple() {
        let cmds = vec![Cmd::RequestRender, Cmd::ApplyTheme(Environment::Cafe)];
        let batch_cmd = Cmd::batch(cmds.clone());
        assert_eq!(batch_cmd, Cmd::Batch(cmds));
    }

    #[test]
    fn test_cmd_serialization() -> color_eyre::Result<()> {
        let cmd = Cmd::StartInterval {
            id: TimerId::FocusTick,
            period_ms: 1000,
            generation: 3,
        };

        let serialized = serde_json::to_string(&cmd)?;
        let deserialized: Cmd = serde_json::from_str(&serialized)?;
        assert_eq!(cmd, deserialized);
        Ok(())
    }
}
