use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Length of a focus session in seconds (25 minutes)
pub const FOCUS_DURATION_SECS: u32 = 1500;
/// Length of a break in seconds (5 minutes)
pub const BREAK_DURATION_SECS: u32 = 300;

/// The timer's current mode. Each phase has a fixed duration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum SessionPhase {
    #[default]
    Focus,
    Break,
}

impl SessionPhase {
    pub fn duration_secs(self) -> u32 {
        match self {
            SessionPhase::Focus => FOCUS_DURATION_SECS,
            SessionPhase::Break => BREAK_DURATION_SECS,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            SessionPhase::Focus => SessionPhase::Break,
            SessionPhase::Break => SessionPhase::Focus,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SessionPhase::Focus => "Focus Time",
            SessionPhase::Break => "Break Time",
        }
    }
}

/// Formats a number of seconds as `MM:SS`
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
