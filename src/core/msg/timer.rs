use serde::{Deserialize, Serialize};

/// Messages specific to TimerState
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerMsg {
    Start,
    Pause,
    /// Start when idle, pause when running
    Toggle,
    Reset,
    /// One elapsed second, delivered by the focus interval of the given generation
    Tick(u64),
}

impl TimerMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, TimerMsg::Tick(_))
    }
}
