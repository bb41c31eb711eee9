use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::core::cmd::TimerId;

/// Raw external events before translation into domain messages
/// These come from the terminal, the scheduler and the host runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    // User input
    Key(KeyEvent),

    // Scheduler firings
    TimerFired { id: TimerId, generation: u64 },

    // Host notifications
    SystemMessage(String),
    Error(String),

    // Frequent terminal events
    Tick,
    Render,
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(
            self,
            RawMsg::Tick
                | RawMsg::Render
                | RawMsg::TimerFired {
                    id: TimerId::FocusTick,
                    ..
                }
        )
    }
}
