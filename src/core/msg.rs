use serde::{Deserialize, Serialize};

pub mod ambient;
pub mod environment;
pub mod overlay;
pub mod presence;
pub mod system;
pub mod timer;

use ambient::AmbientMsg;
use environment::EnvironmentMsg;
use overlay::OverlayMsg;
use presence::PresenceMsg;
use system::SystemMsg;
use timer::TimerMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Focus timer operations (delegated to TimerState)
    Timer(TimerMsg),

    // Theme selection (handled by the root)
    Environment(EnvironmentMsg),

    // Avatar picker and roster (delegated to PresenceState)
    Presence(PresenceMsg),

    // Ambient sound panel (delegated to AmbientState)
    Ambient(AmbientMsg),

    // Particle overlay (delegated to OverlayState)
    Overlay(OverlayMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Timer(msg) => msg.is_frequent(),
            _ => false,
        }
    }
}
