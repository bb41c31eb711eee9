use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    // System control
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    // Splash screen
    DismissSplash,

    // Panel focus
    FocusNextPanel,
    FocusPreviousPanel,

    // Status management
    UpdateStatusMessage(String),
    ClearStatusMessage,
    ShowError(String),
}
