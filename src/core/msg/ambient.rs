use serde::{Deserialize, Serialize};

use crate::domain::ambient::AmbientSound;

/// Ambient panel messages. All of them only change what is displayed.
///
/// `NextSound` and `PreviousSound` move the list cursor; selecting is what
/// starts or stops a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmbientMsg {
    SelectSound(AmbientSound),
    SelectHighlighted,
    NextSound,
    PreviousSound,
    SetVolume(u8),
    VolumeUp,
    VolumeDown,
    TogglePlay,
    ToggleMute,
}
