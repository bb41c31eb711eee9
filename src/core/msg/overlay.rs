use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayMsg {
    SetCount(usize),
    IncreaseDensity,
    DecreaseDensity,
    /// Re-roll every particle, as happens when the overlay is mounted again
    Regenerate,
}
