use serde::{Deserialize, Serialize};

use crate::domain::presence::Avatar;

/// Avatar picker messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresenceMsg {
    SelectAvatar(Avatar),
    NextAvatar,
    PreviousAvatar,
}
