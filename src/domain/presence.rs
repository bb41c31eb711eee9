use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::domain::glyphs;

/// What a user is currently doing, as shown in the presence panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum UserStatus {
    Focused,
    Break,
    #[default]
    Idle,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Focused => "focusing",
            UserStatus::Break => "on a break",
            UserStatus::Idle => "idle",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            UserStatus::Focused => glyphs::icon("status.focused"),
            UserStatus::Break => glyphs::icon("status.break"),
            UserStatus::Idle => glyphs::icon("status.idle"),
        }
    }
}

/// Avatars the local user can pick from
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Avatar {
    #[default]
    Owl,
    Cat,
    Fox,
    Panda,
    Frog,
    Bunny,
}

impl Avatar {
    pub fn glyph(self) -> &'static str {
        match self {
            Avatar::Owl => "🦉",
            Avatar::Cat => "🐱",
            Avatar::Fox => "🦊",
            Avatar::Panda => "🐼",
            Avatar::Frog => "🐸",
            Avatar::Bunny => "🐰",
        }
    }

    pub fn all() -> Vec<Avatar> {
        Avatar::iter().collect()
    }

    fn position(self) -> usize {
        Avatar::iter().position(|a| a == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        let all = Avatar::all();
        all[(self.position() + 1) % all.len()]
    }

    pub fn previous(self) -> Self {
        let all = Avatar::all();
        all[(self.position() + all.len() - 1) % all.len()]
    }
}

/// A demo entry in the study-room roster. Only the local user's entry ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockPresenceEntry {
    pub id: u32,
    pub display_name: String,
    pub status: UserStatus,
    pub avatar: Avatar,
}

impl MockPresenceEntry {
    pub fn new(id: u32, display_name: &str, status: UserStatus, avatar: Avatar) -> Self {
        Self {
            id,
            display_name: display_name.to_string(),
            status,
            avatar,
        }
    }
}

/// Identifier reserved for the local user's roster entry
pub const SELF_ID: u32 = 0;

/// The static people sharing the room
pub fn mock_roster() -> Vec<MockPresenceEntry> {
    vec![
        MockPresenceEntry::new(1, "Mika", UserStatus::Focused, Avatar::Cat),
        MockPresenceEntry::new(2, "Jun", UserStatus::Break, Avatar::Fox),
        MockPresenceEntry::new(3, "Sol", UserStatus::Focused, Avatar::Panda),
        MockPresenceEntry::new(4, "Rowan", UserStatus::Idle, Avatar::Frog),
        MockPresenceEntry::new(5, "Ada", UserStatus::Focused, Avatar::Bunny),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_avatar_cycles_wrap_around() {
        assert_eq!(Avatar::Owl.next(), Avatar::Cat);
        assert_eq!(Avatar::Bunny.next(), Avatar::Owl);
        assert_eq!(Avatar::Owl.previous(), Avatar::Bunny);

        let mut avatar = Avatar::Fox;
        for _ in 0..Avatar::all().len() {
            avatar = avatar.next();
        }
        assert_eq!(avatar, Avatar::Fox);
    }

    #[test]
    fn test_mock_roster_has_no_self_entry() {
        let roster = mock_roster();
        assert!(!roster.is_empty());
        assert!(roster.iter().all(|e| e.id != SELF_ID));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(UserStatus::default(), UserStatus::Idle);
        assert_eq!(UserStatus::Focused.label(), "focusing");
        assert_ne!(UserStatus::Break.glyph(), UserStatus::Idle.glyph());
    }
}
