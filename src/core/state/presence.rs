use crate::{
    core::msg::presence::PresenceMsg,
    domain::presence::{mock_roster, Avatar, MockPresenceEntry, UserStatus, SELF_ID},
};

/// Roster shown in the presence panel
///
/// Everyone except the local user is static demo data. The local entry is
/// derived on demand from the root's status and avatar.
#[derive(Debug, Clone, PartialEq)]
pub struct PresenceState {
    display_name: String,
    others: Vec<MockPresenceEntry>,
}

impl Default for PresenceState {
    fn default() -> Self {
        Self::new("You")
    }
}

impl PresenceState {
    pub fn new(display_name: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            others: mock_roster(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The local user's entry, mirroring the given status and avatar
    pub fn self_entry(&self, status: UserStatus, avatar: Avatar) -> MockPresenceEntry {
        MockPresenceEntry::new(SELF_ID, &self.display_name, status, avatar)
    }

    /// Full roster with the local user first
    pub fn entries(&self, status: UserStatus, avatar: Avatar) -> Vec<MockPresenceEntry> {
        std::iter::once(self.self_entry(status, avatar))
            .chain(self.others.iter().cloned())
            .collect()
    }

    /// Number of people in the room currently focusing, the local user included
    pub fn focused_count(&self, status: UserStatus) -> usize {
        let others = self
            .others
            .iter()
            .filter(|e| e.status == UserStatus::Focused)
            .count();
        others + usize::from(status == UserStatus::Focused)
    }

    /// Applies an avatar picker message to the root's current avatar
    pub fn pick_avatar(current: Avatar, msg: PresenceMsg) -> Avatar {
        match msg {
            PresenceMsg::SelectAvatar(avatar) => avatar,
            PresenceMsg::NextAvatar => current.next(),
            PresenceMsg::PreviousAvatar => current.previous(),
        }
    }
}
