//! Core domain models for the collaborative editor.

use serde::{Deserialize, Serialize};

use super::value_object::{ConnectionId, Language, RoomId, Timestamp, UserName};

/// Buffer contents a freshly created room starts with
pub const PLACEHOLDER_DOCUMENT: &str = "// start code here";

/// Language a freshly created room starts with
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Represents a collaborative editing room: a participant set, one shared
/// code buffer and one language selection.
///
/// Membership is keyed by connection identity so that two participants
/// joining under the same display name stay distinguishable; display names
/// are projected only when building wire payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier
    pub id: RoomId,
    /// Participants currently in the room, in join order
    pub participants: Vec<Participant>,
    /// Current full text of the shared editor buffer
    pub document: String,
    /// Currently selected language
    pub language: Language,
    /// Output of the most recent successful execution, if any
    pub last_output: Option<String>,
    /// Timestamp when the room was created
    pub created_at: Timestamp,
}

impl Room {
    /// Create a new empty room with the placeholder document and default
    /// language.
    pub fn new(id: RoomId, created_at: Timestamp) -> Self {
        Self {
            id,
            participants: Vec::new(),
            document: PLACEHOLDER_DOCUMENT.to_string(),
            language: Language::default(),
            last_output: None,
            created_at,
        }
    }

    /// Add a participant to the room.
    ///
    /// Idempotent per connection: re-adding the same connection replaces its
    /// existing entry (the display name may have changed) instead of
    /// producing a duplicate.
    pub fn add_participant(&mut self, participant: Participant) {
        match self
            .participants
            .iter_mut()
            .find(|p| p.connection_id == participant.connection_id)
        {
            Some(existing) => *existing = participant,
            None => self.participants.push(participant),
        }
    }

    /// Remove a participant from the room by connection identity.
    pub fn remove_participant(&mut self, connection_id: &ConnectionId) {
        self.participants
            .retain(|p| &p.connection_id != connection_id);
    }

    /// Get a participant by connection identity.
    pub fn get_participant(&self, connection_id: &ConnectionId) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|p| &p.connection_id == connection_id)
    }

    /// Project the participant set to display names, deduplicated in join
    /// order. Two connections sharing a display name appear once, matching
    /// the wire protocol's set semantics.
    pub fn user_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for p in &self.participants {
            if !names.iter().any(|n| n == p.name.as_str()) {
                names.push(p.name.as_str().to_string());
            }
        }
        names
    }

    /// Whether the room has no participants left.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

/// Represents a participant in a room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Connection the participant is reached through
    pub connection_id: ConnectionId,
    /// Display name the participant joined under
    pub name: UserName,
    /// Timestamp when the participant joined
    pub joined_at: Timestamp,
}

impl Participant {
    /// Create a new participant
    pub fn new(connection_id: ConnectionId, name: UserName, joined_at: Timestamp) -> Self {
        Self {
            connection_id,
            name,
            joined_at,
        }
    }
}
