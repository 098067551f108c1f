//! Wire and in-app records carried by the configuration document.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// Moderation and badge data the operators attach to a user.
///
/// `id` is the user's public key. Every other field is optional, and `None`
/// means "not set by the document", which is not the same as `Some(false)`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_groups: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_name_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spammer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,
}

impl UserRecord {
    /// A record for a user the document says nothing about.
    pub fn unknown(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

/// An official channel as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OfficialChannelRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Public key of the channel creator.
    pub creator: String,
    /// Creation time in unix seconds.
    pub created: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// A channel in the shape the rest of the client consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub about: String,
    pub creator: String,
    pub created: i64,
    pub picture: String,
}

impl From<&OfficialChannelRecord> for Channel {
    /// `description` becomes `about`, a missing picture becomes `""`, and
    /// `icon` has no counterpart so it is dropped.
    fn from(ch: &OfficialChannelRecord) -> Self {
        Self {
            id: ch.id.clone(),
            name: ch.name.clone(),
            about: ch.description.clone(),
            creator: ch.creator.clone(),
            created: ch.created,
            picture: ch.picture.clone().unwrap_or_default(),
        }
    }
}
