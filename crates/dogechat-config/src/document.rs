//! The configuration document as transmitted, and its indexed form.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::types::{OfficialChannelRecord, UserRecord};

/// The document exactly as the server sends it.
///
/// Every top-level field is required and has no default. A document missing
/// one is rejected at parse time. Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawConfigDocument {
    pub version: String,
    pub motd: String,
    pub blocked_words: Vec<String>,
    pub user_defs: Vec<UserRecord>,
    pub allowed_link_hostnames: Vec<String>,
    pub allowed_image_hostnames: Vec<String>,
    pub allowed_video_hostnames: Vec<String>,
    pub default_channels: Vec<OfficialChannelRecord>,
}

impl RawConfigDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// [`RawConfigDocument`] with `user_defs` rekeyed by user id.
///
/// Only [`normalize`] builds one, so every key equals its record's `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedConfigState {
    pub(crate) version: String,
    pub(crate) motd: String,
    pub(crate) blocked_words: Vec<String>,
    pub(crate) users: HashMap<String, UserRecord>,
    pub(crate) allowed_link_hostnames: Vec<String>,
    pub(crate) allowed_image_hostnames: Vec<String>,
    pub(crate) allowed_video_hostnames: Vec<String>,
    pub(crate) default_channels: Vec<OfficialChannelRecord>,
}

/// Index a raw document for lookups.
///
/// Users are inserted in document order. When an id repeats, the later
/// record replaces the earlier one wholesale; fields are not merged.
pub fn normalize(doc: RawConfigDocument) -> NormalizedConfigState {
    let mut users = HashMap::with_capacity(doc.user_defs.len());
    for user in doc.user_defs {
        if let Some(previous) = users.insert(user.id.clone(), user) {
            debug!(user_id = %previous.id, "Duplicate user id, keeping last entry");
        }
    }

    debug!(
        version = %doc.version,
        users = users.len(),
        channels = doc.default_channels.len(),
        "Normalized config document"
    );

    NormalizedConfigState {
        version: doc.version,
        motd: doc.motd,
        blocked_words: doc.blocked_words,
        users,
        allowed_link_hostnames: doc.allowed_link_hostnames,
        allowed_image_hostnames: doc.allowed_image_hostnames,
        allowed_video_hostnames: doc.allowed_video_hostnames,
        default_channels: doc.default_channels,
    }
}
