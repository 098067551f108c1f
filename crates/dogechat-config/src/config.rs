//! [`ChatConfig`]: the read-only view of one fetched configuration document.

use std::path::Path;

use tracing::debug;

use crate::document::{normalize, NormalizedConfigState, RawConfigDocument};
use crate::error::Result;
use crate::types::{Channel, OfficialChannelRecord, UserRecord};
use crate::whitelist::check_url_against_whitelist;

/// Normalized remote configuration.
///
/// Built once per fetch and never mutated afterwards. A newer document
/// produces a new `ChatConfig`; share it behind an `Arc` and swap the whole
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    state: NormalizedConfigState,
}

impl ChatConfig {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Wrap state produced by [`normalize`].
    pub fn from_state(state: NormalizedConfigState) -> Self {
        Self { state }
    }

    pub fn from_document(doc: RawConfigDocument) -> Self {
        Self::from_state(normalize(doc))
    }

    /// Parse and normalize a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        RawConfigDocument::from_json(json).map(Self::from_document)
    }

    /// Load a document from a local file.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let config = RawConfigDocument::from_slice(&bytes).map(Self::from_document)?;
        debug!(path = %path.display(), version = %config.version(), "Loaded config from file");
        Ok(config)
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    /// The stored record for `id`, or a record carrying only the id.
    pub fn get_user_by_id(&self, id: &str) -> UserRecord {
        self.state
            .users
            .get(id)
            .cloned()
            .unwrap_or_else(|| UserRecord::unknown(id))
    }

    /// `false` unless the document sets `blocked: true` for `id`.
    pub fn user_is_blocked(&self, id: &str) -> bool {
        self.state
            .users
            .get(id)
            .and_then(|user| user.blocked)
            .unwrap_or(false)
    }

    /// Every user the document defines, in no particular order.
    pub fn users(&self) -> impl Iterator<Item = &UserRecord> {
        self.state.users.values()
    }

    // ------------------------------------------------------------------
    // Channels
    // ------------------------------------------------------------------

    /// Official channels converted to the client's [`Channel`] shape, in
    /// document order.
    pub fn get_channels(&self) -> Vec<Channel> {
        self.state.default_channels.iter().map(Channel::from).collect()
    }

    /// Official channels in their wire shape, `icon` included.
    pub fn default_channels(&self) -> &[OfficialChannelRecord] {
        &self.state.default_channels
    }

    // ------------------------------------------------------------------
    // URL validation
    //
    // Fail closed: an empty or unparsable URL is never valid.
    // ------------------------------------------------------------------

    /// Whether `url` may be rendered as a clickable link.
    pub fn is_valid_link(&self, url: &str) -> bool {
        !url.is_empty() && check_url_against_whitelist(url, &self.state.allowed_link_hostnames)
    }

    /// Whether `url` may be rendered inline as an image.
    pub fn is_valid_image(&self, url: &str) -> bool {
        !url.is_empty() && check_url_against_whitelist(url, &self.state.allowed_image_hostnames)
    }

    /// Whether `url` may be embedded as a video.
    pub fn is_valid_video(&self, url: &str) -> bool {
        !url.is_empty() && check_url_against_whitelist(url, &self.state.allowed_video_hostnames)
    }

    // ------------------------------------------------------------------
    // Plain fields
    // ------------------------------------------------------------------

    /// Document version string, as published.
    pub fn version(&self) -> &str {
        &self.state.version
    }

    /// Message of the day.
    pub fn motd(&self) -> &str {
        &self.state.motd
    }

    /// Words the operators want filtered. Not applied by this crate.
    pub fn blocked_words(&self) -> &[String] {
        &self.state.blocked_words
    }

    /// Raw link patterns, exact or `*.`-prefixed, as published.
    pub fn allowed_link_hostnames(&self) -> &[String] {
        &self.state.allowed_link_hostnames
    }

    /// Raw image patterns.
    pub fn allowed_image_hostnames(&self) -> &[String] {
        &self.state.allowed_image_hostnames
    }

    /// Raw video patterns.
    pub fn allowed_video_hostnames(&self) -> &[String] {
        &self.state.allowed_video_hostnames
    }
}
