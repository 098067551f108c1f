//! # dogechat-config
//!
//! Remote configuration engine for the DogeChat client.
//!
//! The chat client downloads a JSON document that decides which users are
//! moderated, which hosts may be rendered as links, images or videos, and
//! which official channels every client starts with. This crate parses that
//! untrusted document, indexes it for lookups, and answers the questions the
//! message renderer and channel list ask of it. Everything here is
//! synchronous; fetching the document is left to `dogechat-remote`.

pub mod channels;
pub mod config;
pub mod constants;
pub mod document;
pub mod types;
pub mod whitelist;

mod error;

pub use channels::merge_channels;
pub use config::ChatConfig;
pub use document::{normalize, NormalizedConfigState, RawConfigDocument};
pub use error::{ConfigError, Result};
pub use types::{Channel, OfficialChannelRecord, UserRecord};
pub use whitelist::{check_url_against_whitelist, host_matches};
