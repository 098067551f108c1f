//! # dogechat-remote
//!
//! Retrieval of the DogeChat remote configuration document.
//!
//! One GET per session, with a timestamp query parameter so intermediate
//! caches never serve a stale whitelist. The body is handed to
//! `dogechat-config` for parsing, and the official channels are merged into
//! whatever channel list the client already holds. There is no retry: a
//! failed fetch is logged and the caller keeps its previous state.

pub mod fetch;
pub mod settings;

mod error;

pub use error::{RemoteError, Result};
pub use fetch::{bootstrap, cache_busted_url, initial_channels, ConfigFetcher, RemoteData};
pub use settings::RemoteSettings;
