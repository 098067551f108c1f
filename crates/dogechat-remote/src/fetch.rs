use std::sync::Arc;

use chrono::Utc;
use dogechat_config::constants::{global_chat, CACHE_BUST_PARAM};
use dogechat_config::{merge_channels, Channel, ChatConfig};
use tracing::{debug, error, info};
use url::Url;

use crate::error::{RemoteError, Result};
use crate::settings::RemoteSettings;

/// Channel list a client holds before the first successful fetch.
pub fn initial_channels() -> Vec<Channel> {
    vec![global_chat()]
}

/// `base` with `t=<now_millis>` appended to its query.
pub fn cache_busted_url(base: &Url, now_millis: i64) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair(CACHE_BUST_PARAM, &now_millis.to_string());
    url
}

/// Downloads the configuration document.
#[derive(Debug, Clone)]
pub struct ConfigFetcher {
    client: reqwest::Client,
    endpoint: Url,
}

impl ConfigFetcher {
    pub fn new(settings: &RemoteSettings) -> Result<Self> {
        let endpoint = Url::parse(&settings.config_url)
            .map_err(|e| RemoteError::InvalidEndpoint(format!("{}: {e}", settings.config_url)))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(RemoteError::InvalidEndpoint(format!(
                "unsupported scheme {}",
                endpoint.scheme()
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// One GET, no retry.
    pub async fn fetch(&self) -> Result<ChatConfig> {
        let url = cache_busted_url(&self.endpoint, Utc::now().timestamp_millis());
        debug!(url = %url, "Fetching remote config");

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let config = ChatConfig::from_json(&body)?;
        Ok(config)
    }
}

/// A freshly loaded config and the channel list merged against it.
#[derive(Debug, Clone)]
pub struct RemoteData {
    pub config: Arc<ChatConfig>,
    pub channels: Vec<Channel>,
}

impl RemoteData {
    pub fn from_config(config: ChatConfig, existing_channels: &[Channel]) -> Self {
        let channels = merge_channels(existing_channels, &config.get_channels());
        Self {
            config: Arc::new(config),
            channels,
        }
    }
}

/// Fetch the config and merge its official channels into `existing_channels`.
///
/// On failure the error is logged and returned; the caller should keep the
/// config and channels it already has.
pub async fn bootstrap(
    fetcher: &ConfigFetcher,
    existing_channels: &[Channel],
) -> Result<RemoteData> {
    match fetcher.fetch().await {
        Ok(config) => {
            let data = RemoteData::from_config(config, existing_channels);
            info!(
                version = %data.config.version(),
                channels = data.channels.len(),
                added = data.channels.len() - existing_channels.len(),
                "Remote config loaded"
            );
            Ok(data)
        }
        Err(e) => {
            error!(error = %e, endpoint = %fetcher.endpoint(), "Failed to load remote config");
            Err(e)
        }
    }
}
