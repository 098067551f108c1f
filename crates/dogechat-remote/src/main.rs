//! # dogechat-config-check
//!
//! Loads the remote configuration (or a local copy of it) the same way the
//! chat client does, reports what it contains, and classifies any URLs given
//! on the command line.
//!
//! ```text
//! dogechat-config-check [PATH] [URL...]
//! ```
//!
//! An argument without `://` is read as a local document path. Every other
//! argument is a URL to check against the link, image and video whitelists.

use std::path::PathBuf;

use dogechat_config::constants::SCHEME_SEPARATOR;
use dogechat_config::ChatConfig;
use dogechat_remote::{bootstrap, initial_channels, ConfigFetcher, RemoteData, RemoteSettings};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("info,dogechat_remote=debug,dogechat_config=debug")
        }))
        .init();

    let (paths, urls): (Vec<String>, Vec<String>) = std::env::args()
        .skip(1)
        .partition(|arg| !arg.contains(SCHEME_SEPARATOR));

    let data = match paths.first() {
        Some(path) => {
            let config = ChatConfig::load(&PathBuf::from(path))?;
            RemoteData::from_config(config, &initial_channels())
        }
        None => {
            let settings = RemoteSettings::from_env();
            info!(?settings, "Loaded fetch settings");
            let fetcher = ConfigFetcher::new(&settings)?;
            bootstrap(&fetcher, &initial_channels()).await?
        }
    };

    let config = &data.config;
    info!(
        version = %config.version(),
        motd = %config.motd(),
        users = config.users().count(),
        blocked_words = config.blocked_words().len(),
        "Config summary"
    );
    info!(
        links = ?config.allowed_link_hostnames(),
        images = ?config.allowed_image_hostnames(),
        videos = ?config.allowed_video_hostnames(),
        "Whitelists"
    );
    for channel in &data.channels {
        info!(id = %channel.id, name = %channel.name, "Channel");
    }

    for url in &urls {
        info!(
            url = %url,
            link = config.is_valid_link(url),
            image = config.is_valid_image(url),
            video = config.is_valid_video(url),
            "URL check"
        );
    }

    Ok(())
}
