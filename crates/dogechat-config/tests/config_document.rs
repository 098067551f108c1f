//! End-to-end: a full document through parsing, lookups, URL checks and the
//! channel merge a client performs on startup.

use dogechat_config::constants::{global_chat, GLOBAL_CHAT_ID};
use dogechat_config::{merge_channels, ChatConfig, ConfigError, UserRecord};

const DOCUMENT: &str = r#"{
    "version": "1.4.0",
    "motd": "Welcome to DogeChat. Be excellent to each other.",
    "blockedWords": ["airdrop", "seed phrase"],
    "userDefs": [
        {
            "id": "c3ee95cac6806bdbd2262e8f486c81ec0d2420c6bfeff34f02c54d41f3c5c731",
            "inlineIcon": "shibe",
            "role": "admin",
            "verifiedGroups": ["core", "foundation"],
            "verifiedDescription": "Core maintainer",
            "profileNameClass": "name-gold",
            "github": "dogecoin",
            "twitter": "dogecoin"
        },
        {
            "id": "0f9a6a0c88c4ef9f4c1c5b1d1b9c0db8b2d70ed5d9e8a4f9a6d1c0a1c2b3d4e5",
            "spammer": true,
            "blocked": true
        },
        {
            "id": "7e1f3f7b9b8d0b2a4c6e8f0a1b3c5d7e9f1a3b5c7d9e1f3a5b7c9d1e3f5a7b9c",
            "blocked": false
        }
    ],
    "allowedLinkHostnames": ["dogecoin.com", "*.dogecoin.com", "github.com"],
    "allowedImageHostnames": ["i.imgur.com", "*.nostr.build", "nostr.build"],
    "allowedVideoHostnames": ["*.youtube.com", "youtu.be"],
    "defaultChannels": [
        {
            "id": "d6e3172b630ef52fe07e922f54678028213676579eb73ef36a1bc3bfc24e101c",
            "name": "Dogecoin Core",
            "description": "Discuss all things related to Dogecoin Core Development",
            "creator": "c3ee95cac6806bdbd2262e8f486c81ec0d2420c6bfeff34f02c54d41f3c5c731",
            "created": 1678198928
        },
        {
            "id": "5a1e2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f8",
            "name": "Doge Memes",
            "description": "Such channel",
            "creator": "c3ee95cac6806bdbd2262e8f486c81ec0d2420c6bfeff34f02c54d41f3c5c731",
            "created": 1680000000,
            "icon": "meme",
            "picture": "https://i.imgur.com/memes.png"
        }
    ]
}"#;

const ADMIN: &str = "c3ee95cac6806bdbd2262e8f486c81ec0d2420c6bfeff34f02c54d41f3c5c731";
const SPAMMER: &str = "0f9a6a0c88c4ef9f4c1c5b1d1b9c0db8b2d70ed5d9e8a4f9a6d1c0a1c2b3d4e5";

#[test]
fn test_full_document_queries() {
    let cfg = ChatConfig::from_json(DOCUMENT).expect("document should parse");

    assert_eq!(cfg.version(), "1.4.0");
    assert_eq!(cfg.blocked_words().len(), 2);

    let admin = cfg.get_user_by_id(ADMIN);
    assert_eq!(admin.role.as_deref(), Some("admin"));
    assert_eq!(admin.github.as_deref(), Some("dogecoin"));
    assert_eq!(admin.blocked, None);
    assert!(!cfg.user_is_blocked(ADMIN));

    assert!(cfg.user_is_blocked(SPAMMER));
    assert_eq!(cfg.get_user_by_id(SPAMMER).spammer, Some(true));

    assert_eq!(cfg.get_user_by_id("newcomer"), UserRecord::unknown("newcomer"));

    assert!(cfg.is_valid_link("https://GitHub.com/dogecoin/dogecoin"));
    assert!(cfg.is_valid_link("https://blog.dogecoin.com/post"));
    assert!(!cfg.is_valid_link("https://gist.github.com/x"));

    assert!(cfg.is_valid_image("https://nostr.build/i/a.jpg"));
    assert!(cfg.is_valid_image("https://image.nostr.build/a.jpg"));
    assert!(!cfg.is_valid_image("javascript:alert(1)"));

    assert!(cfg.is_valid_video("https://youtu.be/abc"));
    assert!(cfg.is_valid_video("https://m.youtube.com/watch?v=abc"));
    assert!(!cfg.is_valid_video("https://vimeo.com/1"));
}

#[test]
fn test_startup_channel_merge() {
    let cfg = ChatConfig::from_json(DOCUMENT).unwrap();

    let existing = vec![global_chat()];
    let merged = merge_channels(&existing, &cfg.get_channels());

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].id, GLOBAL_CHAT_ID);
    assert_eq!(merged[1].name, "Doge Memes");
    assert_eq!(merged[1].picture, "https://i.imgur.com/memes.png");

    // A second load in the same session adds nothing.
    assert_eq!(merge_channels(&merged, &cfg.get_channels()), merged);
}

#[test]
fn test_truncated_document_is_rejected() {
    let truncated = DOCUMENT.replace(r#""allowedImageHostnames""#, r#""allowedImageHosts""#);
    let result = ChatConfig::from_json(&truncated);
    assert!(matches!(result, Err(ConfigError::MalformedDocument(_))));
}
