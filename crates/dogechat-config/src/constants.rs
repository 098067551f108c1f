use crate::types::Channel;

/// Query parameter the fetch layer appends to defeat HTTP caches.
pub const CACHE_BUST_PARAM: &str = "t";

/// Separator a URL must contain before it is worth parsing.
pub const SCHEME_SEPARATOR: &str = "://";

/// Prefix that turns a whitelist entry into a subdomain wildcard.
pub const WILDCARD_PREFIX: &str = "*.";

/// Id of the built-in global chat every client starts in.
pub const GLOBAL_CHAT_ID: &str = "d6e3172b630ef52fe07e922f54678028213676579eb73ef36a1bc3bfc24e101c";

/// Public key of the global chat's creator.
pub const GLOBAL_CHAT_CREATOR: &str =
    "c3ee95cac6806bdbd2262e8f486c81ec0d2420c6bfeff34f02c54d41f3c5c731";

/// Creation time of the global chat (unix seconds).
pub const GLOBAL_CHAT_CREATED: i64 = 1_678_198_928;

/// The channel list a client holds before any remote config has loaded.
pub fn global_chat() -> Channel {
    Channel {
        id: GLOBAL_CHAT_ID.to_string(),
        name: "Dogecoin Core".to_string(),
        about: "Discuss all things related to Dogecoin Core Development".to_string(),
        picture: String::new(),
        creator: GLOBAL_CHAT_CREATOR.to_string(),
        created: GLOBAL_CHAT_CREATED,
    }
}
