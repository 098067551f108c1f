//! Host whitelist matching for URLs found in chat content.
//!
//! A whitelist entry is either an exact hostname (`example.com`) or a
//! wildcard (`*.example.com`). A wildcard only covers hosts with at least one
//! more label than its base, so `*.example.com` accepts `a.example.com` and
//! `a.b.example.com` but rejects `example.com` itself.

use tracing::trace;
use url::Url;

use crate::constants::{SCHEME_SEPARATOR, WILDCARD_PREFIX};

/// Check a single lower-cased `hostname` against a single lower-cased
/// whitelist `pattern`.
pub fn host_matches(hostname: &str, pattern: &str) -> bool {
    let Some(base) = pattern.strip_prefix(WILDCARD_PREFIX) else {
        return hostname == pattern;
    };

    let base_labels: Vec<&str> = base.split('.').collect();
    let host_labels: Vec<&str> = hostname.split('.').collect();
    if host_labels.len() < base_labels.len() + 1 {
        return false;
    }

    host_labels[host_labels.len() - base_labels.len()..] == base_labels[..]
}

/// Returns `true` if `url` parses as an absolute URL whose hostname matches
/// any entry of `whitelist`. Matching is case-insensitive.
///
/// Anything that cannot be parsed is rejected. This never fails.
pub fn check_url_against_whitelist<S: AsRef<str>>(url: &str, whitelist: &[S]) -> bool {
    if url.is_empty() || !url.contains(SCHEME_SEPARATOR) {
        return false;
    }

    let parsed = match Url::parse(&url.to_lowercase()) {
        Ok(parsed) => parsed,
        Err(e) => {
            trace!(error = %e, "Rejecting unparsable URL");
            return false;
        }
    };

    // Hostless URLs (file:///...) compare as the empty hostname.
    let hostname = parsed.host_str().unwrap_or_default();

    whitelist
        .iter()
        .any(|pattern| host_matches(hostname, &pattern.as_ref().to_lowercase()))
}
