//! Merging the server's official channels into a client's channel list.

use std::collections::HashSet;

use crate::types::Channel;

/// Append every channel in `incoming` whose id is not already in `existing`.
///
/// `existing` keeps its order and contents. New channels follow in
/// `incoming` order. Running the merge again with the same `incoming` is a
/// no-op. Duplicates inside `incoming` itself are not collapsed.
pub fn merge_channels(existing: &[Channel], incoming: &[Channel]) -> Vec<Channel> {
    let existing_ids: HashSet<&str> = existing.iter().map(|ch| ch.id.as_str()).collect();

    existing
        .iter()
        .chain(incoming.iter().filter(|ch| !existing_ids.contains(ch.id.as_str())))
        .cloned()
        .collect()
}
