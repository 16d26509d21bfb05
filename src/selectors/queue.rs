//! Projection of the raw track collection into the playback queue

use std::sync::Arc;

use crate::{
    domain::{
        state::{MetadataMap, TrackMap},
        track::{Metadata, Track},
    },
    selectors::reference::{identity, resolve_reference},
};

const PLAYBACK_URI_PREFIX: &str = "spotify:track:";

/// Orders the tracks of a party into the queue.
///
/// Tracks whose reference does not resolve to a non-empty provider and id are
/// left out. Tracks with equal `order` keep the iteration order of the map.
pub fn project_queue(tracks: &TrackMap, max_depth: usize) -> Vec<Arc<Track>> {
    let mut queue = tracks
        .iter()
        .filter(|(key, track)| match resolve_reference::<Track>(track, max_depth) {
            Ok((provider, id)) => !provider.is_empty() && !id.is_empty(),
            Err(e) => {
                log::warn!("Leaving track {key} out of the queue: {e}");
                false
            }
        })
        .map(|(_, track)| Arc::clone(track))
        .collect::<Vec<_>>();

    // stable
    queue.sort_by(|a, b| a.order.total_cmp(&b.order));
    queue
}

pub fn current_track(queue: &[Arc<Track>]) -> Option<Arc<Track>> {
    queue.first().cloned()
}

pub fn current_track_identity(track: Option<&Track>, max_depth: usize) -> Option<String> {
    let (provider, id) = resolve_reference(track?, max_depth).ok()?;
    Some(identity(provider, id))
}

/// URI the playback SDK understands for the given track
pub fn current_track_playback_uri(track: Option<&Track>, max_depth: usize) -> Option<String> {
    let (_, id) = resolve_reference(track?, max_depth).ok()?;
    Some(format!("{PLAYBACK_URI_PREFIX}{id}"))
}

pub fn current_track_metadata(
    identity: Option<&str>,
    metadata: &MetadataMap,
) -> Option<Arc<Metadata>> {
    metadata.get(identity?).cloned()
}
