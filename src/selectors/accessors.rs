//! Lookups of raw sub-trees of the state

use std::sync::{Arc, LazyLock};

use crate::domain::{
    state::{MetadataMap, State, TrackMap},
    track::{Metadata, Track},
};

// Handed out for every absent collection so repeated lookups stay identical.
static EMPTY_TRACKS: LazyLock<Arc<TrackMap>> = LazyLock::new(|| Arc::new(TrackMap::new()));
static EMPTY_METADATA: LazyLock<Arc<MetadataMap>> =
    LazyLock::new(|| Arc::new(MetadataMap::new()));

pub fn tracks(state: &State) -> Arc<TrackMap> {
    state
        .party
        .tracks
        .clone()
        .unwrap_or_else(|| Arc::clone(&EMPTY_TRACKS))
}

pub fn track(state: &State, id: &str) -> Option<Arc<Track>> {
    state.party.tracks.as_ref()?.get(id).cloned()
}

pub fn metadata_map(state: &State) -> Arc<MetadataMap> {
    state
        .metadata
        .clone()
        .unwrap_or_else(|| Arc::clone(&EMPTY_METADATA))
}

pub fn metadata(state: &State, id: &str) -> Option<Arc<Metadata>> {
    state.metadata.as_ref()?.get(id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::track::TrackReference;

    fn sample_state() -> State {
        let mut tracks = TrackMap::new();
        tracks.insert(
            "x".to_string(),
            Arc::new(Track {
                reference: TrackReference::direct("spotify", "1"),
                order: 1.0,
                vote_count: 1,
                is_fallback: false,
                added_at: None,
            }),
        );
        let mut metadata = MetadataMap::new();
        metadata.insert("spotify-1".to_string(), Arc::new(Metadata::default()));
        State::new(tracks, metadata)
    }

    #[test]
    fn test_absent_collections_are_empty() {
        let state = State::default();

        assert!(tracks(&state).is_empty());
        assert!(metadata_map(&state).is_empty());
        assert!(track(&state, "x").is_none());
        assert!(metadata(&state, "spotify-1").is_none());
    }

    #[test]
    fn test_absent_collections_keep_identity() {
        let first = State::default();
        let second = State::default();

        assert!(Arc::ptr_eq(&tracks(&first), &tracks(&second)));
        assert!(Arc::ptr_eq(&metadata_map(&first), &metadata_map(&second)));
    }

    #[test]
    fn test_lookups_return_shared_entries() {
        let state = sample_state();

        let from_map = tracks(&state);
        let single = track(&state, "x").expect("track x");
        assert!(Arc::ptr_eq(&from_map["x"], &single));

        assert!(metadata(&state, "spotify-1").is_some());
        assert!(metadata(&state, "spotify-2").is_none());
        assert!(track(&state, "y").is_none());
    }
}
