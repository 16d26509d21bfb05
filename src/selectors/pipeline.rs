//! Memoized composition of the projectors.
//!
//! [`QueueSelectors`] owns one [`Memo`] per projector and evaluates them in
//! dependency order, so a [`PartyView`] never mixes values of two snapshots.

use std::{collections::HashMap, sync::Arc};

use crate::{
    domain::{
        state::{MetadataMap, State, TrackMap},
        track::{Metadata, Track},
    },
    selectors::{
        accessors, display,
        memo::{Memo, MemoStats},
        queue,
        reference::DEFAULT_MAX_DEPTH,
    },
};

pub type Queue = Arc<[Arc<Track>]>;

/// Everything the presentation layer needs for one snapshot
#[derive(Debug, Clone)]
pub struct PartyView {
    pub queue: Queue,
    pub entries: Vec<QueueEntry>,
    pub current_track: Option<Arc<Track>>,
    pub current_track_identity: Option<String>,
    pub playback_uri: Option<String>,
    pub current_metadata: Option<Arc<Metadata>>,
    pub artist_line: Option<Arc<str>>,
}

#[derive(Debug, Clone)]
pub struct QueueEntry {
    pub key: String,
    pub track: Arc<Track>,
    pub vote_label: Arc<str>,
}

/// Vote label of a single track, one selector per rendered row
pub struct VoteLabelSelector {
    memo: Memo<Option<Arc<Track>>, Arc<str>>,
}

impl VoteLabelSelector {
    pub fn new() -> Self {
        Self {
            memo: Memo::new("vote_label"),
        }
    }

    pub fn label(&mut self, state: &State, key: &str) -> Arc<str> {
        self.label_of(accessors::track(state, key))
    }

    pub fn label_of(&mut self, track: Option<Arc<Track>>) -> Arc<str> {
        self.memo.get(track, |track| display::vote_label(track.as_deref()).into())
    }

    pub fn stats(&self) -> MemoStats {
        self.memo.stats()
    }
}

impl Default for VoteLabelSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Artist line of the metadata stored under one identity
pub struct ArtistLineSelector {
    memo: Memo<Option<Arc<Metadata>>, Option<Arc<str>>>,
}

impl ArtistLineSelector {
    pub fn new() -> Self {
        Self {
            memo: Memo::new("artist_line"),
        }
    }

    pub fn line(&mut self, state: &State, identity: &str) -> Option<Arc<str>> {
        self.line_of(accessors::metadata(state, identity))
    }

    pub fn line_of(&mut self, metadata: Option<Arc<Metadata>>) -> Option<Arc<str>> {
        self.memo.get(metadata, |metadata| {
            display::artist_line(metadata.as_deref()).map(Arc::from)
        })
    }

    pub fn stats(&self) -> MemoStats {
        self.memo.stats()
    }
}

impl Default for ArtistLineSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// The projector pipeline of a party view
pub struct QueueSelectors {
    max_depth: usize,
    queue: Memo<Arc<TrackMap>, Queue>,
    current_track: Memo<Queue, Option<Arc<Track>>>,
    identity: Memo<Option<Arc<Track>>, Option<String>>,
    playback_uri: Memo<Option<Arc<Track>>, Option<String>>,
    metadata: Memo<(Option<String>, Arc<MetadataMap>), Option<Arc<Metadata>>>,
    artist_line: ArtistLineSelector,
    vote_labels: HashMap<String, VoteLabelSelector>,
}

impl QueueSelectors {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            queue: Memo::new("queue"),
            current_track: Memo::new("current_track"),
            identity: Memo::new("current_track_identity"),
            playback_uri: Memo::new("current_track_playback_uri"),
            metadata: Memo::new("current_track_metadata"),
            artist_line: ArtistLineSelector::new(),
            vote_labels: HashMap::new(),
        }
    }

    pub fn queue(&mut self, state: &State) -> Queue {
        let max_depth = self.max_depth;
        self.queue.get(accessors::tracks(state), |tracks| {
            queue::project_queue(tracks, max_depth).into()
        })
    }

    pub fn current_track(&mut self, state: &State) -> Option<Arc<Track>> {
        let queued = self.queue(state);
        self.current_track_of(queued)
    }

    pub fn current_track_identity(&mut self, state: &State) -> Option<String> {
        let track = self.current_track(state);
        self.identity_of(track)
    }

    pub fn current_track_playback_uri(&mut self, state: &State) -> Option<String> {
        let track = self.current_track(state);
        self.playback_uri_of(track)
    }

    pub fn current_track_metadata(&mut self, state: &State) -> Option<Arc<Metadata>> {
        let identity = self.current_track_identity(state);
        self.metadata_of(identity, accessors::metadata_map(state))
    }

    /// Artist line of the current track
    pub fn artist_line(&mut self, state: &State) -> Option<Arc<str>> {
        let metadata = self.current_track_metadata(state);
        self.artist_line.line_of(metadata)
    }

    /// Vote label of the track stored under `key`, empty for unknown keys.
    pub fn vote_label(&mut self, state: &State, key: &str) -> Arc<str> {
        let Some(track) = accessors::track(state, key) else {
            self.vote_labels.remove(key);
            return Arc::from("");
        };

        self.vote_labels
            .entry(key.to_string())
            .or_default()
            .label_of(Some(track))
    }

    /// Evaluates every projector for `state`, upstream first.
    pub fn derive(&mut self, state: &State) -> PartyView {
        let tracks = accessors::tracks(state);
        let metadata_map = accessors::metadata_map(state);

        let queue = self.queue(state);
        let current_track = self.current_track_of(Arc::clone(&queue));
        let current_track_identity = self.identity_of(current_track.clone());
        let playback_uri = self.playback_uri_of(current_track.clone());
        let current_metadata = self.metadata_of(current_track_identity.clone(), metadata_map);
        let artist_line = self.artist_line.line_of(current_metadata.clone());

        self.vote_labels.retain(|key, _| tracks.contains_key(key));
        let mut keys: HashMap<*const Track, Vec<&String>> = HashMap::new();
        for (key, track) in tracks.iter().rev() {
            keys.entry(Arc::as_ptr(track)).or_default().push(key);
        }
        let entries = queue
            .iter()
            .filter_map(|track| {
                let key = keys.get_mut(&Arc::as_ptr(track))?.pop()?.clone();
                let vote_label = self
                    .vote_labels
                    .entry(key.clone())
                    .or_default()
                    .label_of(Some(Arc::clone(track)));
                Some(QueueEntry {
                    key,
                    track: Arc::clone(track),
                    vote_label,
                })
            })
            .collect();

        PartyView {
            queue,
            entries,
            current_track,
            current_track_identity,
            playback_uri,
            current_metadata,
            artist_line,
        }
    }

    /// Combined cache statistics of every projector
    pub fn stats(&self) -> MemoStats {
        let vote_labels = self
            .vote_labels
            .values()
            .fold(MemoStats::default(), |acc, s| acc.merge(s.stats()));

        self.queue
            .stats()
            .merge(self.current_track.stats())
            .merge(self.identity.stats())
            .merge(self.playback_uri.stats())
            .merge(self.metadata.stats())
            .merge(self.artist_line.stats())
            .merge(vote_labels)
    }

    fn current_track_of(&mut self, queued: Queue) -> Option<Arc<Track>> {
        self.current_track.get(queued, |queued| queue::current_track(queued))
    }

    fn identity_of(&mut self, track: Option<Arc<Track>>) -> Option<String> {
        let max_depth = self.max_depth;
        self.identity.get(track, |track| {
            queue::current_track_identity(track.as_deref(), max_depth)
        })
    }

    fn playback_uri_of(&mut self, track: Option<Arc<Track>>) -> Option<String> {
        let max_depth = self.max_depth;
        self.playback_uri.get(track, |track| {
            queue::current_track_playback_uri(track.as_deref(), max_depth)
        })
    }

    fn metadata_of(
        &mut self,
        identity: Option<String>,
        metadata: Arc<MetadataMap>,
    ) -> Option<Arc<Metadata>> {
        self.metadata.get((identity, metadata), |(identity, metadata)| {
            queue::current_track_metadata(identity.as_deref(), metadata)
        })
    }
}

impl Default for QueueSelectors {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}
