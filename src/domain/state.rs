use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;

use super::track::{Metadata, Track};

/// Tracks of a party, keyed by their internal key, in arrival order
pub type TrackMap = IndexMap<String, Arc<Track>>;

/// Metadata keyed by canonical track identity (`provider-id`)
pub type MetadataMap = IndexMap<String, Arc<Metadata>>;

/// Root of the shared state tree.
///
/// A new root is produced on every update. Sub-trees are reference counted so
/// that unchanged branches can keep their identity across updates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct State {
    #[serde(default)]
    pub party: Party,
    #[serde(default)]
    pub metadata: Option<Arc<MetadataMap>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Party {
    #[serde(default)]
    pub tracks: Option<Arc<TrackMap>>,
}

impl State {
    pub fn new(tracks: TrackMap, metadata: MetadataMap) -> Self {
        Self {
            party: Party {
                tracks: Some(Arc::new(tracks)),
            },
            metadata: Some(Arc::new(metadata)),
        }
    }
}
