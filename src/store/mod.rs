//! Holder of the current state snapshot.
//!
//! Stands in for the store of the client: each update replaces the root, and
//! sub-trees whose contents did not change keep the allocation of the
//! previous snapshot so the projectors can skip them.

use std::{hash::Hash, sync::Arc};

use indexmap::IndexMap;

use crate::domain::state::{Party, State};

pub mod error;
pub mod snapshot;

#[derive(Debug, Default)]
pub struct Store {
    state: State,
    updates: u64,
}

impl Store {
    pub fn new(state: State) -> Self {
        Self { state, updates: 0 }
    }

    /// Replaces the current state, reusing the unchanged parts of it.
    pub fn apply(&mut self, next: State) -> &State {
        self.state = share_unchanged(&self.state, next);
        self.updates += 1;
        log::debug!("Applied state update #{}", self.updates);
        &self.state
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn updates(&self) -> u64 {
        self.updates
    }
}

/// Builds `next` out of the sub-trees of `previous` wherever they are equal.
pub fn share_unchanged(previous: &State, next: State) -> State {
    State {
        party: Party {
            tracks: share_map(previous.party.tracks.as_ref(), next.party.tracks),
        },
        metadata: share_map(previous.metadata.as_ref(), next.metadata),
    }
}

fn share_map<K: Hash + Eq + Clone, V: PartialEq>(
    previous: Option<&Arc<IndexMap<K, Arc<V>>>>,
    next: Option<Arc<IndexMap<K, Arc<V>>>>,
) -> Option<Arc<IndexMap<K, Arc<V>>>> {
    let (previous, next) = match (previous, next) {
        (Some(previous), Some(next)) => (previous, next),
        (_, next) => return next,
    };

    let mut changed = previous.len() != next.len();
    let merged = next
        .iter()
        .enumerate()
        .map(|(index, (key, value))| {
            // a moved entry changes the map even if its value did not
            if previous.get_index_of(key) != Some(index) {
                changed = true;
            }
            let value = match previous.get(key) {
                Some(old) if old == value => Arc::clone(old),
                _ => {
                    changed = true;
                    Arc::clone(value)
                }
            };
            (key.clone(), value)
        })
        .collect::<IndexMap<_, _>>();

    if changed {
        Some(Arc::new(merged))
    } else {
        Some(Arc::clone(previous))
    }
}
