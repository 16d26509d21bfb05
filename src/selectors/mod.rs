//! Projections from the shared state into what the queue view shows.
//!
//! Every function here is pure. The memoized variants live in [`pipeline`].

pub mod accessors;
pub mod display;
pub mod error;
pub mod memo;
pub mod pipeline;
pub mod queue;
pub mod reference;

pub use pipeline::{ArtistLineSelector, PartyView, QueueEntry, QueueSelectors, VoteLabelSelector};
pub use reference::{resolve_identity, tracks_equal};
