//! Resolution of track references to their canonical identity

use crate::{
    domain::track::{Track, TrackReference},
    selectors::error::ResolveError,
};

/// Indirections followed before a reference is considered broken
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Anything that carries a track reference
pub trait AsReference {
    fn as_reference(&self) -> &TrackReference;
}

impl AsReference for TrackReference {
    fn as_reference(&self) -> &TrackReference {
        self
    }
}

impl AsReference for Track {
    fn as_reference(&self) -> &TrackReference {
        &self.reference
    }
}

/// Follows indirections until a `(provider, id)` pair is reached.
///
/// At most `max_depth` indirections are followed.
pub fn resolve_reference<R: AsReference + ?Sized>(
    source: &R,
    max_depth: usize,
) -> Result<(&str, &str), ResolveError> {
    let mut current = source.as_reference();
    let mut depth = 0;

    loop {
        match current {
            TrackReference::Direct { provider, id } => {
                return Ok((provider.as_str(), id.as_str()));
            }
            TrackReference::Indirect(target) => {
                if depth == max_depth {
                    return Err(ResolveError::DepthExceeded { depth: max_depth });
                }
                depth += 1;
                current = &target.reference;
            }
        }
    }
}

/// Canonical `provider-id` identity of a track or reference
pub fn resolve_identity<R: AsReference + ?Sized>(source: &R) -> Result<String, ResolveError> {
    resolve_identity_with_depth(source, DEFAULT_MAX_DEPTH)
}

pub fn resolve_identity_with_depth<R: AsReference + ?Sized>(
    source: &R,
    max_depth: usize,
) -> Result<String, ResolveError> {
    let (provider, id) = resolve_reference(source, max_depth)?;
    Ok(identity(provider, id))
}

pub fn identity(provider: &str, id: &str) -> String {
    format!("{provider}-{id}")
}

/// Two tracks are equal when they resolve to the same media item.
pub fn tracks_equal(a: Option<&Track>, b: Option<&Track>) -> bool {
    tracks_equal_with_depth(a, b, DEFAULT_MAX_DEPTH)
}

pub fn tracks_equal_with_depth(a: Option<&Track>, b: Option<&Track>, max_depth: usize) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) if std::ptr::eq(a, b) => true,
        (Some(a), Some(b)) => {
            match (resolve_reference(a, max_depth), resolve_reference(b, max_depth)) {
                (Ok(a), Ok(b)) => a == b,
                _ => false,
            }
        }
        _ => false,
    }
}
