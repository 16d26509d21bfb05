use std::sync::Arc;

use serde::Deserialize;

/// Represent an entry of the party queue
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Track {
    pub reference: TrackReference,
    /// sort key, not guaranteed to be unique
    #[serde(default)]
    pub order: f64,
    #[serde(default)]
    pub vote_count: i64,
    /// set for tracks inserted to keep the queue from running dry
    #[serde(default)]
    pub is_fallback: bool,
    #[serde(default)]
    pub added_at: Option<i64>,
}

/// Where a track's media item lives.
///
/// A track may point at another track instead of naming the item itself;
/// following the links must end at a `Direct` pair.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TrackReference {
    Indirect(Arc<Track>),
    Direct {
        #[serde(default)]
        provider: String,
        #[serde(default)]
        id: String,
    },
}

impl TrackReference {
    pub fn direct(provider: impl Into<String>, id: impl Into<String>) -> Self {
        Self::Direct {
            provider: provider.into(),
            id: id.into(),
        }
    }
}

/// Descriptive record of a media item, keyed by canonical identity
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Option<Vec<String>>,
    #[serde(default)]
    pub cover: Vec<CoverImage>,
    #[serde(default, rename = "durationMs", alias = "duration_ms")]
    pub duration_ms: Option<u64>,
    #[serde(default, rename = "isPlayable", alias = "is_playable")]
    pub is_playable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoverImage {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direct_reference() -> anyhow::Result<()> {
        let track: Track = serde_json::from_str(
            r#"{"reference":{"provider":"spotify","id":"1"},"order":2,"vote_count":3,"is_fallback":false}"#,
        )?;

        assert_eq!(track.reference, TrackReference::direct("spotify", "1"));
        assert_eq!(track.order, 2.0);
        assert_eq!(track.vote_count, 3);
        assert!(!track.is_fallback);
        Ok(())
    }

    #[test]
    fn test_parse_indirect_reference() -> anyhow::Result<()> {
        let track: Track = serde_json::from_str(
            r#"{"reference":{"reference":{"provider":"spotify","id":"7"}},"order":1}"#,
        )?;

        match &track.reference {
            TrackReference::Indirect(target) => {
                assert_eq!(target.reference, TrackReference::direct("spotify", "7"));
            }
            other => panic!("expected indirect reference, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_malformed_reference_keeps_track() -> anyhow::Result<()> {
        let track: Track = serde_json::from_str(r#"{"reference":{"provider":"spotify"}}"#)?;

        assert_eq!(track.reference, TrackReference::direct("spotify", ""));
        assert_eq!(track.vote_count, 0);
        Ok(())
    }

    #[test]
    fn test_parse_metadata() -> anyhow::Result<()> {
        let metadata: Metadata = serde_json::from_str(
            r#"{"name":"Song","artists":["A","B"],"cover":[{"url":"http://img","width":64,"height":64}],"durationMs":1000,"isPlayable":true}"#,
        )?;

        assert_eq!(metadata.name.as_deref(), Some("Song"));
        assert_eq!(metadata.artists, Some(vec!["A".to_string(), "B".to_string()]));
        assert_eq!(metadata.cover.len(), 1);
        assert_eq!(metadata.duration_ms, Some(1000));
        assert_eq!(metadata.is_playable, Some(true));
        Ok(())
    }
}
