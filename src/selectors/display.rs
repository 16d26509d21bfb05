//! Human readable strings shown next to tracks

use crate::domain::track::{Metadata, Track};

/// Credit line of a track, `None` when there is nothing to show.
///
/// `["A", "B", "C"]` becomes `"A feat. B & C"`.
pub fn artist_line(metadata: Option<&Metadata>) -> Option<String> {
    let (first, rest) = metadata?.artists.as_deref()?.split_first()?;

    if rest.is_empty() {
        Some(first.clone())
    } else {
        Some(format!("{first} feat. {}", rest.join(" & ")))
    }
}

pub fn vote_label(track: Option<&Track>) -> String {
    let Some(track) = track else {
        return String::new();
    };

    if track.vote_count > 1 {
        format!("{} Votes", track.vote_count)
    } else if track.vote_count == 1 {
        "One Vote".to_string()
    } else if track.is_fallback {
        "Fallback Track".to_string()
    } else {
        "Not in Queue".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::track::TrackReference;

    fn with_artists(artists: &[&str]) -> Metadata {
        Metadata {
            artists: Some(artists.iter().map(|a| a.to_string()).collect()),
            ..Metadata::default()
        }
    }

    fn with_votes(vote_count: i64, is_fallback: bool) -> Track {
        Track {
            reference: TrackReference::direct("spotify", "1"),
            order: 0.0,
            vote_count,
            is_fallback,
            added_at: None,
        }
    }

    #[test]
    fn test_artist_line_without_artists() {
        assert_eq!(artist_line(None), None);
        assert_eq!(artist_line(Some(&Metadata::default())), None);
        assert_eq!(artist_line(Some(&with_artists(&[]))), None);
    }

    #[test]
    fn test_artist_line_single_artist() {
        assert_eq!(artist_line(Some(&with_artists(&["A"]))).as_deref(), Some("A"));
    }

    #[test]
    fn test_artist_line_featuring() {
        assert_eq!(
            artist_line(Some(&with_artists(&["A", "B"]))).as_deref(),
            Some("A feat. B")
        );
        assert_eq!(
            artist_line(Some(&with_artists(&["A", "B", "C"]))).as_deref(),
            Some("A feat. B & C")
        );
    }

    #[test]
    fn test_vote_label_table() {
        assert_eq!(vote_label(None), "");
        assert_eq!(vote_label(Some(&with_votes(3, false))), "3 Votes");
        assert_eq!(vote_label(Some(&with_votes(2, true))), "2 Votes");
        assert_eq!(vote_label(Some(&with_votes(1, false))), "One Vote");
        assert_eq!(vote_label(Some(&with_votes(1, true))), "One Vote");
        assert_eq!(vote_label(Some(&with_votes(0, false))), "Not in Queue");
        assert_eq!(vote_label(Some(&with_votes(0, true))), "Fallback Track");
    }

    #[test]
    fn test_vote_label_negative_count() {
        // treated like zero votes
        assert_eq!(vote_label(Some(&with_votes(-2, false))), "Not in Queue");
        assert_eq!(vote_label(Some(&with_votes(-1, true))), "Fallback Track");
    }
}
