//! Request bodies for the POST endpoints
//!
//! Field names follow the service's camelCase wire format.

use crate::types::{TargetValues, DEFAULT_LIMIT};
use serde::{Deserialize, Serialize};

/// Body of `POST /recommendations`
///
/// The seed flags choose which of the user's listening data the service
/// draws on when generating the playlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    /// User id
    pub id: String,
    /// Restrict recommendations to a genre
    pub genre: Option<String>,
    pub recently_played: bool,
    pub most_played: bool,
    pub liked_songs: bool,
    pub currently_playing: bool,
    pub use_audio_features: bool,
    pub use_track_seeds: bool,
    /// Audio-feature targets, e.g. `energy => 0.8`
    pub target_values: TargetValues,
    /// Number of tracks to generate
    pub amount: u32,
}

impl RecommendationRequest {
    /// Request with the default seeds: most played and liked songs, using
    /// audio features
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            genre: None,
            recently_played: false,
            most_played: true,
            liked_songs: true,
            currently_playing: false,
            use_audio_features: true,
            use_track_seeds: false,
            target_values: TargetValues::new(),
            amount: DEFAULT_LIMIT,
        }
    }

    #[must_use]
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    #[must_use]
    pub fn amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    /// Add an audio-feature target
    #[must_use]
    pub fn target(mut self, feature: impl Into<String>, value: f64) -> Self {
        self.target_values.insert(feature.into(), value);
        self
    }
}

/// Body of `POST /playlist/create/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistRequest {
    /// User id
    pub id: String,
    pub playlist_name: String,
    /// Month (1-12) whose listening history fills the playlist
    pub month: u32,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl CreatePlaylistRequest {
    pub fn new(id: impl Into<String>, playlist_name: impl Into<String>, month: u32, year: i32) -> Self {
        Self {
            id: id.into(),
            playlist_name: playlist_name.into(),
            month,
            year,
            genre: None,
        }
    }

    #[must_use]
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }
}

/// Body of `POST /filter-liked-tracks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterLikedTracksRequest {
    /// User id
    pub id: String,
    pub genre: Option<String>,
    pub target_values: TargetValues,
    pub amount: u32,
}

impl FilterLikedTracksRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            genre: None,
            target_values: TargetValues::new(),
            amount: DEFAULT_LIMIT,
        }
    }

    #[must_use]
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    #[must_use]
    pub fn amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    #[must_use]
    pub fn target(mut self, feature: impl Into<String>, value: f64) -> Self {
        self.target_values.insert(feature.into(), value);
        self
    }
}
