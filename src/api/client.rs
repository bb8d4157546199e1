//! Endpoint methods over the gateway

use super::requests::{CreatePlaylistRequest, FilterLikedTracksRequest, RecommendationRequest};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{ApiResponse, Gateway};
use crate::types::Page;
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;
use url::form_urlencoded;

/// Client for the Vibify API
#[derive(Debug, Clone)]
pub struct VibifyClient {
    gateway: Gateway,
}

impl VibifyClient {
    /// Create a client for the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            gateway: Gateway::new(config)?,
        })
    }

    /// The gateway, for requests without a dedicated method
    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    // ========================================================================
    // User
    // ========================================================================

    /// Profile of a user
    pub async fn user(&self, user_id: &str) -> Result<ApiResponse> {
        self.gateway.get(&format!("/user/{}", segment(user_id))).await
    }

    /// Start the authorization flow for a user
    pub async fn authorize(&self, user_id: &str) -> Result<ApiResponse> {
        self.gateway.get(&format!("/authorize/{}", segment(user_id))).await
    }

    /// Remove a user and their stored tokens (logout)
    pub async fn delete_user(&self, user_id: &str) -> Result<ApiResponse> {
        self.gateway.get(&format!("/delete-user/{}", segment(user_id))).await
    }

    // ========================================================================
    // Listening data
    // ========================================================================

    /// Track the user is playing right now
    pub async fn currently_playing(&self, user_id: &str) -> Result<ApiResponse> {
        self.gateway
            .get(&format!("/currently-playing/{}", segment(user_id)))
            .await
    }

    /// Most played tracks
    pub async fn top_tracks(&self, user_id: &str, limit: u32) -> Result<ApiResponse> {
        self.gateway
            .get(&with_query(
                &format!("/top/tracks/{}", segment(user_id)),
                &[("limit", limit)],
            ))
            .await
    }

    /// Most recently played tracks
    pub async fn recently_played(&self, user_id: &str, limit: u32) -> Result<ApiResponse> {
        self.gateway
            .get(&with_query(
                &format!("/recently-played/{}", segment(user_id)),
                &[("limit", limit)],
            ))
            .await
    }

    /// Most played artists
    pub async fn top_artists(&self, user_id: &str, limit: u32) -> Result<ApiResponse> {
        self.gateway
            .get(&with_query(
                &format!("/top/artists/{}", segment(user_id)),
                &[("limit", limit)],
            ))
            .await
    }

    /// Most recently liked tracks
    pub async fn liked_tracks(&self, user_id: &str, limit: u32) -> Result<ApiResponse> {
        self.gateway
            .get(&with_query(
                &format!("/liked/tracks/{}", segment(user_id)),
                &[("limit", limit)],
            ))
            .await
    }

    /// The user's playlists
    pub async fn playlists(&self, user_id: &str, page: Page) -> Result<ApiResponse> {
        self.gateway
            .get(&with_query(
                &format!("/playlists/{}", segment(user_id)),
                &[("limit", page.limit), ("offset", page.offset)],
            ))
            .await
    }

    /// Audio features of every track in a playlist
    pub async fn audio_features(&self, playlist_id: &str, user_id: &str) -> Result<ApiResponse> {
        self.gateway
            .get(&format!(
                "/audio-features/{}/{}",
                segment(playlist_id),
                segment(user_id)
            ))
            .await
    }

    // ========================================================================
    // Playlist generation
    // ========================================================================

    /// Generate a recommendation playlist
    pub async fn recommendations(&self, request: &RecommendationRequest) -> Result<ApiResponse> {
        self.post_json("/recommendations", request).await
    }

    /// Create a playlist from one month of listening history
    pub async fn create_playlist(&self, request: &CreatePlaylistRequest) -> Result<ApiResponse> {
        self.post_json(&format!("/playlist/create/{}", segment(&request.id)), request)
            .await
    }

    /// Select liked tracks matching a genre and audio-feature targets
    pub async fn filter_liked_tracks(
        &self,
        request: &FilterLikedTracksRequest,
    ) -> Result<ApiResponse> {
        self.post_json("/filter-liked-tracks", request).await
    }

    async fn post_json<T: Serialize>(&self, path: &str, request: &T) -> Result<ApiResponse> {
        let body = serde_json::to_value(request)?;
        debug!("POST {} body: {}", path, body);
        self.gateway.post(path, &body).await
    }
}

/// Percent-encode an id for use as one path segment
fn segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}

/// Append an encoded query string to a path
fn with_query(path: &str, params: &[(&str, u32)]) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        query.append_pair(key, &value.to_string());
    }
    format!("{path}?{}", query.finish())
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_with_query() {
        assert_eq!(
            with_query("/playlists/u1", &[("limit", 10), ("offset", 20)]),
            "/playlists/u1?limit=10&offset=20"
        );
        assert_eq!(with_query("/top/tracks/u1", &[("limit", 25)]), "/top/tracks/u1?limit=25");
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("spotify_user-1.x~"), "spotify_user-1.x~");
        assert_eq!(segment("u#1"), "u%231");
        assert_eq!(segment("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(segment("jane doe"), "jane%20doe");
    }
}
