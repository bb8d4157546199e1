//! Endpoint client
//!
//! [`VibifyClient`] exposes one method per API endpoint. Each method only
//! formats a path, query string or body and hands it to the
//! [`Gateway`](crate::http::Gateway).
//!
//! # Endpoints
//!
//! | Method | Request |
//! |---|---|
//! | `user` | `GET /user/{id}` |
//! | `currently_playing` | `GET /currently-playing/{id}` |
//! | `top_tracks` | `GET /top/tracks/{id}?limit=` |
//! | `recently_played` | `GET /recently-played/{id}?limit=` |
//! | `top_artists` | `GET /top/artists/{id}?limit=` |
//! | `liked_tracks` | `GET /liked/tracks/{id}?limit=` |
//! | `playlists` | `GET /playlists/{id}?limit=&offset=` |
//! | `audio_features` | `GET /audio-features/{playlist_id}/{user_id}` |
//! | `recommendations` | `POST /recommendations` |
//! | `create_playlist` | `POST /playlist/create/{id}` |
//! | `filter_liked_tracks` | `POST /filter-liked-tracks` |
//! | `delete_user` | `GET /delete-user/{id}` |
//! | `authorize` | `GET /authorize/{id}` |

mod client;
mod requests;

pub use client::VibifyClient;
pub use requests::{CreatePlaylistRequest, FilterLikedTracksRequest, RecommendationRequest};
