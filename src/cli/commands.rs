//! CLI commands and argument parsing

use crate::config::{ENV_API_KEY, ENV_API_URL, ENV_APPLICATION_ID};
use crate::types::DEFAULT_LIMIT;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Vibify API command-line client
#[derive(Parser, Debug)]
#[command(name = "vibify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API base URL
    #[arg(long, global = true, env = ENV_API_URL)]
    pub base_url: Option<String>,

    /// Application token, sent as x-application-id
    #[arg(long, global = true, env = ENV_APPLICATION_ID, hide_env_values = true)]
    pub application_id: Option<String>,

    /// User token, sent as x-api-key
    #[arg(long, global = true, env = ENV_API_KEY, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Configuration file (JSON); flags and environment take precedence
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a user's profile
    User { user_id: String },

    /// Show the track a user is playing
    CurrentlyPlaying { user_id: String },

    /// List a user's most played tracks
    TopTracks {
        user_id: String,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },

    /// List a user's recently played tracks
    RecentlyPlayed {
        user_id: String,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },

    /// List a user's most played artists
    TopArtists {
        user_id: String,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },

    /// List a user's recently liked tracks
    LikedTracks {
        user_id: String,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },

    /// List a user's playlists
    Playlists {
        user_id: String,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },

    /// Show audio features of a playlist's tracks
    AudioFeatures { playlist_id: String, user_id: String },

    /// Generate a recommendation playlist
    Recommend(RecommendArgs),

    /// Create a playlist from one month of listening history
    CreatePlaylist {
        user_id: String,
        /// Name of the new playlist
        #[arg(long)]
        name: String,
        /// Month (1-12)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        genre: Option<String>,
    },

    /// Select liked tracks matching a genre and audio-feature targets
    FilterLikedTracks {
        user_id: String,
        #[arg(long)]
        genre: Option<String>,
        /// Audio-feature target as FEATURE=VALUE (repeatable)
        #[arg(long = "target", value_parser = parse_target)]
        targets: Vec<(String, f64)>,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        amount: u32,
    },

    /// Remove a user and their stored tokens
    DeleteUser { user_id: String },

    /// Start the authorization flow for a user
    Authorize { user_id: String },

    /// Send a raw request to any path
    Request {
        /// Path appended to the base URL, e.g. /user/42
        path: String,
        /// HTTP method
        #[arg(short = 'X', long, default_value = "GET")]
        method: String,
        /// JSON body (sent for POST and PUT)
        #[arg(short, long)]
        body: Option<String>,
    },
}

/// Options for `recommend`
#[derive(Args, Debug)]
pub struct RecommendArgs {
    pub user_id: String,

    #[arg(long)]
    pub genre: Option<String>,

    /// Seed from recently played tracks
    #[arg(long)]
    pub recently_played: bool,

    /// Do not seed from most played tracks
    #[arg(long)]
    pub no_most_played: bool,

    /// Do not seed from liked songs
    #[arg(long)]
    pub no_liked_songs: bool,

    /// Seed from the currently playing track
    #[arg(long)]
    pub currently_playing: bool,

    /// Ignore audio features when matching
    #[arg(long)]
    pub no_audio_features: bool,

    /// Use individual tracks as seeds
    #[arg(long)]
    pub track_seeds: bool,

    /// Audio-feature target as FEATURE=VALUE (repeatable)
    #[arg(long = "target", value_parser = parse_target)]
    pub targets: Vec<(String, f64)>,

    /// Number of tracks to generate
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub amount: u32,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}

/// Parse `FEATURE=VALUE`
fn parse_target(s: &str) -> Result<(String, f64), String> {
    let (feature, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FEATURE=VALUE, got '{s}'"))?;
    let value = value
        .parse::<f64>()
        .map_err(|e| format!("invalid value for '{feature}': {e}"))?;
    Ok((feature.to_string(), value))
}
