//! # Vibify
//!
//! Client for the Vibify music API: user profiles, playback state,
//! track and artist statistics, playlist creation and recommendations.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vibify::{ClientConfig, VibifyClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::new(
//!         "https://vibify.example.com",
//!         Some("my-application-id".to_string()),
//!         None,
//!     )?;
//!     let client = VibifyClient::new(config)?;
//!
//!     let response = client.top_tracks("user-42", 10).await?;
//!     if response.is_success() {
//!         println!("{:?}", response.body);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  VibifyClient: user, top_tracks, playlists, recommend ... │
//! └─────────────────────────────┬─────────────────────────────┘
//!                               │ path / query / JSON body
//! ┌─────────────────────────────┴─────────────────────────────┐
//! │  Gateway::send(path, method, body) -> ApiResponse          │
//! │  credentials → headers, one request, JSON-or-text body     │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! A non-2xx status is returned as a normal [`ApiResponse`]; only
//! configuration problems and transport failures are [`Error`]s.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Credential headers
pub mod auth;

/// Client configuration
pub mod config;

/// Request gateway
pub mod http;

/// Endpoint methods
pub mod api;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::VibifyClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::{ApiResponse, Gateway, ResponseBody};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
