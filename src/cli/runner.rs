//! CLI runner - executes commands

use crate::api::{
    CreatePlaylistRequest, FilterLikedTracksRequest, RecommendationRequest, VibifyClient,
};
use crate::cli::commands::{Cli, Commands, OutputFormat, RecommendArgs};
use crate::config::{ClientConfig, ConfigFile};
use crate::error::{Error, Result};
use crate::http::ApiResponse;
use crate::types::{Page, TargetValues};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print the response
    pub async fn run(&self) -> Result<()> {
        let response = self.execute().await?;
        println!("{}", render(&response, self.cli.format)?);
        Ok(())
    }

    /// Run the CLI command and return the response
    pub async fn execute(&self) -> Result<ApiResponse> {
        let client = VibifyClient::new(self.client_config()?)?;

        match &self.cli.command {
            Commands::User { user_id } => client.user(user_id).await,
            Commands::CurrentlyPlaying { user_id } => client.currently_playing(user_id).await,
            Commands::TopTracks { user_id, limit } => client.top_tracks(user_id, *limit).await,
            Commands::RecentlyPlayed { user_id, limit } => {
                client.recently_played(user_id, *limit).await
            }
            Commands::TopArtists { user_id, limit } => client.top_artists(user_id, *limit).await,
            Commands::LikedTracks { user_id, limit } => client.liked_tracks(user_id, *limit).await,
            Commands::Playlists {
                user_id,
                limit,
                offset,
            } => client.playlists(user_id, Page::new(*limit, *offset)).await,
            Commands::AudioFeatures {
                playlist_id,
                user_id,
            } => client.audio_features(playlist_id, user_id).await,
            Commands::Recommend(args) => client.recommendations(&recommendation(args)).await,
            Commands::CreatePlaylist {
                user_id,
                name,
                month,
                year,
                genre,
            } => {
                let mut request = CreatePlaylistRequest::new(user_id, name, *month, *year);
                request.genre.clone_from(genre);
                client.create_playlist(&request).await
            }
            Commands::FilterLikedTracks {
                user_id,
                genre,
                targets,
                amount,
            } => {
                let mut request = FilterLikedTracksRequest::new(user_id).amount(*amount);
                request.genre.clone_from(genre);
                request.target_values = target_values(targets);
                client.filter_liked_tracks(&request).await
            }
            Commands::DeleteUser { user_id } => client.delete_user(user_id).await,
            Commands::Authorize { user_id } => client.authorize(user_id).await,
            Commands::Request { path, method, body } => {
                let method = Method::from_bytes(method.to_uppercase().as_bytes())
                    .map_err(|e| Error::config(format!("Invalid HTTP method '{method}': {e}")))?;
                let body = body
                    .as_deref()
                    .map(serde_json::from_str::<Value>)
                    .transpose()?;
                client.gateway().send(path, method, body.as_ref()).await
            }
        }
    }

    /// Build the client config: flags and environment first, then the config file.
    ///
    /// Empty flag or environment values count as unset so they do not hide
    /// values from the file.
    fn client_config(&self) -> Result<ClientConfig> {
        let flags = ConfigFile {
            base_url: non_empty(self.cli.base_url.as_deref()),
            application_token: non_empty(self.cli.application_id.as_deref()),
            user_token: non_empty(self.cli.api_key.as_deref()),
            timeout_secs: self.cli.timeout,
        };

        let merged = match &self.cli.config {
            Some(path) => {
                debug!("Loading config file {}", path.display());
                flags.or(ConfigFile::load(path)?)
            }
            None => flags,
        };

        merged.into_config()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn recommendation(args: &RecommendArgs) -> RecommendationRequest {
    let mut request = RecommendationRequest::new(&args.user_id).amount(args.amount);
    request.genre.clone_from(&args.genre);
    request.recently_played = args.recently_played;
    request.most_played = !args.no_most_played;
    request.liked_songs = !args.no_liked_songs;
    request.currently_playing = args.currently_playing;
    request.use_audio_features = !args.no_audio_features;
    request.use_track_seeds = args.track_seeds;
    request.target_values = target_values(&args.targets);
    request
}

fn target_values(targets: &[(String, f64)]) -> TargetValues {
    targets.iter().cloned().collect()
}

/// Render a response as `{"status": .., "body": ..}`
pub fn render(response: &ApiResponse, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(response)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(response)?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io::Write;
    use std::path::PathBuf;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// CLI built without clap so environment variables cannot leak in
    fn cli(command: Commands) -> Cli {
        Cli {
            base_url: None,
            application_id: None,
            api_key: None,
            config: None,
            timeout: None,
            format: OutputFormat::Json,
            verbose: false,
            command,
        }
    }

    fn config_file(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{body}").unwrap();
        file
    }

    fn user(user_id: &str) -> Commands {
        Commands::User {
            user_id: user_id.to_string(),
        }
    }

    #[test]
    fn test_render_formats() {
        let response = ApiResponse::from_parts(200, r#"{"a":1}"#.to_string());
        assert_eq!(
            render(&response, OutputFormat::Json).unwrap(),
            r#"{"status":200,"body":{"a":1}}"#
        );
        assert!(render(&response, OutputFormat::Pretty)
            .unwrap()
            .contains("\n  \"status\": 200"));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("x")), Some("x".to_string()));
    }

    #[test]
    fn test_recommendation_from_args() {
        let cli = Cli::try_parse_from([
            "vibify",
            "recommend",
            "u1",
            "--no-most-played",
            "--track-seeds",
            "--target",
            "energy=0.5",
        ])
        .unwrap();
        let Commands::Recommend(args) = &cli.command else {
            panic!("expected recommend");
        };

        let request = recommendation(args);
        assert!(!request.most_played);
        assert!(request.liked_songs);
        assert!(request.use_track_seeds);
        assert_eq!(request.target_values.get("energy"), Some(&0.5));
    }

    #[tokio::test]
    async fn test_missing_credentials() {
        let mut cli = cli(user("u1"));
        cli.base_url = Some("http://localhost:1".to_string());

        let err = Runner::new(cli).execute().await.unwrap_err();
        assert!(matches!(err, Error::MissingCredentials));
    }

    #[tokio::test]
    async fn test_missing_config_file() {
        let mut cli = cli(user("u1"));
        cli.config = Some(PathBuf::from("/nonexistent/vibify.json"));

        let err = Runner::new(cli).execute().await.unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
        assert!(err.is_config());
    }

    #[tokio::test]
    async fn test_execute_top_tracks() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/top/tracks/u1"))
            .and(query_param("limit", "5"))
            .and(header("x-api-key", "key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["t1"])))
            .mount(&mock_server)
            .await;

        let mut cli = cli(Commands::TopTracks {
            user_id: "u1".to_string(),
            limit: 5,
        });
        cli.base_url = Some(mock_server.uri());
        cli.api_key = Some("key".to_string());

        let response = Runner::new(cli).execute().await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body.as_json(), Some(&json!(["t1"])));
    }

    #[tokio::test]
    async fn test_execute_raw_request_with_config_file() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/user/u1"))
            .and(header("x-application-id", "from-file"))
            .and(body_json(json!({"name": "Ada"})))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&mock_server)
            .await;

        let file = config_file(&format!(
            r#"{{"base_url": "{}", "application_token": "from-file"}}"#,
            mock_server.uri()
        ));

        let mut cli = cli(Commands::Request {
            path: "/user/u1".to_string(),
            method: "put".to_string(),
            body: Some(r#"{"name": "Ada"}"#.to_string()),
        });
        cli.config = Some(file.path().to_path_buf());

        let response = Runner::new(cli).execute().await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body.as_text(), Some("ok"));
    }

    #[tokio::test]
    async fn test_flags_override_config_file() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user/u1"))
            .and(header("x-application-id", "from-flag"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let file = config_file(&format!(
            r#"{{"base_url": "{}", "application_token": "from-file"}}"#,
            mock_server.uri()
        ));

        let mut cli = cli(user("u1"));
        cli.config = Some(file.path().to_path_buf());
        cli.application_id = Some("from-flag".to_string());

        let response = Runner::new(cli).execute().await.unwrap();
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_empty_flags_fall_back_to_config_file() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user/u1"))
            .and(header("x-application-id", "from-file"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "u1"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let file = config_file(&format!(
            r#"{{"base_url": "{}", "application_token": "from-file"}}"#,
            mock_server.uri()
        ));

        // What an empty APPLICATION_ID= line in .env produces
        let mut cli = cli(user("u1"));
        cli.config = Some(file.path().to_path_buf());
        cli.base_url = Some(String::new());
        cli.application_id = Some(String::new());
        cli.api_key = Some(String::new());

        let response = Runner::new(cli).execute().await.unwrap();

        assert_eq!(response.status, 200);
        let requests = mock_server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("x-api-key").is_none());
    }

    #[test]
    fn test_empty_flag_value_parses_as_some() {
        let cli = Cli::try_parse_from(["vibify", "--application-id", "", "user", "u1"]).unwrap();
        assert_eq!(cli.application_id.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_execute_rejects_bad_body() {
        let mut cli = cli(Commands::Request {
            path: "/x".to_string(),
            method: "POST".to_string(),
            body: Some("{not json".to_string()),
        });
        cli.base_url = Some("http://localhost:1".to_string());
        cli.application_id = Some("app".to_string());

        let err = Runner::new(cli).execute().await.unwrap_err();
        assert!(matches!(err, Error::JsonParse(_)));
    }
}
