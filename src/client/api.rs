// ABOUTME: Thin typed wrappers over the console backend's REST endpoints
// ABOUTME: Player results, player CRUD, tasks, team results, annotations, upload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics

use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::errors::{ApiError, ApiResult};
use crate::models::{
    AnalysisTask, Annotation, GameResult, NeedAnnotation, Player, PlayerResultDto, TeamResult,
    UploadVideoItem,
};
use crate::stats::StatsSummary;
use crate::upload::is_video_name;

/// Async client for the console backend
///
/// Each method is a thin wrapper around one REST endpoint: build the URL,
/// send, check the status, decode the typed record. All fetch failures
/// surface as [`ApiError`] before any aggregation runs.
///
/// The underlying HTTP client pools connections and is cheap to clone;
/// create one `ConsoleClient` per backend and clone it freely.
#[derive(Debug, Clone)]
pub struct ConsoleClient {
    base_url: Url,
    http: Client,
}

impl ConsoleClient {
    /// Create a client against the configured backend
    ///
    /// The connection pool and both timeouts come from the supplied
    /// [`ClientConfig`].
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidBaseUrl`] when the configured base URL
    /// does not parse, or [`ApiError::HttpClient`] when the underlying
    /// client cannot be constructed.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|source| ApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
            source,
        })?;
        let http = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|source| ApiError::HttpClient { source })?;
        Ok(Self { base_url, http })
    }

    /// Create a client from environment configuration
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidBaseUrl`] when `MATCHLENS_API_BASE_URL`
    /// does not parse, or [`ApiError::HttpClient`] when the underlying
    /// client cannot be constructed.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(&ClientConfig::from_env())
    }

    /// Backend base URL this client talks to
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// All per-game result rows for one athlete, newest last
    ///
    /// # Errors
    /// Fails on transport, non-success status, or decode problems.
    pub async fn player_results(&self, player_id: i64) -> ApiResult<Vec<PlayerResultDto>> {
        self.get_json(&format!("/api/player/{player_id}/results"))
            .await
    }

    /// One athlete's result row for a single analysis task
    ///
    /// # Errors
    /// Fails on transport, non-success status, or decode problems.
    pub async fn player_result_by_task(
        &self,
        player_id: i64,
        task_id: &str,
    ) -> ApiResult<PlayerResultDto> {
        self.get_json(&format!("/api/player/{player_id}/task/{task_id}"))
            .await
    }

    /// Result rows for every athlete across all tasks
    ///
    /// # Errors
    /// Fails on transport, non-success status, or decode problems.
    pub async fn all_player_results(&self) -> ApiResult<Vec<PlayerResultDto>> {
        self.get_json("/api/players/results").await
    }

    /// Fetch one athlete's rows and convert them into validated records
    ///
    /// # Errors
    /// Fails on transport, non-success status, or decode problems.
    pub async fn game_results(&self, player_id: i64) -> ApiResult<Vec<GameResult>> {
        let rows = self.player_results(player_id).await?;
        Ok(rows.into_iter().map(GameResult::from).collect())
    }

    /// Fetch and aggregate one athlete's summary statistics
    ///
    /// Convenience for the dashboard: one fetch, then the pure
    /// [`StatsSummary::aggregate`] projection over whatever rows came back.
    ///
    /// # Errors
    /// Fails on transport, non-success status, or decode problems.
    pub async fn player_summary(&self, player_id: i64) -> ApiResult<StatsSummary> {
        let results = self.game_results(player_id).await?;
        Ok(StatsSummary::aggregate(&results))
    }

    /// One athlete's profile
    ///
    /// # Errors
    /// Fails on transport, non-success status, or decode problems.
    pub async fn player(&self, player_id: i64) -> ApiResult<Player> {
        self.get_json(&format!("/api/playerdata/{player_id}")).await
    }

    /// All athlete profiles
    ///
    /// # Errors
    /// Fails on transport, non-success status, or decode problems.
    pub async fn players(&self) -> ApiResult<Vec<Player>> {
        self.get_json("/api/playerdata").await
    }

    /// Register a new athlete
    ///
    /// # Errors
    /// Fails on transport or non-success status.
    pub async fn add_player(&self, player: &Player) -> ApiResult<()> {
        self.send_json(reqwest::Method::POST, "/api/playerdata", player)
            .await
    }

    /// Update an existing athlete profile
    ///
    /// # Errors
    /// Fails on transport or non-success status.
    pub async fn update_player(&self, player_id: i64, player: &Player) -> ApiResult<()> {
        self.send_json(
            reqwest::Method::PUT,
            &format!("/api/playerdata/{player_id}"),
            player,
        )
        .await
    }

    /// Remove an athlete and their linked results
    ///
    /// # Errors
    /// Fails on transport or non-success status.
    pub async fn delete_player(&self, player_id: i64) -> ApiResult<()> {
        let endpoint = format!("/api/playerdata/{player_id}");
        let url = self.endpoint(&endpoint)?;
        debug!(%endpoint, "DELETE");
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|source| ApiError::Network {
                endpoint: endpoint.clone(),
                source,
            })?;
        Self::check_status(&endpoint, response.status())
    }

    /// All video analysis tasks
    ///
    /// # Errors
    /// Fails on transport, non-success status, or decode problems.
    pub async fn tasks(&self) -> ApiResult<Vec<AnalysisTask>> {
        self.get_json("/api/tasks").await
    }

    /// Team-level analytics for one analysis task
    ///
    /// # Errors
    /// Fails on transport, non-success status, or decode problems.
    pub async fn team_result(&self, task_id: &str) -> ApiResult<TeamResult> {
        self.get_json(&format!("/api/task/{task_id}/team_result"))
            .await
    }

    /// Detections awaiting manual review for one analysis task
    ///
    /// # Errors
    /// Fails on transport, non-success status, or decode problems.
    pub async fn pending_annotations(&self, task_id: &str) -> ApiResult<Vec<NeedAnnotation>> {
        self.get_json(&format!("/api/task/{task_id}/annotations"))
            .await
    }

    /// Submit a reviewer decision back to the pipeline
    ///
    /// # Errors
    /// Fails on transport or non-success status.
    pub async fn submit_annotation(&self, annotation: &Annotation) -> ApiResult<()> {
        self.send_json(
            reqwest::Method::POST,
            &format!("/api/task/{}/annotations", annotation.task_id),
            annotation,
        )
        .await
    }

    /// Uploaded match videos known to the backend
    ///
    /// # Errors
    /// Fails on transport, non-success status, or decode problems.
    pub async fn videos(&self) -> ApiResult<Vec<UploadVideoItem>> {
        self.get_json("/api/upload/").await
    }

    /// Upload a match video for analysis
    ///
    /// The file extension is checked locally first; the backend answers
    /// with the analysis task it queued for the video.
    ///
    /// # Errors
    /// Fails when the file is not an accepted video type, cannot be read,
    /// or on transport/status/decode problems.
    pub async fn upload_video(&self, path: &Path) -> ApiResult<AnalysisTask> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !is_video_name(&name) {
            return Err(ApiError::UnsupportedFileType { name });
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ApiError::UploadRead {
                path: path.to_path_buf(),
                source,
            })?;

        let endpoint = "/api/upload/";
        let url = self.endpoint(endpoint)?;
        debug!(%endpoint, file = %name, size = bytes.len(), "POST multipart");
        let form = Form::new().part("file", Part::bytes(bytes).file_name(name));
        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|source| ApiError::Network {
                endpoint: endpoint.to_owned(),
                source,
            })?;
        Self::check_status(endpoint, response.status())?;
        response.json().await.map_err(|source| ApiError::Decode {
            endpoint: endpoint.to_owned(),
            source,
        })
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|source| ApiError::EndpointUrl {
                endpoint: path.to_owned(),
                source,
            })
    }

    fn check_status(endpoint: &str, status: reqwest::StatusCode) -> ApiResult<()> {
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                endpoint: endpoint.to_owned(),
                status: status.as_u16(),
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        let url = self.endpoint(endpoint)?;
        debug!(%endpoint, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Network {
                endpoint: endpoint.to_owned(),
                source,
            })?;
        Self::check_status(endpoint, response.status())?;
        response.json().await.map_err(|source| ApiError::Decode {
            endpoint: endpoint.to_owned(),
            source,
        })
    }

    async fn send_json<B: Serialize + Sync>(
        &self,
        method: reqwest::Method,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<()> {
        let url = self.endpoint(endpoint)?;
        debug!(%endpoint, %method, "send json");
        let response = self
            .http
            .request(method, url)
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Network {
                endpoint: endpoint.to_owned(),
                source,
            })?;
        Self::check_status(endpoint, response.status())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn rejects_invalid_base_url() {
        let config = ClientConfig::default().with_base_url("not a url");
        let err = ConsoleClient::new(&config).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn timeouts_come_from_the_supplied_config() {
        let config = ClientConfig {
            base_url: "http://analysis.internal:9000".to_owned(),
            timeout_secs: 3,
            connect_timeout_secs: 1,
        };
        let client = ConsoleClient::new(&config).unwrap();
        // Two clients against different backends coexist; nothing is global.
        let other = ConsoleClient::new(&ClientConfig::default()).unwrap();
        assert_ne!(client.base_url(), other.base_url());
    }

    #[test]
    fn joins_endpoints_onto_the_base() {
        let config = ClientConfig::default().with_base_url("http://analysis.internal:9000");
        let client = ConsoleClient::new(&config).unwrap();
        let url = client.endpoint("/api/player/3/results").unwrap();
        assert_eq!(
            url.as_str(),
            "http://analysis.internal:9000/api/player/3/results"
        );
    }
}
