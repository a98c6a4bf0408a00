// ABOUTME: Structured error types for backend API calls and upload handling
// ABOUTME: Defines ApiError with per-variant context and the ApiResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics

use std::path::PathBuf;

/// Result alias used throughout the client
pub type ApiResult<T> = Result<T, ApiError>;

/// Error types for console backend operations
///
/// Every variant carries the context needed to report the failure without
/// re-deriving it at the call site. Aggregation itself is total and never
/// produces an error; everything here originates at the HTTP boundary or
/// the local filesystem during upload.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Request could not be sent or the connection failed mid-flight
    #[error("Request to '{endpoint}' failed")]
    Network {
        /// Endpoint path that was being called
        endpoint: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-success status code
    #[error("Backend returned status {status} for '{endpoint}'")]
    Status {
        /// Endpoint path that was being called
        endpoint: String,
        /// HTTP status code received
        status: u16,
    },

    /// Response body did not match the expected record shape
    #[error("Failed to decode response from '{endpoint}'")]
    Decode {
        /// Endpoint path that was being called
        endpoint: String,
        /// Underlying deserialization error
        #[source]
        source: reqwest::Error,
    },

    /// Underlying HTTP client could not be constructed
    #[error("Failed to build the HTTP client")]
    HttpClient {
        /// Underlying builder error
        #[source]
        source: reqwest::Error,
    },

    /// Configured base URL is not a valid URL
    #[error("Invalid backend base URL '{url}'")]
    InvalidBaseUrl {
        /// The offending URL string
        url: String,
        /// Underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// Joining an endpoint path onto the base URL failed
    #[error("Cannot build endpoint URL for '{endpoint}'")]
    EndpointUrl {
        /// Endpoint path that could not be joined
        endpoint: String,
        /// Underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// Local file could not be read for upload
    #[error("Cannot read upload file {path:?}")]
    UploadRead {
        /// Path of the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File extension is not accepted for upload
    #[error("File '{name}' is not an accepted video type")]
    UnsupportedFileType {
        /// Name of the rejected file
        name: String,
    },
}
