// ABOUTME: Typed client core for the Matchlens sports-video analytics console
// ABOUTME: Models, REST client, stats aggregation, route tables, and upload helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics

#![deny(unsafe_code)]

//! # Matchlens
//!
//! Client-side core for the Matchlens floorball video-analytics admin
//! console. The backend runs the video pipeline and exposes precomputed
//! per-game analytics over REST; this crate supplies everything the console
//! needs around that API short of rendering:
//!
//! - **models**: typed wire records with optional-to-zero coercion at the
//!   JSON boundary
//! - **stats**: per-athlete summary aggregation across game results
//! - **client**: thin async wrappers over the backend endpoints
//! - **routes**: declarative navigation metadata consumed by the router guard
//! - **upload**: file-type checks for the video upload flow
//! - **dashboard**: card-list projection for the data-center view

/// Structured error types shared across the client
pub mod errors;

/// Environment-driven client configuration
pub mod config;

/// Logging setup with structured output
pub mod logging;

/// Typed records for the backend's JSON API
pub mod models;

/// Per-athlete statistics aggregation over game results
pub mod stats;

/// Async REST client for the console backend
pub mod client;

/// Declarative route tables for the console navigation
pub mod routes;

/// File-type helpers for the upload flow
pub mod upload;

/// Card-list projection for the data-center dashboard
pub mod dashboard;

pub use client::ConsoleClient;
pub use errors::{ApiError, ApiResult};
pub use models::{GameResult, PlayerResultDto};
pub use stats::StatsSummary;
