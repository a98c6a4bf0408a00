// ABOUTME: Uploaded match video records listed in the upload view
// ABOUTME: Recording window, venue, and processing status per video
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One uploaded match video as listed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadVideoItem {
    /// Video id
    pub id: String,
    /// Recording start time
    pub begin_time: DateTime<Utc>,
    /// Recording end time
    pub end_time: DateTime<Utc>,
    /// Venue / rink address
    #[serde(default)]
    pub address: String,
    /// Display name of the recording
    pub name: String,
    /// Sequence number within the upload batch
    #[serde(default)]
    pub no: u32,
    /// Backend processing status code
    #[serde(default)]
    pub status: i32,
}
