// ABOUTME: Athlete profile record as served by the playerdata endpoints
// ABOUTME: Identity, role, photo path, and linked analysis videos
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics

use serde::{Deserialize, Serialize};

/// An athlete managed in the console
///
/// Served by the `playerdata` endpoints in `camelCase`. `video_uuids`
/// links the athlete to the uploaded match videos that have been analyzed
/// for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique athlete id
    pub player_id: i64,
    /// Display name
    pub player_name: String,
    /// Server-side path to the athlete's photo
    #[serde(default)]
    pub player_photo: String,
    /// Position/role on the team (free text)
    #[serde(default)]
    pub player_role: String,
    /// Ids of analyzed videos linked to this athlete
    #[serde(default)]
    pub video_uuids: Vec<String>,
}
