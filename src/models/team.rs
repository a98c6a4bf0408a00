// ABOUTME: Team-level analytics record for one analyzed match
// ABOUTME: Formation, space, and attack/defense transition metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics

use serde::{Deserialize, Serialize};

/// Team-level analytics output for one analysis task
///
/// Produced by the same pipeline run as the per-athlete rows; the console
/// renders these on the match dashboard next to the team heat map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResult {
    /// Row id
    pub id: i64,
    /// Analysis task this row belongs to
    pub task_id: String,
    /// Formation stability score
    #[serde(default)]
    pub stability: f64,
    /// Server-side path to the team heat map image
    #[serde(default)]
    pub heat_map_path: String,
    /// Controlled space area (square meters)
    #[serde(default)]
    pub space_area: f64,
    /// Formation change rate over the match
    #[serde(default)]
    pub formation_change_rate: f64,
    /// Number of attack-to-defense transitions
    #[serde(default)]
    pub attack_to_defense_times: u32,
    /// Attack-to-defense transition rate
    #[serde(default)]
    pub attack_to_defense_rate: f64,
}
