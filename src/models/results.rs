// ABOUTME: Per-game analytics result records for one athlete
// ABOUTME: Wire DTO with lenient numeric coercion and the validated GameResult record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics

use serde::{Deserialize, Deserializer, Serialize};

/// One analytics result row as the backend serializes it
///
/// Travels in `snake_case`. Numeric fields may be absent, `null`, or (from
/// older pipeline versions) stringified; all of those decode rather than
/// fault and coerce to zero when converted into a [`GameResult`]. The list
/// fields historically arrived either as a JSON array or as a JSON-encoded
/// string containing one; [`NumberList`] accepts both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerResultDto {
    /// Row id
    #[serde(default)]
    pub id: Option<i64>,
    /// Athlete this row belongs to
    #[serde(default)]
    pub player_id: Option<i64>,
    /// Analysis task (match) that produced this row
    #[serde(default)]
    pub task_id: Option<String>,
    /// Server-side path to the rendered movement track image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_path: Option<String>,
    /// Total movement over the game (meters)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_movement: Option<f64>,
    /// Number of direction changes over the game
    #[serde(default, deserialize_with = "lenient_u32")]
    pub change_direction_times: Option<u32>,
    /// Time spent in high-intensity running (seconds)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub high_intensity_running_time: Option<f64>,
    /// Instantaneous speed samples (m/s)
    #[serde(default)]
    pub speed_list: Option<NumberList>,
    /// Instantaneous acceleration samples (m/s²)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceleration_list: Option<NumberList>,
    /// Server-side path to the rendered heat map image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heat_map_path: Option<String>,
    /// Accumulated turning time (seconds)
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub turn_time: Option<f64>,
}

/// A numeric sample list that the backend emits in two shapes
///
/// Current pipeline versions send a plain JSON array; older rows carry the
/// array JSON-encoded inside a string. Decoding is untagged so both forms
/// land here; [`NumberList::into_samples`] flattens them, treating a
/// malformed encoded string as empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberList {
    /// Plain array of samples
    Samples(Vec<f64>),
    /// JSON-encoded array inside a string
    Encoded(String),
}

impl NumberList {
    /// Flatten into a plain sample vector
    ///
    /// A string that does not contain a valid JSON number array yields an
    /// empty vector, mirroring the missing-numeric-to-zero rule.
    #[must_use]
    pub fn into_samples(self) -> Vec<f64> {
        match self {
            Self::Samples(samples) => samples,
            Self::Encoded(raw) => serde_json::from_str(&raw).unwrap_or_default(),
        }
    }
}

/// Validated per-game record consumed by the stats aggregator
///
/// The boundary between untrusted external JSON and this record is
/// [`From<PlayerResultDto>`]: renames are applied, absent numerics become
/// zero, and an absent or malformed speed list becomes empty. Aggregation
/// never sees an `Option`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameResult {
    /// Total movement over the game (meters, >= 0)
    pub total_movement: f64,
    /// Number of direction changes over the game
    pub change_direction_times: u32,
    /// Time spent in high-intensity running (seconds, >= 0)
    pub high_intensity_running_time: f64,
    /// Instantaneous speed samples (m/s), possibly empty
    pub speed_samples: Vec<f64>,
}

impl From<PlayerResultDto> for GameResult {
    fn from(dto: PlayerResultDto) -> Self {
        Self {
            total_movement: dto.total_movement.unwrap_or_default(),
            change_direction_times: dto.change_direction_times.unwrap_or_default(),
            high_intensity_running_time: dto.high_intensity_running_time.unwrap_or_default(),
            speed_samples: dto.speed_list.map(NumberList::into_samples).unwrap_or_default(),
        }
    }
}

/// Decode a numeric field leniently: numbers pass through, numeric strings
/// parse, anything else (including `null`) becomes `None`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        v.as_f64()
            .or_else(|| v.as_str().and_then(|s| s.parse().ok()))
    }))
}

/// Lenient decode for counters; fractional or negative values are rejected
/// to zero rather than truncated into a bogus count.
fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        v.as_u64()
            .or_else(|| v.as_str().and_then(|s| s.parse().ok()))
            .and_then(|n| u32::try_from(n).ok())
    }))
}
