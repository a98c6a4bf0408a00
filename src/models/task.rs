// ABOUTME: Video analysis task records and their processing status
// ABOUTME: Tracks pipeline progress from upload through finished results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics

use serde::{Deserialize, Serialize};

/// Processing state of an analysis task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Pipeline is still working through the video
    Processing,
    /// Results are available
    Completed,
    /// Pipeline gave up on this video
    Failed,
    /// Any status string this client version does not know
    #[serde(other)]
    Unknown,
}

/// One video analysis task as tracked by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisTask {
    /// Task id (also the key for per-game results)
    pub task_id: String,
    /// Server-side path of the source video
    pub video_path: String,
    /// Current processing state
    pub status: TaskStatus,
    /// Progress in percent (0-100)
    #[serde(default)]
    pub progress: f64,
    /// Last frame the pipeline has processed
    #[serde(default)]
    pub current_frame: u64,
    /// Path of the result bundle, present once completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_path: Option<String>,
}

impl AnalysisTask {
    /// Whether results can be fetched for this task
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn unknown_status_string_does_not_fault() {
        let task: AnalysisTask = serde_json::from_str(
            r#"{"taskId": "t-1", "videoPath": "/v/t1.mp4", "status": "requeued"}"#,
        )
        .unwrap();
        assert_eq!(task.status, TaskStatus::Unknown);
        assert!(!task.is_finished());
    }
}
