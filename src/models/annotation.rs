// ABOUTME: Track-annotation records for the manual review workflow
// ABOUTME: Bounding boxes, pending review items, and reviewer decisions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics

use serde::{Deserialize, Serialize};

/// Top-left/width/height bounding box in frame pixel coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Box width
    pub width: f64,
    /// Box height
    pub height: f64,
}

/// Decision a reviewer took on an ambiguous track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationAction {
    /// Merge the track into an existing one
    Assign,
    /// Keep it as a new track
    KeepNew,
    /// Discard the detection
    Ignore,
}

/// Review state of a pending annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationStatus {
    /// Waiting for a reviewer
    Pending,
    /// Reviewer has decided
    Completed,
}

/// A detection the pipeline could not confidently track, awaiting review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeedAnnotation {
    /// Annotation id
    pub annotation_id: i64,
    /// Analysis task the frame belongs to
    pub task_id: String,
    /// Frame index within the video
    pub frame_id: u64,
    /// Provisional track id of the detection
    pub track_id: i64,
    /// Detection bounding box
    pub tlwh: BoundingBox,
    /// Server-side path to the full frame image
    pub frame_path: String,
    /// Server-side path to the cropped target image
    pub target_image_path: String,
    /// Current review state
    pub status: AnnotationStatus,
}

/// A completed reviewer decision submitted back to the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    /// Annotation id
    pub annotation_id: i64,
    /// Analysis task the frame belongs to
    pub task_id: String,
    /// Pipeline-assigned correlation key
    pub key: String,
    /// Frame index within the video
    pub frame_id: u64,
    /// Provisional track id of the detection
    pub track_id: i64,
    /// Detection bounding box
    pub tlwh: BoundingBox,
    /// Server-side path to the full frame image
    pub frame_path: String,
    /// Server-side path to the cropped target image
    pub target_image_path: String,
    /// Reviewer decision
    pub action: AnnotationAction,
    /// Target track when the decision is [`AnnotationAction::Assign`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_track_id: Option<i64>,
    /// Player role tagged by the reviewer, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
