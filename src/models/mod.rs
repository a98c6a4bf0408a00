// ABOUTME: Typed records for the console backend's JSON API
// ABOUTME: Wire DTOs with boundary coercion plus validated internal records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics

//! Data models for the console backend.
//!
//! The backend grew organically and its JSON is not uniform: per-game
//! result rows travel in `snake_case`, while the player/task/team/annotation
//! records use `camelCase`. Each model pins the convention its endpoint
//! actually emits, so callers never touch raw JSON.

mod annotation;
mod player;
mod results;
mod task;
mod team;
mod video;

pub use annotation::{Annotation, AnnotationAction, AnnotationStatus, BoundingBox, NeedAnnotation};
pub use player::Player;
pub use results::{GameResult, NumberList, PlayerResultDto};
pub use task::{AnalysisTask, TaskStatus};
pub use team::TeamResult;
pub use video::UploadVideoItem;
