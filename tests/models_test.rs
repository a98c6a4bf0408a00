// ABOUTME: Integration tests for the camelCase console API models
// ABOUTME: Players, tasks, team results, annotations, and uploaded videos
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use matchlens::models::{
    AnalysisTask, Annotation, AnnotationAction, NeedAnnotation, Player, TaskStatus, TeamResult,
    UploadVideoItem,
};

#[test]
fn player_decodes_camel_case_payload() {
    let player: Player = serde_json::from_str(
        r#"{
            "playerId": 12,
            "playerName": "Maja",
            "playerPhoto": "photos\\maja.png",
            "playerRole": "defender",
            "videoUuids": ["a1", "b2"]
        }"#,
    )
    .unwrap();
    assert_eq!(player.player_id, 12);
    assert_eq!(player.video_uuids.len(), 2);
}

#[test]
fn player_tolerates_missing_optional_fields() {
    let player: Player =
        serde_json::from_str(r#"{"playerId": 1, "playerName": "Elsa"}"#).unwrap();
    assert!(player.player_photo.is_empty());
    assert!(player.video_uuids.is_empty());
}

#[test]
fn task_status_decodes_and_unknowns_fall_back() {
    let task: AnalysisTask = serde_json::from_str(
        r#"{
            "taskId": "t-9",
            "videoPath": "/videos/t9.mp4",
            "status": "processing",
            "progress": 41.5,
            "currentFrame": 1037,
            "resultPath": null
        }"#,
    )
    .unwrap();
    assert_eq!(task.status, TaskStatus::Processing);
    assert!(!task.is_finished());
    assert_eq!(task.current_frame, 1037);
}

#[test]
fn team_result_decodes_all_metrics() {
    let team: TeamResult = serde_json::from_str(
        r#"{
            "id": 4,
            "taskId": "t-9",
            "stability": 0.82,
            "heatMapPath": "/maps/t9.png",
            "spaceArea": 118.4,
            "formationChangeRate": 0.31,
            "attackToDefenseTimes": 14,
            "attackToDefenseRate": 0.47
        }"#,
    )
    .unwrap();
    assert_eq!(team.attack_to_defense_times, 14);
    assert_eq!(team.stability, 0.82);
}

#[test]
fn pending_annotation_decodes_bounding_box() {
    let pending: NeedAnnotation = serde_json::from_str(
        r#"{
            "annotationId": 77,
            "taskId": "t-9",
            "frameId": 310,
            "trackId": 6,
            "tlwh": {"x": 10.0, "y": 22.5, "width": 40.0, "height": 90.0},
            "framePath": "/frames/310.jpg",
            "targetImagePath": "/crops/310_6.jpg",
            "status": "pending"
        }"#,
    )
    .unwrap();
    assert_eq!(pending.tlwh.width, 40.0);
}

#[test]
fn annotation_action_serializes_snake_case() {
    let json = serde_json::to_value(AnnotationAction::KeepNew).unwrap();
    assert_eq!(json, serde_json::json!("keep_new"));
}

#[test]
fn annotation_round_trips_through_json() {
    let annotation = Annotation {
        annotation_id: 5,
        task_id: "t-2".to_owned(),
        key: "k-5".to_owned(),
        frame_id: 12,
        track_id: 3,
        tlwh: matchlens::models::BoundingBox {
            x: 1.0,
            y: 2.0,
            width: 3.0,
            height: 4.0,
        },
        frame_path: "/frames/12.jpg".to_owned(),
        target_image_path: "/crops/12_3.jpg".to_owned(),
        action: AnnotationAction::Assign,
        assigned_track_id: Some(9),
        role: None,
    };
    let json = serde_json::to_string(&annotation).unwrap();
    // Optional role is omitted entirely rather than sent as null.
    assert!(!json.contains("role"));
    let back: Annotation = serde_json::from_str(&json).unwrap();
    assert_eq!(back, annotation);
}

#[test]
fn upload_video_item_parses_timestamps() {
    let item: UploadVideoItem = serde_json::from_str(
        r#"{
            "id": "vid-1",
            "beginTime": "2025-03-01T18:00:00Z",
            "endTime": "2025-03-01T19:30:00Z",
            "address": "Solna rink 2",
            "name": "league round 7",
            "no": 1,
            "status": 2
        }"#,
    )
    .unwrap();
    assert_eq!((item.end_time - item.begin_time).num_minutes(), 90);
}
