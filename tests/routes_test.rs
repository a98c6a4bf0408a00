// ABOUTME: Integration tests for the declarative route tables
// ABOUTME: Ordering, guard flags, and JSON shape consumed by the frontend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use matchlens::routes::{find_route, requires_auth, route_table, DATA_CENTER};

#[test]
fn every_route_name_is_unique() {
    let mut names = Vec::new();
    for route in route_table() {
        names.push(route.name);
        for child in route.children {
            names.push(child.name);
        }
    }
    let mut deduped = names.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(names.len(), deduped.len());
}

#[test]
fn data_center_children_are_the_two_tables() {
    let children: Vec<&str> = DATA_CENTER.children.iter().map(|c| c.name).collect();
    assert_eq!(children, vec!["playersList", "taskList"]);
}

#[test]
fn guard_flags_survive_serialization() {
    let json = serde_json::to_value(route_table()).unwrap();
    let dashboard = json
        .as_array()
        .unwrap()
        .iter()
        .find(|route| route["name"] == "PlayerManagement")
        .unwrap();
    assert_eq!(dashboard["meta"]["ignore_auth"], serde_json::json!(true));
    assert_eq!(dashboard["meta"]["hide_menu"], serde_json::json!(true));
}

#[test]
fn dashboard_route_skips_the_auth_guard() {
    let route = find_route("PlayerDashboard").unwrap();
    assert!(!requires_auth(route));
    let analysis = find_route("parsevideo").unwrap();
    assert!(requires_auth(analysis));
}
