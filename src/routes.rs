// ABOUTME: Declarative route tables for the console navigation
// ABOUTME: Pure metadata consumed by the external router guard, no navigation logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics

//! Navigation route declarations.
//!
//! These tables carry only metadata: titles, icons, menu ordering, and the
//! flags the router guard reads (`ignore_auth`, `hide_menu`). The guard and
//! the actual view components live in the frontend; nothing here navigates.

use serde::Serialize;

/// Roles referenced by route metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access
    Super,
    /// Regular console operator
    Admin,
}

/// Metadata flags attached to every route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    /// Menu display title
    pub title: &'static str,
    /// Icon identifier, if the menu shows one
    pub icon: Option<&'static str>,
    /// Menu ordering key (ascending)
    pub order_no: i32,
    /// Router guard skips the auth check for this route
    pub ignore_auth: bool,
    /// Route exists but is hidden from the menu
    pub hide_menu: bool,
    /// Children are reachable but not listed under the menu entry
    pub hide_children_in_menu: bool,
    /// Roles allowed to see the route; empty means everyone
    pub roles: &'static [Role],
}

impl RouteMeta {
    const fn hidden_leaf(title: &'static str, ignore_auth: bool) -> Self {
        Self {
            title,
            icon: None,
            order_no: 0,
            ignore_auth,
            hide_menu: true,
            hide_children_in_menu: false,
            roles: &[],
        }
    }
}

/// One navigation route with its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Route path (may contain `:param` segments)
    pub path: &'static str,
    /// Unique route name
    pub name: &'static str,
    /// Route to redirect to when hit directly
    pub redirect: Option<&'static str>,
    /// Display and guard metadata
    pub meta: RouteMeta,
    /// Child routes
    pub children: &'static [Route],
}

/// Video analysis entry (single hidden child page)
pub static ANALYSIS: Route = Route {
    path: "/parsevideo",
    name: "parsevideo",
    redirect: Some("/parsevideoPage"),
    meta: RouteMeta {
        title: "智能分析",
        icon: Some("simple-icons:aboutdotme"),
        order_no: 0,
        ignore_auth: false,
        hide_menu: false,
        hide_children_in_menu: true,
        roles: &[],
    },
    children: &[Route {
        path: "/parsevideoPage",
        name: "parsevideoPage",
        redirect: None,
        meta: RouteMeta::hidden_leaf("智能分析", false),
        children: &[],
    }],
};

/// Per-athlete performance dashboard, reached from the data tables
pub static PLAYER_DASHBOARD: Route = Route {
    path: "/player",
    name: "PlayerManagement",
    redirect: Some("/player/dashboard"),
    meta: RouteMeta {
        title: "运动员管理",
        icon: Some("ion:person-outline"),
        order_no: 20,
        ignore_auth: true,
        hide_menu: true,
        hide_children_in_menu: true,
        roles: &[],
    },
    children: &[Route {
        path: "dashboard/:playerId",
        name: "PlayerDashboard",
        redirect: None,
        meta: RouteMeta::hidden_leaf("运动员表现分析", true),
        children: &[],
    }],
};

/// Data center with the player and task tables
pub static DATA_CENTER: Route = Route {
    path: "/players",
    name: "players",
    redirect: Some("/playersList"),
    meta: RouteMeta {
        title: "数据中心",
        icon: Some("ant-design:database-outlined"),
        order_no: 0,
        ignore_auth: true,
        hide_menu: false,
        hide_children_in_menu: false,
        roles: &[],
    },
    children: &[
        Route {
            path: "/playersList",
            name: "playersList",
            redirect: None,
            meta: RouteMeta {
                title: "队员数据",
                icon: Some("ion:people-circle-sharp"),
                order_no: 0,
                ignore_auth: true,
                hide_menu: false,
                hide_children_in_menu: false,
                roles: &[],
            },
            children: &[],
        },
        Route {
            path: "/taskList",
            name: "taskList",
            redirect: None,
            meta: RouteMeta {
                title: "历史赛事",
                icon: Some("ion:trophy-sharp"),
                order_no: 0,
                ignore_auth: true,
                hide_menu: false,
                hide_children_in_menu: false,
                roles: &[],
            },
            children: &[],
        },
    ],
};

/// All top-level route modules, sorted by `order_no` (stable for ties)
#[must_use]
pub fn route_table() -> Vec<&'static Route> {
    let mut table = vec![&ANALYSIS, &DATA_CENTER, &PLAYER_DASHBOARD];
    table.sort_by_key(|route| route.meta.order_no);
    table
}

/// Look a route up by its unique name, searching children too
#[must_use]
pub fn find_route(name: &str) -> Option<&'static Route> {
    fn search(routes: &'static [Route], name: &str) -> Option<&'static Route> {
        for route in routes {
            if route.name == name {
                return Some(route);
            }
            if let Some(found) = search(route.children, name) {
                return Some(found);
            }
        }
        None
    }

    for route in route_table() {
        if route.name == name {
            return Some(route);
        }
        if let Some(found) = search(route.children, name) {
            return Some(found);
        }
    }
    None
}

/// Whether the router guard must authenticate before entering this route
#[must_use]
pub fn requires_auth(route: &Route) -> bool {
    !route.meta.ignore_auth
}
