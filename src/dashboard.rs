// ABOUTME: Card-list projection for the data-center dashboard
// ABOUTME: Maps athlete profiles to display cards with analysis progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics

use serde::Serialize;
use tracing::warn;

use crate::client::ConsoleClient;
use crate::models::Player;

/// Accent color used for every player card
pub const CARD_COLOR: &str = "#1890ff";

/// Analysis progress credited per linked video (percent)
const PROGRESS_PER_VIDEO: u32 = 20;

/// One card in the data-center player grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerCard {
    /// Athlete id, used for dashboard navigation
    pub id: i64,
    /// Card title (athlete name)
    pub title: String,
    /// Card description (athlete role)
    pub description: String,
    /// Photo URL; backend paths are Windows-style, so backslashes are
    /// flattened before prefixing the file scheme
    pub icon: String,
    /// Accent color
    pub color: &'static str,
    /// Coarse analysis progress: 20% per linked video, capped at 100
    pub progress: u32,
}

impl From<&Player> for PlayerCard {
    fn from(player: &Player) -> Self {
        let photo = player.player_photo.replace('\\', "/");
        let videos = u32::try_from(player.video_uuids.len()).unwrap_or(u32::MAX);
        Self {
            id: player.player_id,
            title: player.player_name.clone(),
            description: player.player_role.clone(),
            icon: format!("file:///{photo}"),
            color: CARD_COLOR,
            progress: videos.saturating_mul(PROGRESS_PER_VIDEO).min(100),
        }
    }
}

impl ConsoleClient {
    /// Fetch all athletes and project them into dashboard cards
    ///
    /// The card grid renders empty rather than erroring when the backend
    /// is unreachable, so a fetch failure is logged and swallowed here.
    pub async fn player_cards(&self) -> Vec<PlayerCard> {
        match self.players().await {
            Ok(players) => players.iter().map(PlayerCard::from).collect(),
            Err(error) => {
                warn!(%error, "failed to fetch player data for the card grid");
                Vec::new()
            }
        }
    }
}
