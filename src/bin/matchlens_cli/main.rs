// ABOUTME: Matchlens CLI - command-line access to the analytics console backend
// ABOUTME: Fetches player stats, lists players and tasks, and uploads match videos
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics
//!
//! Usage:
//! ```bash
//! # Aggregate one athlete's summary statistics
//! matchlens-cli stats --player-id 3
//!
//! # List athletes / analysis tasks
//! matchlens-cli players
//! matchlens-cli tasks
//!
//! # Upload a match video for analysis
//! matchlens-cli upload recordings/match_2025_03_01.mp4
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use matchlens::config::ClientConfig;
use matchlens::logging::init_logging;
use matchlens::ConsoleClient;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "matchlens-cli",
    about = "Matchlens console client CLI",
    long_about = "Command-line access to the Matchlens analytics backend: player statistics, data tables, and video upload."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL override (defaults to MATCHLENS_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Aggregate summary statistics for one athlete
    Stats {
        /// Athlete id
        #[arg(long)]
        player_id: i64,
    },

    /// List all athletes
    Players,

    /// List all video analysis tasks
    Tasks,

    /// Upload a match video for analysis
    Upload {
        /// Path of the video file
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    let client = ConsoleClient::new(&config)?;

    match cli.command {
        Command::Stats { player_id } => print_stats(&client, player_id).await,
        Command::Players => print_players(&client).await,
        Command::Tasks => print_tasks(&client).await,
        Command::Upload { file } => upload(&client, file).await,
    }
}

async fn print_stats(client: &ConsoleClient, player_id: i64) -> Result<()> {
    let summary = client.player_summary(player_id).await?;
    println!("Summary for player {player_id}");
    println!("  total distance:          {:.1} m", summary.total_distance);
    println!(
        "  average movement:        {:.1} m/game",
        summary.average_total_movement
    );
    println!(
        "  direction changes:       {} total, {:.1}/game",
        summary.total_direction_changes, summary.average_direction_changes
    );
    println!(
        "  high-intensity time:     {:.1} min total, {:.1} min/game",
        summary.total_high_intensity_time, summary.average_high_intensity_time
    );
    println!(
        "  peak speed:              {:.2} m/s (avg peak {:.2} m/s)",
        summary.max_speed, summary.average_max_speed
    );
    Ok(())
}

async fn print_players(client: &ConsoleClient) -> Result<()> {
    let players = client.players().await?;
    info!(count = players.len(), "fetched players");
    for player in players {
        println!(
            "{:>6}  {:<24} {:<12} {} video(s)",
            player.player_id,
            player.player_name,
            player.player_role,
            player.video_uuids.len()
        );
    }
    Ok(())
}

async fn print_tasks(client: &ConsoleClient) -> Result<()> {
    let tasks = client.tasks().await?;
    info!(count = tasks.len(), "fetched tasks");
    for task in tasks {
        println!(
            "{:<36} {:>6.1}%  {:?}  {}",
            task.task_id, task.progress, task.status, task.video_path
        );
    }
    Ok(())
}

async fn upload(client: &ConsoleClient, file: PathBuf) -> Result<()> {
    let task = client.upload_video(&file).await?;
    println!(
        "queued analysis task {} for {}",
        task.task_id, task.video_path
    );
    Ok(())
}
