// ABOUTME: Per-athlete summary statistics aggregated across game results
// ABOUTME: Pure recompute-on-demand projection with defined empty-input behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics

//! Cross-game summary statistics for one athlete.
//!
//! [`StatsSummary::aggregate`] is a pure projection over an ordered slice
//! of [`GameResult`] rows: no I/O, no shared state, and no error cases.
//! Callers recompute it whenever the underlying result set changes; there
//! is no incremental update path.

use serde::Serialize;

use crate::models::GameResult;

/// Derived summary metrics across all of an athlete's analyzed games
///
/// Every averaged metric is defined as `0` for the empty input, and the
/// speed metrics only consider games that produced at least one speed
/// sample, so aggregation is total over any well-typed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatsSummary {
    /// Sum of movement across all games (meters)
    pub total_distance: f64,
    /// Mean movement per game (meters)
    pub average_total_movement: f64,
    /// Sum of direction changes across all games
    pub total_direction_changes: u64,
    /// Mean direction changes per game
    pub average_direction_changes: f64,
    /// Sum of high-intensity running time across all games (minutes)
    pub total_high_intensity_time: f64,
    /// Mean high-intensity running time per game (minutes)
    pub average_high_intensity_time: f64,
    /// Highest speed sample seen in any game (m/s)
    pub max_speed: f64,
    /// Mean of per-game peak speeds, over games with speed samples (m/s)
    pub average_max_speed: f64,
}

impl StatsSummary {
    /// Aggregate summary statistics over an ordered sequence of games
    ///
    /// `average_max_speed` divides by the number of *qualifying* games
    /// (non-empty speed list), not the total game count: a game whose
    /// speed track dropped out should not drag the average down.
    #[must_use]
    pub fn aggregate(results: &[GameResult]) -> Self {
        let count = results.len();

        let total_distance: f64 = results.iter().map(|game| game.total_movement).sum();
        let total_direction_changes: u64 = results
            .iter()
            .map(|game| u64::from(game.change_direction_times))
            .sum();
        let total_high_intensity_secs: f64 = results
            .iter()
            .map(|game| game.high_intensity_running_time)
            .sum();
        let total_high_intensity_time = total_high_intensity_secs / 60.0;

        // Per-game peak speeds; games without samples do not qualify.
        let peaks: Vec<f64> = results
            .iter()
            .filter_map(|game| game.speed_samples.iter().copied().reduce(f64::max))
            .collect();
        let max_speed = peaks.iter().copied().fold(0.0, f64::max);
        let average_max_speed = if peaks.is_empty() {
            0.0
        } else {
            peaks.iter().sum::<f64>() / peaks.len() as f64
        };

        let per_game = |total: f64| if count == 0 { 0.0 } else { total / count as f64 };

        Self {
            total_distance,
            average_total_movement: per_game(total_distance),
            total_direction_changes,
            average_direction_changes: per_game(total_direction_changes as f64),
            total_high_intensity_time,
            average_high_intensity_time: per_game(total_high_intensity_time),
            max_speed,
            average_max_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)] // exact-representable expected values

    use super::*;

    fn game(
        movement: f64,
        direction_changes: u32,
        high_intensity_secs: f64,
        speeds: &[f64],
    ) -> GameResult {
        GameResult {
            total_movement: movement,
            change_direction_times: direction_changes,
            high_intensity_running_time: high_intensity_secs,
            speed_samples: speeds.to_vec(),
        }
    }

    #[test]
    fn empty_input_yields_all_zero_without_faulting() {
        let summary = StatsSummary::aggregate(&[]);
        assert_eq!(summary, StatsSummary::default());
    }

    #[test]
    fn totals_are_plain_sums() {
        let games = [
            game(100.0, 3, 120.0, &[5.0, 7.0, 6.0]),
            game(200.0, 5, 60.0, &[]),
        ];
        let summary = StatsSummary::aggregate(&games);
        assert_eq!(summary.total_distance, 300.0);
        assert_eq!(summary.total_direction_changes, 8);
    }

    #[test]
    fn high_intensity_total_converts_seconds_to_minutes() {
        let games = [game(0.0, 0, 120.0, &[]), game(0.0, 0, 60.0, &[])];
        let summary = StatsSummary::aggregate(&games);
        assert_eq!(summary.total_high_intensity_time, 3.0);
        assert_eq!(summary.average_high_intensity_time, 1.5);
    }

    #[test]
    fn max_speed_is_the_global_sample_maximum() {
        let games = [
            game(0.0, 0, 0.0, &[4.0, 9.5, 3.0]),
            game(0.0, 0, 0.0, &[8.0]),
            game(0.0, 0, 0.0, &[]),
        ];
        let summary = StatsSummary::aggregate(&games);
        assert_eq!(summary.max_speed, 9.5);
    }

    #[test]
    fn average_max_speed_counts_only_games_with_samples() {
        let games = [
            game(0.0, 0, 0.0, &[6.0, 10.0]),
            game(0.0, 0, 0.0, &[]),
            game(0.0, 0, 0.0, &[8.0]),
        ];
        let summary = StatsSummary::aggregate(&games);
        // (10 + 8) / 2 qualifying games, not / 3.
        assert_eq!(summary.average_max_speed, 9.0);
    }

    #[test]
    fn all_empty_speed_lists_yield_zero_speed_metrics() {
        let games = [game(50.0, 1, 30.0, &[]), game(60.0, 2, 45.0, &[])];
        let summary = StatsSummary::aggregate(&games);
        assert_eq!(summary.max_speed, 0.0);
        assert_eq!(summary.average_max_speed, 0.0);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let games = [
            game(123.4, 7, 310.0, &[4.2, 5.8]),
            game(98.7, 2, 45.5, &[6.1]),
        ];
        let first = StatsSummary::aggregate(&games);
        let second = StatsSummary::aggregate(&games);
        assert_eq!(first, second);
    }

    #[test]
    fn worked_example_from_the_dashboard() {
        let games = [
            game(100.0, 3, 120.0, &[5.0, 7.0, 6.0]),
            game(200.0, 5, 60.0, &[]),
        ];
        let summary = StatsSummary::aggregate(&games);
        assert_eq!(summary.total_distance, 300.0);
        assert_eq!(summary.average_total_movement, 150.0);
        assert_eq!(summary.total_direction_changes, 8);
        assert_eq!(summary.average_direction_changes, 4.0);
        assert_eq!(summary.total_high_intensity_time, 3.0);
        assert_eq!(summary.average_high_intensity_time, 1.5);
        assert_eq!(summary.max_speed, 7.0);
        assert_eq!(summary.average_max_speed, 7.0);
    }
}
