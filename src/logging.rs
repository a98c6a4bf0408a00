// ABOUTME: Logging configuration and structured logging setup for the console client
// ABOUTME: EnvFilter-driven levels with compact or JSON output formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics

use std::env;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable selecting the log output format (`compact` or `json`)
pub const ENV_LOG_FORMAT: &str = "MATCHLENS_LOG_FORMAT";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line output (default)
    #[default]
    Compact,
    /// Structured JSON output for log collectors
    Json,
}

impl LogFormat {
    /// Resolve the format from the environment, defaulting to compact
    #[must_use]
    pub fn from_env() -> Self {
        match env::var(ENV_LOG_FORMAT).as_deref() {
            Ok("json") => Self::Json,
            _ => Self::Compact,
        }
    }
}

/// Initialize the global tracing subscriber
///
/// Log levels come from `RUST_LOG` with an `info` default; the output
/// format from [`ENV_LOG_FORMAT`]. Calling this more than once is a no-op,
/// so tests and the CLI can both call it unconditionally.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt().with_env_filter(filter).with_target(false);
    let result = match LogFormat::from_env() {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    // Already-initialized is the only failure mode and is fine to ignore.
    drop(result);
}
