// ABOUTME: Async REST client for the console backend
// ABOUTME: Thin typed endpoint wrappers over a pooled HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics

mod api;

pub use api::ConsoleClient;
