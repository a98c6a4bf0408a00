// ABOUTME: File-type helpers for the video upload flow
// ABOUTME: Extension-based checks for accepted image and video formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics

use std::sync::OnceLock;

use regex::Regex;

/// Image extensions the console accepts
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Video extensions the analysis pipeline accepts
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "rmvb", "flv", "mkv"];

static IMAGE_NAME_RE: OnceLock<Option<Regex>> = OnceLock::new();
static VIDEO_NAME_RE: OnceLock<Option<Regex>> = OnceLock::new();

/// Whether a file name carries an accepted image extension
#[must_use]
pub fn is_image_name(name: &str) -> bool {
    IMAGE_NAME_RE
        .get_or_init(|| extension_regex(IMAGE_EXTENSIONS))
        .as_ref()
        .is_some_and(|re| re.is_match(name))
}

/// Whether a file name carries an accepted video extension
#[must_use]
pub fn is_video_name(name: &str) -> bool {
    VIDEO_NAME_RE
        .get_or_init(|| extension_regex(VIDEO_EXTENSIONS))
        .as_ref()
        .is_some_and(|re| re.is_match(name))
}

/// Check a file name against a caller-supplied list of extensions
///
/// An empty `accepts` list falls back to the image extension set, matching
/// the upload widget's historical behavior.
#[must_use]
pub fn check_file_type(name: &str, accepts: &[&str]) -> bool {
    if accepts.is_empty() {
        return is_image_name(name);
    }
    extension_regex(accepts).is_some_and(|re| re.is_match(name))
}

/// Build a case-insensitive `\.(ext1|ext2|...)$` matcher
///
/// Extensions are escaped, so the pattern itself cannot fail to compile;
/// `None` is only a guard against pathological input and reads as
/// "matches nothing".
fn extension_regex(extensions: &[&str]) -> Option<Regex> {
    let alternatives = extensions
        .iter()
        .map(|ext| regex::escape(ext))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\.({alternatives})$")).ok()
}
