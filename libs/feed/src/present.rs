//! Pure presentation helpers
//!
//! Side-effect-free functions the screens use: relative-time rendering for
//! feed entries, the ownership predicate gating the delete affordance, and
//! the difficulty color tokens.

use chrono::{DateTime, Utc};

/// Render a raw timestamp string relative to `now`
///
/// A missing or unparseable timestamp yields "Unknown date".
pub fn relative_time(raw: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(raw) = raw else {
        return "Unknown date".to_string();
    };

    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => format_relative(timestamp.with_timezone(&Utc), now),
        Err(_) => "Unknown date".to_string(),
    }
}

/// Render an already-parsed timestamp relative to `now`
///
/// Buckets: under a minute (and any future timestamp) is "Just now", then
/// minutes, hours, days, weeks (days/7), months (days/30), years
/// (days/365), all floored. Singular wording when the value is exactly 1.
/// The month and year divisors floor to zero just past their bucket
/// boundaries (28-29 days, 360-364 days); those render as 1, never as
/// "0 months ago".
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds();
    if seconds < 60 {
        return "Just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return counted(minutes, "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return counted(hours, "hour");
    }

    let days = hours / 24;
    if days < 7 {
        return counted(days, "day");
    }

    let weeks = days / 7;
    if weeks < 4 {
        return counted(weeks, "week");
    }

    let months = days / 30;
    if months < 12 {
        return counted(months.max(1), "month");
    }

    counted((days / 365).max(1), "year")
}

fn counted(value: i64, unit: &str) -> String {
    if value == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", value, unit)
    }
}

/// Whether the viewer owns a recipe; exact case-sensitive email equality
///
/// Display-only: this gates the delete affordance on the client, the
/// server does not re-check it.
pub fn is_owner(viewer_email: &str, author_email: &str) -> bool {
    viewer_email == author_email
}

/// Color token for a difficulty badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyColor {
    Green,
    Orange,
    Red,
}

impl DifficultyColor {
    pub fn hex(&self) -> &'static str {
        match self {
            DifficultyColor::Green => "#4CAF50",
            DifficultyColor::Orange => "#ff6b35",
            DifficultyColor::Red => "#F44336",
        }
    }
}

/// Map a difficulty label to its badge color; unknown labels get the
/// orange default rather than an error
pub fn difficulty_color(difficulty: &str) -> DifficultyColor {
    match difficulty.to_lowercase().as_str() {
        "easy" => DifficultyColor::Green,
        "medium" => DifficultyColor::Orange,
        "hard" => DifficultyColor::Red,
        _ => DifficultyColor::Orange,
    }
}
