//! Response normalization for the recipe feed
//!
//! The server's entries are duck-typed: the identifier may arrive as `id`
//! or as the legacy document-store `_id`, and the timestamp as `createdAt`
//! or `created_at`. Normalization resolves both with a fixed fallback
//! order and synthesizes safe defaults so every entry stays renderable and
//! one malformed entry never poisons a load.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Raw feed entry as received from the server; everything optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    /// Primary identifier field
    pub id: Option<serde_json::Value>,
    /// Legacy document-store identifier spelling
    #[serde(rename = "_id")]
    pub legacy_id: Option<serde_json::Value>,
    /// Primary timestamp field
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    /// Legacy timestamp spelling
    #[serde(rename = "created_at")]
    pub legacy_created_at: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "cookingTime")]
    pub cooking_time: Option<i64>,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "authorEmail", default)]
    pub author_email: String,
    #[serde(default)]
    pub likes: i64,
}

/// Normalized local feed record
///
/// `id` is always present and unique within one load; `created_at` is
/// always a valid timestamp, so downstream time formatting never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cooking_time: Option<i64>,
    pub difficulty: String,
    pub category: String,
    pub author: String,
    pub author_email: String,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
}

/// Normalize one raw entry
///
/// Identifier fallback order: `id`, then `_id`, then a synthesized
/// `local-{index}` value. Timestamp fallback order: `createdAt`, then
/// `created_at`, then `now`; an unparseable timestamp also falls back to
/// `now`.
pub fn normalize(raw: RawEntry, index: usize, now: DateTime<Utc>) -> FeedEntry {
    let id = raw
        .id
        .and_then(identifier_text)
        .or_else(|| raw.legacy_id.and_then(identifier_text))
        .unwrap_or_else(|| format!("local-{}", index + 1));

    let created_at = raw
        .created_at
        .or(raw.legacy_created_at)
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|ts| ts.with_timezone(&Utc))
        .unwrap_or(now);

    FeedEntry {
        id,
        title: raw.title,
        description: raw.description,
        cooking_time: raw.cooking_time,
        difficulty: raw.difficulty,
        category: raw.category,
        author: raw.author,
        author_email: raw.author_email,
        likes: raw.likes,
        created_at,
    }
}

/// Normalize a whole listing in order
pub fn normalize_entries(raw: Vec<RawEntry>, now: DateTime<Utc>) -> Vec<FeedEntry> {
    raw.into_iter()
        .enumerate()
        .map(|(index, entry)| normalize(entry, index, now))
        .collect()
}

fn identifier_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_from(json: &str) -> RawEntry {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_id_prefers_primary_field() {
        let raw = raw_from(r#"{"id": "abc", "_id": "legacy"}"#);
        let entry = normalize(raw, 0, Utc::now());
        assert_eq!(entry.id, "abc");
    }

    #[test]
    fn test_id_falls_back_to_legacy_field() {
        let raw = raw_from(r#"{"_id": "64f1c0ffee"}"#);
        let entry = normalize(raw, 0, Utc::now());
        assert_eq!(entry.id, "64f1c0ffee");
    }

    #[test]
    fn test_numeric_id_is_stringified() {
        let raw = raw_from(r#"{"id": 42}"#);
        let entry = normalize(raw, 0, Utc::now());
        assert_eq!(entry.id, "42");
    }

    #[test]
    fn test_missing_id_and_timestamp_still_renderable() {
        let before = Utc::now();
        let raw = raw_from(r#"{"title": "Mystery dish"}"#);
        let entry = normalize(raw, 3, before);
        assert_eq!(entry.id, "local-4");
        assert_eq!(entry.title, "Mystery dish");
        assert!(entry.created_at >= before);
    }

    #[test]
    fn test_synthesized_ids_unique_within_load() {
        let raw = vec![RawEntry::default(), RawEntry::default(), RawEntry::default()];
        let entries = normalize_entries(raw, Utc::now());
        assert_eq!(entries[0].id, "local-1");
        assert_eq!(entries[1].id, "local-2");
        assert_eq!(entries[2].id, "local-3");
    }

    #[test]
    fn test_timestamp_prefers_camel_case_field() {
        let raw = raw_from(
            r#"{"createdAt": "2024-08-20T14:00:00Z", "created_at": "2020-01-01T00:00:00Z"}"#,
        );
        let entry = normalize(raw, 0, Utc::now());
        assert_eq!(entry.created_at.to_rfc3339(), "2024-08-20T14:00:00+00:00");
    }

    #[test]
    fn test_timestamp_falls_back_to_snake_case_field() {
        let raw = raw_from(r#"{"created_at": "2024-08-20T14:00:00Z"}"#);
        let entry = normalize(raw, 0, Utc::now());
        assert_eq!(entry.created_at.to_rfc3339(), "2024-08-20T14:00:00+00:00");
    }

    #[test]
    fn test_unparseable_timestamp_defaults_to_now() {
        let now = Utc::now();
        let raw = raw_from(r#"{"createdAt": "not a date"}"#);
        let entry = normalize(raw, 0, now);
        assert_eq!(entry.created_at, now);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let raw = raw_from(r#"{"id": "x", "upvotes": 9, "somethingNew": {"nested": true}}"#);
        let entry = normalize(raw, 0, Utc::now());
        assert_eq!(entry.id, "x");
        assert_eq!(entry.likes, 0);
    }
}
