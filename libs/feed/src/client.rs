//! HTTP feed client
//!
//! Wraps the `GET /api/recipes` listing behind the fail-silent-to-empty
//! policy: every failure mode (transport error, non-success status,
//! undecodable body, server-reported failure) collapses to
//! [`FeedState::Unavailable`], which renders as an empty feed but stays
//! distinguishable from a feed that is truly empty.

use std::time::Duration;

use chrono::Utc;
use serde::Deserialize;
use tracing::warn;

use crate::normalize::{FeedEntry, RawEntry, normalize_entries};

/// Feed client configuration
///
/// The API address is an explicit value injected at startup; nothing is
/// auto-discovered.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Base URL of the recipe API, e.g. "http://192.168.1.10:3001"
    pub base_url: String,
    /// Client-side request timeout
    pub timeout: Duration,
}

impl FeedConfig {
    /// Create a config with the default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        FeedConfig {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Create a new FeedConfig from environment variables
    ///
    /// # Environment Variables
    /// - `RECIPE_API_URL`: base URL of the recipe API (default: "http://localhost:3001")
    /// - `RECIPE_API_TIMEOUT_SECS`: request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let base_url = std::env::var("RECIPE_API_URL")
            .unwrap_or_else(|_| "http://localhost:3001".to_string());

        let timeout_secs = std::env::var("RECIPE_API_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        FeedConfig {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// Outcome of a feed load
///
/// `Loaded(vec![])` means the server reported an empty collection;
/// `Unavailable` means the load failed and the view falls back to an
/// empty list without surfacing an error.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedState {
    Loaded(Vec<FeedEntry>),
    Unavailable,
}

impl FeedState {
    /// The renderable entries; empty for `Unavailable`
    pub fn entries(&self) -> &[FeedEntry] {
        match self {
            FeedState::Loaded(entries) => entries,
            FeedState::Unavailable => &[],
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, FeedState::Unavailable)
    }
}

/// Listing envelope as received from the server, decoded leniently
#[derive(Debug, Default, Deserialize)]
struct ListEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    recipes: Vec<RawEntry>,
}

/// HTTP client for the recipe feed
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    base_url: String,
}

impl FeedClient {
    /// Create a new feed client
    pub fn new(config: &FeedConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(FeedClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Load the recipe listing
    ///
    /// Never fails: any problem yields `FeedState::Unavailable`.
    pub async fn load(&self) -> FeedState {
        let url = format!("{}/api/recipes", self.base_url);

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Feed request failed: {}", e);
                return FeedState::Unavailable;
            }
        };

        if !response.status().is_success() {
            warn!("Feed request returned status {}", response.status());
            return FeedState::Unavailable;
        }

        let envelope: ListEnvelope = match response.json().await {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("Feed response could not be decoded: {}", e);
                return FeedState::Unavailable;
            }
        };

        if !envelope.success {
            warn!("Feed response reported failure");
            return FeedState::Unavailable;
        }

        FeedState::Loaded(normalize_entries(envelope.recipes, Utc::now()))
    }
}
