//! Feed re-synchronization
//!
//! The view triggers a reload on mount, whenever it regains focus, and on
//! the pull-to-refresh gesture; those can fire close together. `FeedSync`
//! keeps the triggers safe to invoke repeatedly: each load runs under a
//! generation number, and a result is only applied while its generation is
//! still the latest, so a stale in-flight load can never overwrite newer
//! state.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::client::{FeedClient, FeedState};

/// Client-held feed state with a generation guard
pub struct FeedSync {
    client: FeedClient,
    state: RwLock<FeedState>,
    generation: AtomicU64,
}

impl FeedSync {
    /// Create a new sync coordinator; the feed starts unavailable until
    /// the first load completes
    pub fn new(client: FeedClient) -> Self {
        FeedSync {
            client,
            state: RwLock::new(FeedState::Unavailable),
            generation: AtomicU64::new(0),
        }
    }

    /// Reload the feed; call on view mount, view focus, and
    /// pull-to-refresh
    pub async fn refresh(&self) {
        let generation = self.begin_load();
        let result = self.client.load().await;
        self.complete_load(generation, result).await;
    }

    /// Current feed state
    pub async fn state(&self) -> FeedState {
        self.state.read().await.clone()
    }

    /// Start a load, invalidating any still-running older load
    pub fn begin_load(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Apply a load result unless a newer load has started since; returns
    /// whether the result was applied
    ///
    /// The generation is checked while holding the state write lock, so
    /// the check and the write are atomic with respect to other completing
    /// loads; a slower load can never pass the check and then overwrite a
    /// fresher result that landed in between.
    pub async fn complete_load(&self, generation: u64, result: FeedState) -> bool {
        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            return false;
        }

        *state = result;
        true
    }
}
