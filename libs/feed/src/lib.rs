//! Client-side feed library for the recipe-sharing platform
//!
//! This crate holds the logic the mobile client runs around the recipe
//! feed: fetching the listing, normalizing the heterogeneous entries the
//! server may return, coordinating re-synchronization across the view's
//! triggers (mount, focus, pull-to-refresh), and the pure presentation
//! helpers (relative time, ownership predicate, difficulty colors).

pub mod client;
pub mod normalize;
pub mod present;
pub mod sync;

pub use client::{FeedClient, FeedConfig, FeedState};
pub use normalize::FeedEntry;
pub use sync::FeedSync;
