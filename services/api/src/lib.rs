//! Recipe-sharing API service
//!
//! A single service exposing the recipe endpoints (backed by the `recipes`
//! table) and the user directory endpoints (signup, login, listing) the
//! mobile client consumes.

pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod validation;
