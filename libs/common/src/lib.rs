//! Common library for the recipe-sharing platform
//!
//! This crate provides the shared infrastructure used by the services:
//! PostgreSQL connectivity, startup schema bootstrap, and common error
//! types.

pub mod database;
pub mod error;
