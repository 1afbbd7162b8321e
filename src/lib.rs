//! Read-only data access for a radio quiz show archive.
//!
//! Translates the normalized relational schema (shows, hosts, scorekeepers,
//! panelists, guests, locations, and their per-show mappings) into typed,
//! nested result records: full show details, per-entity appearance histories,
//! and panelist scoring statistics. The library only ever reads — the store
//! is maintained exogenously.

pub mod appearances;
pub mod config;
pub mod dates;
pub mod db;
pub mod error;
pub mod resolver;
pub mod shows;
pub mod slug;
pub mod stats;

pub use db::Database;
pub use error::{Error, Result};

/// Application name for XDG paths
pub const APP_NAME: &str = "aircheck";
