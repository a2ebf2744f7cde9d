//! # campus-entity
//!
//! Domain entity models for Campus Hub. Every struct in this crate
//! represents a database table row or a write payload for one. Row types
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and `sqlx::FromRow`.

pub mod announcement;
pub mod club;
pub mod event;
pub mod membership;
pub mod user;

/// Database identifier type shared by every table.
pub type Id = i64;
