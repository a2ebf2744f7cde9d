//! # campus-database
//!
//! Persistence for Campus Hub. Each entity has a repository trait with a
//! PostgreSQL implementation and an in-memory implementation; [`Stores`]
//! bundles the set selected by configuration.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod stores;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use stores::Stores;
