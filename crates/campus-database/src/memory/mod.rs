//! In-process store used for development and tests.
//!
//! Rows live in ordered maps behind a single `RwLock`, so every write sees a
//! consistent snapshot and check-then-insert sequences are atomic.

mod repositories;
pub mod store;

pub use store::MemoryStore;
