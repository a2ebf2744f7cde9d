//! Core type definitions used across the Campus Hub workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
