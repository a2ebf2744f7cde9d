//! HTTP request handlers, grouped by resource.

pub mod announcement;
pub mod club;
pub mod event;
pub mod health;
pub mod membership;
