//! Campus announcements.

pub mod service;

pub use service::{AnnouncementService, CreateAnnouncementRequest};
