//! Announcement domain entities.

pub mod model;

pub use model::{Announcement, CreateAnnouncement, UpdateAnnouncement};
