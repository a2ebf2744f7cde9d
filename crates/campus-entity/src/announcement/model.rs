//! Announcement entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::Id;

/// A campus-wide announcement.
///
/// Only active announcements are visible in the public listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Announcement {
    /// Unique announcement identifier.
    pub id: Id,
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// The administrator who posted it.
    pub created_by: Id,
    /// When the announcement was created.
    pub created_at: DateTime<Utc>,
    /// When the announcement was last updated.
    pub updated_at: DateTime<Utc>,
    /// Whether the announcement is publicly listed.
    pub is_active: bool,
}

/// Data required to create a new announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAnnouncement {
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Visibility flag.
    pub is_active: bool,
    /// Creating principal.
    pub created_by: Id,
}

/// Changes to apply to an existing announcement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAnnouncement {
    /// New headline.
    pub title: Option<String>,
    /// New body text.
    pub content: Option<String>,
    /// New visibility flag.
    pub is_active: Option<bool>,
}

impl UpdateAnnouncement {
    /// Apply these changes to an announcement in place.
    pub fn apply_to(&self, announcement: &mut Announcement) {
        if let Some(title) = &self.title {
            announcement.title = title.clone();
        }
        if let Some(content) = &self.content {
            announcement.content = content.clone();
        }
        if let Some(is_active) = self.is_active {
            announcement.is_active = is_active;
        }
    }
}
