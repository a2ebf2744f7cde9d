//! Club entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::Id;

/// Message returned when a club name is already taken.
pub const DUPLICATE_CLUB_NAME_MESSAGE: &str = "club with this name already exists.";

/// A student club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Club {
    /// Unique club identifier.
    pub id: Id,
    /// Unique display name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Arbitrary club metadata (JSON object).
    pub metadata: serde_json::Value,
    /// When the club was created.
    pub created_at: DateTime<Utc>,
    /// When the club was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new club.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClub {
    /// Club name.
    pub name: String,
    /// Description (optional).
    pub description: Option<String>,
    /// Metadata object.
    pub metadata: serde_json::Value,
}

/// Changes to apply to an existing club. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClub {
    /// New name.
    pub name: Option<String>,
    /// New description. `Some(None)` clears it.
    pub description: Option<Option<String>>,
    /// New metadata object.
    pub metadata: Option<serde_json::Value>,
}

impl UpdateClub {
    /// Apply these changes to a club in place.
    pub fn apply_to(&self, club: &mut Club) {
        if let Some(name) = &self.name {
            club.name = name.clone();
        }
        if let Some(description) = &self.description {
            club.description = description.clone();
        }
        if let Some(metadata) = &self.metadata {
            club.metadata = metadata.clone();
        }
    }
}
