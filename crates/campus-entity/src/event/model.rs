//! Club event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::EventStatus;
use crate::Id;

/// An event organised by a club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ClubEvent {
    /// Unique event identifier.
    pub id: Id,
    /// Organising club.
    pub club_id: Id,
    /// Event title.
    pub title: String,
    /// Event description.
    pub description: Option<String>,
    /// Where the event takes place.
    pub location: Option<String>,
    /// When the event takes place.
    pub event_date: DateTime<Utc>,
    /// Approval state.
    pub status: EventStatus,
    /// The administrator who created the event.
    pub created_by: Id,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
    /// When the event was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEvent {
    /// Organising club.
    pub club_id: Id,
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Location.
    pub location: Option<String>,
    /// Date and time.
    pub event_date: DateTime<Utc>,
    /// Initial status.
    pub status: EventStatus,
    /// Creating principal.
    pub created_by: Id,
}

/// Changes to apply to an existing event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEvent {
    /// New organising club.
    pub club_id: Option<Id>,
    /// New title.
    pub title: Option<String>,
    /// New description. `Some(None)` clears it.
    pub description: Option<Option<String>>,
    /// New location. `Some(None)` clears it.
    pub location: Option<Option<String>>,
    /// New date.
    pub event_date: Option<DateTime<Utc>>,
    /// New status (approve / reject).
    pub status: Option<EventStatus>,
}

impl UpdateEvent {
    /// Apply these changes to an event in place.
    pub fn apply_to(&self, event: &mut ClubEvent) {
        if let Some(club_id) = self.club_id {
            event.club_id = club_id;
        }
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(location) = &self.location {
            event.location = location.clone();
        }
        if let Some(event_date) = self.event_date {
            event.event_date = event_date;
        }
        if let Some(status) = self.status {
            event.status = status;
        }
    }
}
