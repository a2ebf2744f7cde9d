//! Club event CRUD and approval.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use campus_core::error::AppError;
use campus_core::types::{PageRequest, PageResponse};
use campus_database::repositories::{ClubRepository, EventRepository};
use campus_entity::Id;
use campus_entity::event::{ClubEvent, CreateEvent, EventStatus, UpdateEvent};

use crate::context::RequestContext;

/// Request to schedule a club event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
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
    /// Initial status; defaults to `pending`.
    pub status: Option<EventStatus>,
}

/// Manages club events.
#[derive(Debug, Clone)]
pub struct EventService {
    /// Club repository, to check the organising club.
    clubs: Arc<dyn ClubRepository>,
    /// Event repository.
    events: Arc<dyn EventRepository>,
}

impl EventService {
    /// Creates a new event service.
    pub fn new(clubs: Arc<dyn ClubRepository>, events: Arc<dyn EventRepository>) -> Self {
        Self { clubs, events }
    }

    async fn require_club(&self, club_id: Id) -> Result<(), AppError> {
        if self.clubs.find_by_id(club_id).await?.is_none() {
            return Err(AppError::field_validation(
                "club_id",
                format!("Club {club_id} does not exist."),
            ));
        }
        Ok(())
    }

    /// Lists events, latest date first, optionally for a single club.
    pub async fn list_events(
        &self,
        _ctx: &RequestContext,
        club_id: Option<Id>,
        page: PageRequest,
    ) -> Result<PageResponse<ClubEvent>, AppError> {
        self.events.list(club_id, &page).await
    }

    /// Gets an event by ID.
    pub async fn get_event(
        &self,
        _ctx: &RequestContext,
        event_id: Id,
    ) -> Result<ClubEvent, AppError> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found."))
    }

    /// Schedules an event. The acting user is recorded as its creator.
    pub async fn create_event(
        &self,
        ctx: &RequestContext,
        req: CreateEventRequest,
    ) -> Result<ClubEvent, AppError> {
        self.require_club(req.club_id).await?;

        let event = self
            .events
            .create(&CreateEvent {
                club_id: req.club_id,
                title: req.title,
                description: req.description,
                location: req.location,
                event_date: req.event_date,
                status: req.status.unwrap_or_default(),
                created_by: ctx.user_id,
            })
            .await?;

        info!(
            user_id = ctx.user_id,
            club_id = event.club_id,
            event_id = event.id,
            "Club event created"
        );

        Ok(event)
    }

    /// Updates an event, including approving or rejecting it.
    pub async fn update_event(
        &self,
        ctx: &RequestContext,
        event_id: Id,
        changes: UpdateEvent,
    ) -> Result<ClubEvent, AppError> {
        if let Some(club_id) = changes.club_id {
            self.require_club(club_id).await?;
        }

        let event = self
            .events
            .update(event_id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found."))?;

        info!(
            user_id = ctx.user_id,
            event_id,
            status = %event.status,
            "Club event updated"
        );
        Ok(event)
    }

    /// Deletes an event.
    pub async fn delete_event(&self, ctx: &RequestContext, event_id: Id) -> Result<(), AppError> {
        if !self.events.delete(event_id).await? {
            return Err(AppError::not_found("Event not found."));
        }

        info!(user_id = ctx.user_id, event_id, "Club event deleted");
        Ok(())
    }
}
