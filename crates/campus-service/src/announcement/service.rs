//! Announcement CRUD.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use campus_core::error::AppError;
use campus_core::types::{PageRequest, PageResponse};
use campus_database::repositories::AnnouncementRepository;
use campus_entity::Id;
use campus_entity::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};

use crate::context::RequestContext;

/// Request to post an announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAnnouncementRequest {
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Visibility; defaults to active.
    pub is_active: Option<bool>,
}

/// Manages announcements.
#[derive(Debug, Clone)]
pub struct AnnouncementService {
    /// Announcement repository.
    announcements: Arc<dyn AnnouncementRepository>,
}

impl AnnouncementService {
    /// Creates a new announcement service.
    pub fn new(announcements: Arc<dyn AnnouncementRepository>) -> Self {
        Self { announcements }
    }

    /// Lists active announcements, newest first.
    pub async fn list_active(
        &self,
        _ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Announcement>, AppError> {
        self.announcements.list_active(&page).await
    }

    /// Gets an announcement by ID, whether or not it is active.
    pub async fn get_announcement(
        &self,
        _ctx: &RequestContext,
        announcement_id: Id,
    ) -> Result<Announcement, AppError> {
        self.announcements
            .find_by_id(announcement_id)
            .await?
            .ok_or_else(|| AppError::not_found("Announcement not found."))
    }

    /// Posts an announcement on behalf of the acting user.
    pub async fn create_announcement(
        &self,
        ctx: &RequestContext,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement, AppError> {
        let announcement = self
            .announcements
            .create(&CreateAnnouncement {
                title: req.title,
                content: req.content,
                is_active: req.is_active.unwrap_or(true),
                created_by: ctx.user_id,
            })
            .await?;

        info!(
            user_id = ctx.user_id,
            announcement_id = announcement.id,
            is_active = announcement.is_active,
            "Announcement created"
        );

        Ok(announcement)
    }

    /// Updates an announcement.
    pub async fn update_announcement(
        &self,
        ctx: &RequestContext,
        announcement_id: Id,
        changes: UpdateAnnouncement,
    ) -> Result<Announcement, AppError> {
        let announcement = self
            .announcements
            .update(announcement_id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found("Announcement not found."))?;

        info!(user_id = ctx.user_id, announcement_id, "Announcement updated");
        Ok(announcement)
    }

    /// Deletes an announcement.
    pub async fn delete_announcement(
        &self,
        ctx: &RequestContext,
        announcement_id: Id,
    ) -> Result<(), AppError> {
        if !self.announcements.delete(announcement_id).await? {
            return Err(AppError::not_found("Announcement not found."));
        }

        info!(user_id = ctx.user_id, announcement_id, "Announcement deleted");
        Ok(())
    }
}
