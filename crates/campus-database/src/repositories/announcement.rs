//! Announcement repository.

use async_trait::async_trait;
use sqlx::PgPool;

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_core::types::pagination::{PageRequest, PageResponse};
use campus_entity::Id;
use campus_entity::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};

use super::{unknown_author, violated_constraint};

/// Storage operations for announcements.
#[async_trait]
pub trait AnnouncementRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find an announcement by ID, active or not.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Announcement>>;

    /// List active announcements, newest first.
    async fn list_active(&self, page: &PageRequest) -> AppResult<PageResponse<Announcement>>;

    /// Insert an announcement.
    async fn create(&self, data: &CreateAnnouncement) -> AppResult<Announcement>;

    /// Apply changes to an announcement. Returns `None` if it does not exist.
    async fn update(
        &self,
        id: Id,
        changes: &UpdateAnnouncement,
    ) -> AppResult<Option<Announcement>>;

    /// Delete an announcement.
    async fn delete(&self, id: Id) -> AppResult<bool>;
}

/// PostgreSQL-backed announcement repository.
#[derive(Debug, Clone)]
pub struct PgAnnouncementRepository {
    pool: PgPool,
}

impl PgAnnouncementRepository {
    /// Create a new announcement repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnnouncementRepository for PgAnnouncementRepository {
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Announcement>> {
        sqlx::query_as::<_, Announcement>("SELECT * FROM announcements WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find announcement", e)
            })
    }

    async fn list_active(&self, page: &PageRequest) -> AppResult<PageResponse<Announcement>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM announcements WHERE is_active = TRUE")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count announcements", e)
                })?;

        let announcements = sqlx::query_as::<_, Announcement>(
            "SELECT * FROM announcements WHERE is_active = TRUE \
             ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.sql_limit())
        .bind(page.sql_offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list announcements", e)
        })?;

        Ok(PageResponse::new(
            announcements,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn create(&self, data: &CreateAnnouncement) -> AppResult<Announcement> {
        sqlx::query_as::<_, Announcement>(
            "INSERT INTO announcements (title, content, is_active, created_by) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.is_active)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let constraint = violated_constraint(&e).map(str::to_owned);
            match constraint.as_deref() {
                Some("announcements_created_by_fkey") => unknown_author(data.created_by),
                _ => AppError::with_source(ErrorKind::Database, "Failed to create announcement", e),
            }
        })
    }

    async fn update(
        &self,
        id: Id,
        changes: &UpdateAnnouncement,
    ) -> AppResult<Option<Announcement>> {
        sqlx::query_as::<_, Announcement>(
            "UPDATE announcements SET \
                title = COALESCE($2, title), \
                content = COALESCE($3, content), \
                is_active = COALESCE($4, is_active), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.content)
        .bind(changes.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update announcement", e))
    }

    async fn delete(&self, id: Id) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete announcement", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
