//! Club event repository.

use async_trait::async_trait;
use sqlx::PgPool;

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_core::types::pagination::{PageRequest, PageResponse};
use campus_entity::Id;
use campus_entity::event::{ClubEvent, CreateEvent, UpdateEvent};

use super::{unknown_author, violated_constraint};

/// Storage operations for club events.
#[async_trait]
pub trait EventRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find an event by ID.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<ClubEvent>>;

    /// List events, latest `event_date` first, optionally for one club.
    async fn list(
        &self,
        club_id: Option<Id>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ClubEvent>>;

    /// Insert an event.
    async fn create(&self, data: &CreateEvent) -> AppResult<ClubEvent>;

    /// Apply changes to an event. Returns `None` if it does not exist.
    async fn update(&self, id: Id, changes: &UpdateEvent) -> AppResult<Option<ClubEvent>>;

    /// Delete an event.
    async fn delete(&self, id: Id) -> AppResult<bool>;
}

/// PostgreSQL-backed event repository.
#[derive(Debug, Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new event repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map foreign-key violations on an event row to client errors.
fn map_write_error(e: sqlx::Error, club_id: Id, created_by: Id, action: &'static str) -> AppError {
    let constraint = violated_constraint(&e).map(str::to_owned);
    match constraint.as_deref() {
        Some("club_events_club_id_fkey") => AppError::field_validation(
            "club_id",
            format!("Club {club_id} does not exist."),
        ),
        Some("club_events_created_by_fkey") => unknown_author(created_by),
        _ => AppError::with_source(ErrorKind::Database, action, e),
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn find_by_id(&self, id: Id) -> AppResult<Option<ClubEvent>> {
        sqlx::query_as::<_, ClubEvent>("SELECT * FROM club_events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find event", e))
    }

    async fn list(
        &self,
        club_id: Option<Id>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ClubEvent>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM club_events WHERE ($1::BIGINT IS NULL OR club_id = $1)",
        )
        .bind(club_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count events", e))?;

        let events = sqlx::query_as::<_, ClubEvent>(
            "SELECT * FROM club_events WHERE ($1::BIGINT IS NULL OR club_id = $1) \
             ORDER BY event_date DESC, id DESC LIMIT $2 OFFSET $3",
        )
        .bind(club_id)
        .bind(page.sql_limit())
        .bind(page.sql_offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list events", e))?;

        Ok(PageResponse::new(
            events,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn create(&self, data: &CreateEvent) -> AppResult<ClubEvent> {
        sqlx::query_as::<_, ClubEvent>(
            "INSERT INTO club_events (club_id, title, description, location, event_date, status, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(data.club_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.location)
        .bind(data.event_date)
        .bind(data.status)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, data.club_id, data.created_by, "Failed to create event"))
    }

    async fn update(&self, id: Id, changes: &UpdateEvent) -> AppResult<Option<ClubEvent>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e))?;

        let current =
            sqlx::query_as::<_, ClubEvent>("SELECT * FROM club_events WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load event", e))?;

        let Some(mut event) = current else {
            return Ok(None);
        };
        changes.apply_to(&mut event);

        let updated = sqlx::query_as::<_, ClubEvent>(
            "UPDATE club_events SET club_id = $2, title = $3, description = $4, location = $5, \
             event_date = $6, status = $7, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(event.club_id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.location)
        .bind(event.event_date)
        .bind(event.status)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, event.club_id, event.created_by, "Failed to update event"))?;

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit event update", e))?;

        Ok(Some(updated))
    }

    async fn delete(&self, id: Id) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM club_events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete event", e))?;
        Ok(result.rows_affected() > 0)
    }
}
