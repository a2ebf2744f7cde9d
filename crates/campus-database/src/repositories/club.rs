//! Club repository.

use async_trait::async_trait;
use sqlx::PgPool;

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_core::types::pagination::{PageRequest, PageResponse};
use campus_entity::Id;
use campus_entity::club::{Club, CreateClub, DUPLICATE_CLUB_NAME_MESSAGE, UpdateClub};

use super::violated_constraint;

/// Storage operations for clubs.
#[async_trait]
pub trait ClubRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find a club by ID.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Club>>;

    /// Find a club by its exact name.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Club>>;

    /// List clubs, newest first.
    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Club>>;

    /// Insert a club. A taken name is a validation error.
    async fn create(&self, data: &CreateClub) -> AppResult<Club>;

    /// Apply changes to a club. Returns `None` if it does not exist.
    async fn update(&self, id: Id, changes: &UpdateClub) -> AppResult<Option<Club>>;

    /// Delete a club and, by cascade, its memberships and events.
    async fn delete(&self, id: Id) -> AppResult<bool>;
}

/// PostgreSQL-backed club repository.
#[derive(Debug, Clone)]
pub struct PgClubRepository {
    pool: PgPool,
}

impl PgClubRepository {
    /// Create a new club repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_write_error(e: sqlx::Error, action: &'static str) -> AppError {
    let constraint = violated_constraint(&e).map(str::to_owned);
    match constraint.as_deref() {
        Some("clubs_name_key") => AppError::field_validation("name", DUPLICATE_CLUB_NAME_MESSAGE),
        _ => AppError::with_source(ErrorKind::Database, action, e),
    }
}

#[async_trait]
impl ClubRepository for PgClubRepository {
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Club>> {
        sqlx::query_as::<_, Club>("SELECT * FROM clubs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find club", e))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Club>> {
        sqlx::query_as::<_, Club>("SELECT * FROM clubs WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find club by name", e)
            })
    }

    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Club>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clubs")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count clubs", e))?;

        let clubs = sqlx::query_as::<_, Club>(
            "SELECT * FROM clubs ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.sql_limit())
        .bind(page.sql_offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list clubs", e))?;

        Ok(PageResponse::new(
            clubs,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn create(&self, data: &CreateClub) -> AppResult<Club> {
        sqlx::query_as::<_, Club>(
            "INSERT INTO clubs (name, description, metadata) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.metadata)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create club"))
    }

    async fn update(&self, id: Id, changes: &UpdateClub) -> AppResult<Option<Club>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e))?;

        let current = sqlx::query_as::<_, Club>("SELECT * FROM clubs WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load club", e))?;

        let Some(mut club) = current else {
            return Ok(None);
        };
        changes.apply_to(&mut club);

        let updated = sqlx::query_as::<_, Club>(
            "UPDATE clubs SET name = $2, description = $3, metadata = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&club.name)
        .bind(&club.description)
        .bind(&club.metadata)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, "Failed to update club"))?;

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit club update", e))?;

        Ok(Some(updated))
    }

    async fn delete(&self, id: Id) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM clubs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete club", e))?;
        Ok(result.rows_affected() > 0)
    }
}
