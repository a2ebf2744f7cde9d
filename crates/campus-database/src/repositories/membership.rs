//! Club membership repository.

use async_trait::async_trait;
use sqlx::PgPool;

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_core::types::pagination::{PageRequest, PageResponse};
use campus_entity::Id;
use campus_entity::membership::{
    ClubMembership, CreateMembership, DUPLICATE_MEMBERSHIP_MESSAGE, UpdateMembership,
};

use super::violated_constraint;

/// Storage operations for club memberships.
///
/// Implementations must refuse a second row for the same
/// `(club_id, student_id)` pair even when two inserts race.
#[async_trait]
pub trait MembershipRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find a membership by ID.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<ClubMembership>>;

    /// Find the membership of a student in a club.
    async fn find_by_club_and_student(
        &self,
        club_id: Id,
        student_id: Id,
    ) -> AppResult<Option<ClubMembership>>;

    /// List the memberships of a club, oldest first.
    async fn list_by_club(
        &self,
        club_id: Id,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ClubMembership>>;

    /// Insert a membership. A duplicate pair is a validation error.
    async fn create(&self, data: &CreateMembership) -> AppResult<ClubMembership>;

    /// Apply changes to a membership. Returns `None` if it does not exist.
    async fn update(
        &self,
        id: Id,
        changes: &UpdateMembership,
    ) -> AppResult<Option<ClubMembership>>;

    /// Delete a membership.
    async fn delete(&self, id: Id) -> AppResult<bool>;
}

/// PostgreSQL-backed membership repository.
#[derive(Debug, Clone)]
pub struct PgMembershipRepository {
    pool: PgPool,
}

impl PgMembershipRepository {
    /// Create a new membership repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipRepository for PgMembershipRepository {
    async fn find_by_id(&self, id: Id) -> AppResult<Option<ClubMembership>> {
        sqlx::query_as::<_, ClubMembership>("SELECT * FROM club_memberships WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find membership", e)
            })
    }

    async fn find_by_club_and_student(
        &self,
        club_id: Id,
        student_id: Id,
    ) -> AppResult<Option<ClubMembership>> {
        sqlx::query_as::<_, ClubMembership>(
            "SELECT * FROM club_memberships WHERE club_id = $1 AND student_id = $2",
        )
        .bind(club_id)
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check membership", e))
    }

    async fn list_by_club(
        &self,
        club_id: Id,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ClubMembership>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM club_memberships WHERE club_id = $1")
                .bind(club_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count memberships", e)
                })?;

        let memberships = sqlx::query_as::<_, ClubMembership>(
            "SELECT * FROM club_memberships WHERE club_id = $1 ORDER BY id ASC LIMIT $2 OFFSET $3",
        )
        .bind(club_id)
        .bind(page.sql_limit())
        .bind(page.sql_offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list memberships", e))?;

        Ok(PageResponse::new(
            memberships,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn create(&self, data: &CreateMembership) -> AppResult<ClubMembership> {
        sqlx::query_as::<_, ClubMembership>(
            "INSERT INTO club_memberships (club_id, student_id, role) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.club_id)
        .bind(data.student_id)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let constraint = violated_constraint(&e).map(str::to_owned);
            match constraint.as_deref() {
                Some("club_memberships_club_student_key") => {
                    AppError::validation(DUPLICATE_MEMBERSHIP_MESSAGE)
                }
                Some("club_memberships_club_id_fkey") => AppError::not_found("Club not found."),
                Some("club_memberships_student_id_fkey") => AppError::field_validation(
                    "student_id",
                    format!("Student {} does not exist.", data.student_id),
                ),
                _ => AppError::with_source(ErrorKind::Database, "Failed to create membership", e),
            }
        })
    }

    async fn update(
        &self,
        id: Id,
        changes: &UpdateMembership,
    ) -> AppResult<Option<ClubMembership>> {
        let Some(role) = changes.role else {
            return self.find_by_id(id).await;
        };

        sqlx::query_as::<_, ClubMembership>(
            "UPDATE club_memberships SET role = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(role)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update membership", e))
    }

    async fn delete(&self, id: Id) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM club_memberships WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete membership", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
