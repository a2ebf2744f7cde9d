//! Club CRUD operations.

use std::sync::Arc;

use tracing::info;

use campus_core::error::AppError;
use campus_core::types::{PageRequest, PageResponse};
use campus_database::repositories::ClubRepository;
use campus_entity::Id;
use campus_entity::club::{Club, CreateClub, DUPLICATE_CLUB_NAME_MESSAGE, UpdateClub};

use crate::context::RequestContext;

/// Manages clubs.
#[derive(Debug, Clone)]
pub struct ClubService {
    /// Club repository.
    clubs: Arc<dyn ClubRepository>,
}

impl ClubService {
    /// Creates a new club service.
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    /// Lists clubs, newest first.
    pub async fn list_clubs(
        &self,
        _ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Club>, AppError> {
        self.clubs.list(&page).await
    }

    /// Gets a club by ID.
    pub async fn get_club(&self, _ctx: &RequestContext, club_id: Id) -> Result<Club, AppError> {
        self.clubs
            .find_by_id(club_id)
            .await?
            .ok_or_else(|| AppError::not_found("Club not found."))
    }

    /// Creates a club. The name must not be taken.
    pub async fn create_club(
        &self,
        ctx: &RequestContext,
        data: CreateClub,
    ) -> Result<Club, AppError> {
        self.ensure_name_free(&data.name, None).await?;

        let club = self.clubs.create(&data).await?;

        info!(
            user_id = ctx.user_id,
            club_id = club.id,
            name = %club.name,
            "Club created"
        );

        Ok(club)
    }

    /// Updates a club.
    pub async fn update_club(
        &self,
        ctx: &RequestContext,
        club_id: Id,
        changes: UpdateClub,
    ) -> Result<Club, AppError> {
        let current = self.get_club(ctx, club_id).await?;
        if let Some(name) = changes.name.as_deref().filter(|n| *n != current.name) {
            self.ensure_name_free(name, Some(club_id)).await?;
        }

        let club = self
            .clubs
            .update(club_id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found("Club not found."))?;

        info!(user_id = ctx.user_id, club_id, "Club updated");
        Ok(club)
    }

    /// Rejects a name held by another club. The unique constraint still
    /// decides races between concurrent writers.
    async fn ensure_name_free(&self, name: &str, except: Option<Id>) -> Result<(), AppError> {
        match self.clubs.find_by_name(name).await? {
            Some(existing) if Some(existing.id) != except => {
                Err(AppError::field_validation("name", DUPLICATE_CLUB_NAME_MESSAGE))
            }
            _ => Ok(()),
        }
    }

    /// Deletes a club together with its memberships and events.
    pub async fn delete_club(&self, ctx: &RequestContext, club_id: Id) -> Result<(), AppError> {
        if !self.clubs.delete(club_id).await? {
            return Err(AppError::not_found("Club not found."));
        }

        info!(user_id = ctx.user_id, club_id, "Club deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use campus_core::error::ErrorKind;
    use campus_database::MemoryStore;
    use campus_entity::user::UserRole;

    use super::*;

    fn service() -> ClubService {
        ClubService::new(Arc::new(MemoryStore::new()))
    }

    fn admin() -> RequestContext {
        RequestContext::new(1, UserRole::Admin, "admin")
    }

    fn new_club(name: &str) -> CreateClub {
        CreateClub {
            name: name.to_string(),
            description: Some("Builds robots".to_string()),
            metadata: serde_json::json!({ "room": "B12" }),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let svc = service();
        let club = svc.create_club(&admin(), new_club("Robotics")).await.unwrap();
        let fetched = svc.get_club(&admin(), club.id).await.unwrap();
        assert_eq!(fetched, club);
        assert_eq!(fetched.metadata["room"], "B12");
    }

    #[tokio::test]
    async fn test_duplicate_name() {
        let svc = service();
        svc.create_club(&admin(), new_club("Robotics")).await.unwrap();
        let err = svc
            .create_club(&admin(), new_club("Robotics"))
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::Validation));
    }

    #[tokio::test]
    async fn test_update_missing_club() {
        let err = service()
            .update_club(&admin(), 404, UpdateClub::default())
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_update_missing_club_with_taken_name() {
        let svc = service();
        svc.create_club(&admin(), new_club("Chess")).await.unwrap();
        let err = svc
            .update_club(
                &admin(),
                999,
                UpdateClub {
                    name: Some("Chess".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_rename_to_taken_name() {
        let svc = service();
        svc.create_club(&admin(), new_club("Chess")).await.unwrap();
        let go = svc.create_club(&admin(), new_club("Go")).await.unwrap();
        let err = svc
            .update_club(
                &admin(),
                go.id,
                UpdateClub {
                    name: Some("Chess".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::Validation));
        assert_eq!(
            err.details,
            Some(serde_json::json!({ "name": [DUPLICATE_CLUB_NAME_MESSAGE] }))
        );
    }

    #[tokio::test]
    async fn test_keeping_own_name_is_allowed() {
        let svc = service();
        let club = svc.create_club(&admin(), new_club("Chess")).await.unwrap();
        let updated = svc
            .update_club(
                &admin(),
                club.id,
                UpdateClub {
                    name: Some("Chess".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Chess");
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let svc = service();
        let club = svc.create_club(&admin(), new_club("Robotics")).await.unwrap();
        let updated = svc
            .update_club(
                &admin(),
                club.id,
                UpdateClub {
                    description: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Robotics");
        assert_eq!(updated.description, None);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let svc = service();
        let club = svc.create_club(&admin(), new_club("Robotics")).await.unwrap();
        svc.delete_club(&admin(), club.id).await.unwrap();
        let err = svc.delete_club(&admin(), club.id).await.unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
    }
}
