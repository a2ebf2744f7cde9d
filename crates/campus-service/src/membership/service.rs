//! Membership registration guard and membership CRUD.
//!
//! A student holds at most one membership per club. The service checks this
//! before inserting; the repositories enforce it again at write time so two
//! concurrent registrations cannot both succeed.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use campus_core::error::AppError;
use campus_core::types::{PageRequest, PageResponse};
use campus_database::repositories::{ClubRepository, MembershipRepository, UserRepository};
use campus_entity::Id;
use campus_entity::club::Club;
use campus_entity::membership::{
    ClubMembership, CreateMembership, DUPLICATE_MEMBERSHIP_MESSAGE, MembershipRole,
    UpdateMembership,
};

use crate::context::RequestContext;

/// Request to add a student to a club.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMemberRequest {
    /// The student to add.
    pub student_id: Id,
    /// Role inside the club; defaults to `member`.
    pub role: Option<MembershipRole>,
}

/// Manages club memberships.
#[derive(Debug, Clone)]
pub struct MembershipService {
    /// Club repository, to resolve the club.
    clubs: Arc<dyn ClubRepository>,
    /// Membership repository.
    memberships: Arc<dyn MembershipRepository>,
    /// User repository, to validate the student.
    users: Arc<dyn UserRepository>,
}

impl MembershipService {
    /// Creates a new membership service.
    pub fn new(
        clubs: Arc<dyn ClubRepository>,
        memberships: Arc<dyn MembershipRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            clubs,
            memberships,
            users,
        }
    }

    async fn resolve_club(&self, club_id: Id) -> Result<Club, AppError> {
        self.clubs
            .find_by_id(club_id)
            .await?
            .ok_or_else(|| AppError::not_found("Club not found."))
    }

    async fn validate_student(&self, student_id: Id) -> Result<(), AppError> {
        let user = self.users.find_by_id(student_id).await?.ok_or_else(|| {
            AppError::field_validation(
                "student_id",
                format!("Student {student_id} does not exist."),
            )
        })?;

        if !user.is_enrollable_student() {
            return Err(AppError::field_validation(
                "student_id",
                format!("User {student_id} is not an active student."),
            ));
        }
        Ok(())
    }

    /// Lists the members of a club, in registration order.
    pub async fn list_members(
        &self,
        _ctx: &RequestContext,
        club_id: Id,
        page: PageRequest,
    ) -> Result<PageResponse<ClubMembership>, AppError> {
        self.resolve_club(club_id).await?;
        self.memberships.list_by_club(club_id, &page).await
    }

    /// Registers a student in a club.
    ///
    /// Fails with not-found if the club does not exist, and with a
    /// validation error if the user is not a student or is already a member.
    pub async fn add_member(
        &self,
        ctx: &RequestContext,
        club_id: Id,
        req: AddMemberRequest,
    ) -> Result<ClubMembership, AppError> {
        let club = self.resolve_club(club_id).await?;
        self.validate_student(req.student_id).await?;

        if self
            .memberships
            .find_by_club_and_student(club.id, req.student_id)
            .await?
            .is_some()
        {
            warn!(
                club_id = club.id,
                student_id = req.student_id,
                "Rejected duplicate club membership"
            );
            return Err(AppError::validation(DUPLICATE_MEMBERSHIP_MESSAGE));
        }

        let membership = self
            .memberships
            .create(&CreateMembership {
                club_id: club.id,
                student_id: req.student_id,
                role: req.role.unwrap_or_default(),
            })
            .await?;

        info!(
            user_id = ctx.user_id,
            club_id = club.id,
            student_id = membership.student_id,
            membership_id = membership.id,
            role = %membership.role,
            "Student added to club"
        );

        Ok(membership)
    }

    /// Gets a membership by its own ID.
    pub async fn get_membership(
        &self,
        _ctx: &RequestContext,
        membership_id: Id,
    ) -> Result<ClubMembership, AppError> {
        self.memberships
            .find_by_id(membership_id)
            .await?
            .ok_or_else(|| AppError::not_found("Membership not found."))
    }

    /// Changes a member's role.
    pub async fn update_membership(
        &self,
        ctx: &RequestContext,
        membership_id: Id,
        changes: UpdateMembership,
    ) -> Result<ClubMembership, AppError> {
        let membership = self
            .memberships
            .update(membership_id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found("Membership not found."))?;

        info!(
            user_id = ctx.user_id,
            membership_id,
            role = %membership.role,
            "Membership updated"
        );
        Ok(membership)
    }

    /// Removes a membership.
    pub async fn remove_membership(
        &self,
        ctx: &RequestContext,
        membership_id: Id,
    ) -> Result<(), AppError> {
        if !self.memberships.delete(membership_id).await? {
            return Err(AppError::not_found("Membership not found."));
        }

        info!(user_id = ctx.user_id, membership_id, "Membership removed");
        Ok(())
    }
}
