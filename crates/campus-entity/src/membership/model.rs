//! Club membership entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::MembershipRole;
use crate::Id;

/// Message returned when a student is registered twice in the same club.
pub const DUPLICATE_MEMBERSHIP_MESSAGE: &str = "Student is already a member of this club.";

/// A student's membership in a club.
///
/// At most one membership exists per `(club_id, student_id)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ClubMembership {
    /// Unique membership identifier.
    pub id: Id,
    /// The club.
    pub club_id: Id,
    /// The member (a user with the student role).
    pub student_id: Id,
    /// Position inside the club.
    pub role: MembershipRole,
    /// When the student joined.
    pub joined_at: DateTime<Utc>,
    /// When the membership was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to register a membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMembership {
    /// Target club.
    pub club_id: Id,
    /// Student being added.
    pub student_id: Id,
    /// Initial role.
    pub role: MembershipRole,
}

/// Changes to apply to an existing membership.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMembership {
    /// New role.
    pub role: Option<MembershipRole>,
}

impl UpdateMembership {
    /// Apply these changes to a membership in place.
    pub fn apply_to(&self, membership: &mut ClubMembership) {
        if let Some(role) = self.role {
            membership.role = role;
        }
    }
}
