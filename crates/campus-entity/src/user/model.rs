//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::UserRole;
use crate::Id;

/// A registered user as seen by Campus Hub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Id,
    /// Unique login name.
    pub username: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Account role.
    pub role: UserRole,
    /// Whether the account is enabled.
    pub is_active: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if this user can be enrolled in a club.
    pub fn is_enrollable_student(&self) -> bool {
        self.is_active && self.role.is_student()
    }
}
