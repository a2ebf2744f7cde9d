//! Membership role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The position a student holds inside a club.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "membership_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MembershipRole {
    /// Ordinary member.
    #[default]
    Member,
    /// Club leader.
    Leader,
    /// Executive committee member.
    Executive,
}

impl MembershipRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Leader => "leader",
            Self::Executive => "executive",
        }
    }
}

impl fmt::Display for MembershipRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MembershipRole {
    type Err = campus_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "member" => Ok(Self::Member),
            "leader" => Ok(Self::Leader),
            "executive" => Ok(Self::Executive),
            _ => Err(campus_core::AppError::field_validation(
                "role",
                format!("\"{s}\" is not a valid choice. Expected one of: member, leader, executive"),
            )),
        }
    }
}
