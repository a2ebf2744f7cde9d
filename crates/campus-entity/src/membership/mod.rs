//! Club membership domain entities.

pub mod model;
pub mod role;

pub use model::{ClubMembership, CreateMembership, DUPLICATE_MEMBERSHIP_MESSAGE, UpdateMembership};
pub use role::MembershipRole;
