//! Repository traits and their PostgreSQL implementations.
//!
//! Services depend on the traits (`Arc<dyn ClubRepository>` etc.) so the
//! same code runs against PostgreSQL or the in-memory store.

use campus_core::error::AppError;
use campus_entity::Id;

pub mod announcement;
pub mod club;
pub mod event;
pub mod membership;
pub mod user;

pub use announcement::{AnnouncementRepository, PgAnnouncementRepository};
pub use club::{ClubRepository, PgClubRepository};
pub use event::{EventRepository, PgEventRepository};
pub use membership::{MembershipRepository, PgMembershipRepository};
pub use user::{PgUserRepository, UserRepository};

/// Error for a token subject with no row in `users`.
pub(crate) fn unknown_author(user_id: Id) -> AppError {
    AppError::unauthorized(format!("User {user_id} is not a known account."))
}

/// Name of the violated constraint, if the error is a database constraint violation.
pub(crate) fn violated_constraint(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint(),
        _ => None,
    }
}
