//! User domain entities.
//!
//! Users are owned by the accounts service; this crate only reads them.

pub mod model;
pub mod role;

pub use model::User;
pub use role::UserRole;
