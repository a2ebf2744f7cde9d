//! # campus-service
//!
//! Business logic service layer for Campus Hub. Each service wraps the
//! repositories it needs and turns missing rows into not-found errors.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod announcement;
pub mod club;
pub mod context;
pub mod event;
pub mod membership;

pub use announcement::AnnouncementService;
pub use club::ClubService;
pub use context::RequestContext;
pub use event::EventService;
pub use membership::MembershipService;
