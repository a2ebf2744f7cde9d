//! Club membership registration and management.

pub mod service;

pub use service::{AddMemberRequest, MembershipService};
