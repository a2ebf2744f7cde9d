//! Role-based access control expressed as capability sets.

pub mod enforcer;
pub mod policies;

pub use enforcer::RbacEnforcer;
pub use policies::{AccessRule, Capability, CapabilitySet, RbacPolicies};
