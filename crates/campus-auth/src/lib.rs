//! # campus-auth
//!
//! Authentication and authorization for Campus Hub.
//!
//! ## Modules
//!
//! - `jwt`: bearer token claims, verification, and development issuance
//! - `rbac`: capability sets, access rules, and their enforcement

pub mod jwt;
pub mod rbac;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use rbac::{AccessRule, Capability, CapabilitySet, RbacEnforcer, RbacPolicies};
