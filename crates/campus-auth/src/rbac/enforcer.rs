//! Enforcement of access rules against an authenticated principal's role.

use tracing::debug;

use campus_core::error::AppError;
use campus_entity::user::UserRole;

use super::policies::{AccessRule, Capability, CapabilitySet, RbacPolicies};

/// Resolves capabilities for roles and checks access rules.
#[derive(Debug, Clone)]
pub struct RbacEnforcer {
    /// The policy configuration.
    policies: RbacPolicies,
}

impl RbacEnforcer {
    /// Creates a new enforcer with the default policy set.
    pub fn new() -> Self {
        Self {
            policies: RbacPolicies::new(),
        }
    }

    /// Capabilities held by an authenticated principal with this role.
    pub fn capabilities(&self, role: UserRole) -> CapabilitySet {
        self.policies
            .capabilities_for_role(role)
            .with(Capability::Authenticated)
    }

    /// Checks the rule for an authenticated principal.
    ///
    /// Returns `Ok(())` if allowed, or a forbidden error if denied.
    pub fn require(&self, role: UserRole, rule: &AccessRule) -> Result<(), AppError> {
        let held = self.capabilities(role);
        if rule.allows(held) {
            Ok(())
        } else {
            debug!(role = %role, held = %held, "Access rule denied");
            Err(AppError::forbidden(
                "You do not have permission to perform this action.",
            ))
        }
    }
}

impl Default for RbacEnforcer {
    fn default() -> Self {
        Self::new()
    }
}
