//! RBAC helpers for capability-based route guarding.

use campus_auth::rbac::AccessRule;
use campus_core::error::AppError;

use crate::extractors::AuthUser;
use crate::state::AppState;

/// Checks an access rule against the authenticated user's capabilities.
pub fn require_rule(state: &AppState, auth: &AuthUser, rule: &AccessRule) -> Result<(), AppError> {
    state.rbac_enforcer.require(auth.role, rule)
}

/// Checks that the authenticated user is an admin or superadmin.
pub fn require_staff(state: &AppState, auth: &AuthUser) -> Result<(), AppError> {
    require_rule(state, auth, &AccessRule::ADMIN_OR_SUPERADMIN)
}
