//! Capabilities, capability sets, and the role-to-capability mapping.

use std::collections::HashMap;
use std::fmt;

use campus_entity::user::UserRole;

/// A single capability a principal may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Presented a valid bearer token.
    Authenticated,
    /// Campus administrator.
    Admin,
    /// Administrator with system-wide authority.
    SuperAdmin,
}

impl Capability {
    /// Every capability, in bit order.
    pub const ALL: [Capability; 3] = [Self::Authenticated, Self::Admin, Self::SuperAdmin];

    fn bit(self) -> u8 {
        match self {
            Self::Authenticated => 1 << 0,
            Self::Admin => 1 << 1,
            Self::SuperAdmin => 1 << 2,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticated => write!(f, "authenticated"),
            Self::Admin => write!(f, "admin"),
            Self::SuperAdmin => write!(f, "superadmin"),
        }
    }
}

/// A set of capabilities stored as a bitset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Build a set from a list of capabilities.
    pub fn of(capabilities: &[Capability]) -> Self {
        capabilities
            .iter()
            .fold(Self::EMPTY, |set, cap| set.with(*cap))
    }

    /// Return this set plus one capability.
    pub fn with(self, capability: Capability) -> Self {
        Self(self.0 | capability.bit())
    }

    /// Whether the set holds the capability.
    pub fn contains(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    /// Whether every capability of `other` is in this set.
    pub fn contains_all(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Union of two sets.
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether the two sets share at least one capability.
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the capabilities in the set.
    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|c| c.to_string()).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

/// Access rule: the principal must hold every capability in `all_of` and,
/// when `any_of` is non-empty, at least one capability in `any_of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRule {
    /// Capabilities that are all required.
    pub all_of: CapabilitySet,
    /// Capabilities of which one is required.
    pub any_of: CapabilitySet,
}

impl AccessRule {
    /// Any authenticated principal.
    pub const AUTHENTICATED: Self = Self {
        all_of: CapabilitySet(1 << 0),
        any_of: CapabilitySet::EMPTY,
    };

    /// An authenticated administrator or superadmin.
    pub const ADMIN_OR_SUPERADMIN: Self = Self {
        all_of: CapabilitySet(1 << 0),
        any_of: CapabilitySet((1 << 1) | (1 << 2)),
    };

    /// Evaluate the rule against a principal's capabilities.
    pub fn allows(&self, held: CapabilitySet) -> bool {
        held.contains_all(self.all_of) && (self.any_of.is_empty() || held.intersects(self.any_of))
    }
}

/// Mapping from each role to the capabilities it grants.
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    /// Role → capability set. Authentication is added by the enforcer.
    policies: HashMap<UserRole, CapabilitySet>,
}

impl RbacPolicies {
    /// Creates the default policy set.
    pub fn new() -> Self {
        let mut policies = HashMap::new();
        policies.insert(UserRole::Student, CapabilitySet::EMPTY);
        policies.insert(UserRole::Admin, CapabilitySet::of(&[Capability::Admin]));
        policies.insert(
            UserRole::SuperAdmin,
            CapabilitySet::of(&[Capability::SuperAdmin]),
        );
        Self { policies }
    }

    /// Returns the capabilities granted by the given role.
    pub fn capabilities_for_role(&self, role: UserRole) -> CapabilitySet {
        self.policies.get(&role).copied().unwrap_or_default()
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}
