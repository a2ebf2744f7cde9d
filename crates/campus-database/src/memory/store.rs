//! Shared state of the in-memory store.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use campus_entity::Id;
use campus_entity::announcement::Announcement;
use campus_entity::club::Club;
use campus_entity::event::ClubEvent;
use campus_entity::membership::ClubMembership;
use campus_entity::user::{User, UserRole};

/// One table: rows keyed by ID plus the next value of its sequence.
#[derive(Debug)]
pub(crate) struct Table<T> {
    pub(crate) rows: BTreeMap<Id, T>,
    next_id: Id,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    /// Reserve the next identifier.
    pub(crate) fn next_id(&mut self) -> Id {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Every table of the store.
#[derive(Debug, Default)]
pub(crate) struct MemoryState {
    pub(crate) users: Table<User>,
    pub(crate) clubs: Table<Club>,
    pub(crate) memberships: Table<ClubMembership>,
    pub(crate) events: Table<ClubEvent>,
    pub(crate) announcements: Table<Announcement>,
}

impl MemoryState {
    /// Remove a club together with the rows that reference it.
    pub(crate) fn delete_club_cascade(&mut self, id: Id) -> bool {
        if self.clubs.rows.remove(&id).is_none() {
            return false;
        }
        self.memberships.rows.retain(|_, m| m.club_id != id);
        self.events.rows.retain(|_, e| e.club_id != id);
        true
    }
}

/// In-memory implementation of every repository trait.
///
/// Cloning is cheap and clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub(crate) state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user row. Users are owned elsewhere, so this is the only
    /// way to populate them.
    pub async fn insert_user(
        &self,
        username: &str,
        role: UserRole,
        is_active: bool,
    ) -> User {
        let mut state = self.state.write().await;
        let id = state.users.next_id();
        let user = User {
            id,
            username: username.to_string(),
            email: Some(format!("{username}@campus.local")),
            role,
            is_active,
            created_at: Utc::now(),
        };
        state.users.rows.insert(id, user.clone());
        user
    }

    /// Insert a user row with an explicit ID.
    pub async fn insert_user_with_id(&self, id: Id, username: &str, role: UserRole) -> User {
        let mut state = self.state.write().await;
        let user = User {
            id,
            username: username.to_string(),
            email: Some(format!("{username}@campus.local")),
            role,
            is_active: true,
            created_at: Utc::now(),
        };
        state.users.rows.insert(id, user.clone());
        if state.users.next_id <= id {
            state.users.next_id = id + 1;
        }
        user
    }
}
