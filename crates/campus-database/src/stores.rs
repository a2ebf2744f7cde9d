//! Repository set selected by configuration.

use std::sync::Arc;

use tracing::info;

use campus_core::config::{DatabaseConfig, SeedUser};
use campus_core::error::AppError;
use campus_core::result::AppResult;
use campus_entity::user::UserRole;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{
    AnnouncementRepository, ClubRepository, EventRepository, MembershipRepository,
    PgAnnouncementRepository, PgClubRepository, PgEventRepository, PgMembershipRepository,
    PgUserRepository, UserRepository,
};

#[derive(Debug, Clone)]
enum Backend {
    Postgres(DatabasePool),
    Memory,
}

/// Every repository the services need, backed by one provider.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Clubs.
    pub clubs: Arc<dyn ClubRepository>,
    /// Club memberships.
    pub memberships: Arc<dyn MembershipRepository>,
    /// Club events.
    pub events: Arc<dyn EventRepository>,
    /// Announcements.
    pub announcements: Arc<dyn AnnouncementRepository>,
    /// Read-only user lookup.
    pub users: Arc<dyn UserRepository>,
    backend: Backend,
}

impl Stores {
    /// Build the stores for the configured provider.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL store");
                let db = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(db.pool()).await?;
                }
                Ok(Self::postgres(db))
            }
            "memory" => {
                info!("Initializing in-memory store");
                let store = MemoryStore::new();
                seed_users(&store, &config.seed_users).await?;
                Ok(Self::from_memory(store))
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// PostgreSQL-backed stores sharing one pool.
    pub fn postgres(db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            clubs: Arc::new(PgClubRepository::new(pool.clone())),
            memberships: Arc::new(PgMembershipRepository::new(pool.clone())),
            events: Arc::new(PgEventRepository::new(pool.clone())),
            announcements: Arc::new(PgAnnouncementRepository::new(pool.clone())),
            users: Arc::new(PgUserRepository::new(pool)),
            backend: Backend::Postgres(db),
        }
    }

    /// Fresh in-memory stores.
    pub fn memory() -> Self {
        Self::from_memory(MemoryStore::new())
    }

    /// Stores sharing an existing in-memory store.
    pub fn from_memory(store: MemoryStore) -> Self {
        Self {
            clubs: Arc::new(store.clone()),
            memberships: Arc::new(store.clone()),
            events: Arc::new(store.clone()),
            announcements: Arc::new(store.clone()),
            users: Arc::new(store),
            backend: Backend::Memory,
        }
    }

    /// Name of the active provider.
    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Postgres(_) => "postgres",
            Backend::Memory => "memory",
        }
    }

    /// Check that the backend is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.backend {
            Backend::Postgres(db) => db.health_check().await,
            Backend::Memory => Ok(true),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Backend::Postgres(db) = &self.backend {
            db.close().await;
        }
    }
}

/// Preload configured users so memberships can reference them.
async fn seed_users(store: &MemoryStore, users: &[SeedUser]) -> AppResult<()> {
    for seed in users {
        let role: UserRole = seed.role.parse().map_err(|e: AppError| {
            AppError::configuration(format!(
                "Invalid role for seed user '{}': {}",
                seed.username, e.message
            ))
        })?;
        store.insert_user_with_id(seed.id, &seed.username, role).await;
    }
    if !users.is_empty() {
        info!(count = users.len(), "Seeded in-memory users");
    }
    Ok(())
}
