//! Application state shared across all handlers and extractors.

use std::sync::Arc;
use std::time::Instant;

use campus_auth::jwt::JwtDecoder;
use campus_auth::rbac::RbacEnforcer;
use campus_core::config::AppConfig;
use campus_database::Stores;
use campus_service::{AnnouncementService, ClubService, EventService, MembershipService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// When the server started, for uptime reporting
    pub started_at: Instant,

    // ── Infrastructure ───────────────────────────────────────
    /// Repositories for the configured provider
    pub stores: Stores,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Capability-based access control enforcer
    pub rbac_enforcer: Arc<RbacEnforcer>,

    // ── Services ─────────────────────────────────────────────
    /// Club service
    pub club_service: Arc<ClubService>,
    /// Membership service
    pub membership_service: Arc<MembershipService>,
    /// Club event service
    pub event_service: Arc<EventService>,
    /// Announcement service
    pub announcement_service: Arc<AnnouncementService>,
}

impl AppState {
    /// Wires services and auth around the given stores.
    pub fn new(config: AppConfig, stores: Stores) -> Self {
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let rbac_enforcer = Arc::new(RbacEnforcer::new());

        let club_service = Arc::new(ClubService::new(Arc::clone(&stores.clubs)));
        let membership_service = Arc::new(MembershipService::new(
            Arc::clone(&stores.clubs),
            Arc::clone(&stores.memberships),
            Arc::clone(&stores.users),
        ));
        let event_service = Arc::new(EventService::new(
            Arc::clone(&stores.clubs),
            Arc::clone(&stores.events),
        ));
        let announcement_service = Arc::new(AnnouncementService::new(Arc::clone(
            &stores.announcements,
        )));

        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
            stores,
            jwt_decoder,
            rbac_enforcer,
            club_service,
            membership_service,
            event_service,
            announcement_service,
        }
    }
}
