//! Request DTOs with validation.
//!
//! Create and `PUT` bodies require every required writable field; `PATCH`
//! bodies accept any subset. Read-only fields (`id`, `created_by`,
//! timestamps) are not declared and are ignored if sent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use campus_entity::Id;
use campus_entity::announcement::UpdateAnnouncement;
use campus_entity::club::{CreateClub, UpdateClub};
use campus_entity::event::{EventStatus, UpdateEvent};
use campus_entity::membership::{MembershipRole, UpdateMembership};
use campus_service::announcement::CreateAnnouncementRequest;
use campus_service::event::CreateEventRequest;
use campus_service::membership::AddMemberRequest;

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ── Clubs ───────────────────────────────────────────────────────

/// `POST /api/clubs/` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateClubBody {
    /// Club name.
    #[validate(length(min = 1, max = 200, message = "Ensure this field has 1 to 200 characters."))]
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Metadata object.
    pub metadata: Option<Map<String, Value>>,
}

impl From<CreateClubBody> for CreateClub {
    fn from(body: CreateClubBody) -> Self {
        Self {
            name: body.name,
            description: body.description,
            metadata: Value::Object(body.metadata.unwrap_or_default()),
        }
    }
}

/// `PUT /api/clubs/{id}/` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReplaceClubBody {
    /// Club name.
    #[validate(length(min = 1, max = 200, message = "Ensure this field has 1 to 200 characters."))]
    pub name: String,
    /// Description; `null` clears it.
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    /// Metadata object.
    pub metadata: Option<Map<String, Value>>,
}

impl From<ReplaceClubBody> for UpdateClub {
    fn from(body: ReplaceClubBody) -> Self {
        Self {
            name: Some(body.name),
            description: body.description,
            metadata: body.metadata.map(Value::Object),
        }
    }
}

/// `PATCH /api/clubs/{id}/` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PatchClubBody {
    /// Club name.
    #[validate(length(min = 1, max = 200, message = "Ensure this field has 1 to 200 characters."))]
    pub name: Option<String>,
    /// Description; `null` clears it.
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    /// Metadata object.
    pub metadata: Option<Map<String, Value>>,
}

impl From<PatchClubBody> for UpdateClub {
    fn from(body: PatchClubBody) -> Self {
        Self {
            name: body.name,
            description: body.description,
            metadata: body.metadata.map(Value::Object),
        }
    }
}

// ── Memberships ─────────────────────────────────────────────────

/// `POST /api/clubs/{id}/members/` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddMemberBody {
    /// The student to add.
    pub student_id: Id,
    /// Role inside the club; defaults to `member`.
    pub role: Option<MembershipRole>,
}

impl From<AddMemberBody> for AddMemberRequest {
    fn from(body: AddMemberBody) -> Self {
        Self {
            student_id: body.student_id,
            role: body.role,
        }
    }
}

/// `PUT /api/clubs/members/{id}/` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReplaceMembershipBody {
    /// New role.
    pub role: MembershipRole,
}

impl From<ReplaceMembershipBody> for UpdateMembership {
    fn from(body: ReplaceMembershipBody) -> Self {
        Self {
            role: Some(body.role),
        }
    }
}

/// `PATCH /api/clubs/members/{id}/` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PatchMembershipBody {
    /// New role.
    pub role: Option<MembershipRole>,
}

impl From<PatchMembershipBody> for UpdateMembership {
    fn from(body: PatchMembershipBody) -> Self {
        Self { role: body.role }
    }
}

// ── Events ──────────────────────────────────────────────────────

/// `POST /api/clubs/events/` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventBody {
    /// Organising club.
    pub club_id: Id,
    /// Title.
    #[validate(length(min = 1, max = 200, message = "Ensure this field has 1 to 200 characters."))]
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Location.
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub location: Option<String>,
    /// Date and time (RFC 3339).
    pub event_date: DateTime<Utc>,
    /// Initial status.
    pub status: Option<EventStatus>,
}

impl From<CreateEventBody> for CreateEventRequest {
    fn from(body: CreateEventBody) -> Self {
        Self {
            club_id: body.club_id,
            title: body.title,
            description: body.description,
            location: body.location,
            event_date: body.event_date,
            status: body.status,
        }
    }
}

/// `PUT /api/clubs/events/{id}/` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReplaceEventBody {
    /// Organising club.
    pub club_id: Id,
    /// Title.
    #[validate(length(min = 1, max = 200, message = "Ensure this field has 1 to 200 characters."))]
    pub title: String,
    /// Description; `null` clears it.
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    /// Location; `null` clears it.
    #[serde(default, deserialize_with = "nullable")]
    pub location: Option<Option<String>>,
    /// Date and time.
    pub event_date: DateTime<Utc>,
    /// Status.
    pub status: Option<EventStatus>,
}

impl From<ReplaceEventBody> for UpdateEvent {
    fn from(body: ReplaceEventBody) -> Self {
        Self {
            club_id: Some(body.club_id),
            title: Some(body.title),
            description: body.description,
            location: body.location,
            event_date: Some(body.event_date),
            status: body.status,
        }
    }
}

/// `PATCH /api/clubs/events/{id}/` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PatchEventBody {
    /// Organising club.
    pub club_id: Option<Id>,
    /// Title.
    #[validate(length(min = 1, max = 200, message = "Ensure this field has 1 to 200 characters."))]
    pub title: Option<String>,
    /// Description; `null` clears it.
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    /// Location; `null` clears it.
    #[serde(default, deserialize_with = "nullable")]
    pub location: Option<Option<String>>,
    /// Date and time.
    pub event_date: Option<DateTime<Utc>>,
    /// Status (approve / reject).
    pub status: Option<EventStatus>,
}

impl From<PatchEventBody> for UpdateEvent {
    fn from(body: PatchEventBody) -> Self {
        Self {
            club_id: body.club_id,
            title: body.title,
            description: body.description,
            location: body.location,
            event_date: body.event_date,
            status: body.status,
        }
    }
}

/// `?club_id=&page=&per_page=` for the event list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventListQuery {
    /// Restrict to one club.
    pub club_id: Option<Id>,
    /// Page number.
    pub page: Option<u64>,
    /// Items per page.
    pub per_page: Option<u64>,
}

// ── Announcements ───────────────────────────────────────────────

/// `POST /api/announcements/create/` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAnnouncementBody {
    /// Headline.
    #[validate(length(min = 1, max = 255, message = "Ensure this field has 1 to 255 characters."))]
    pub title: String,
    /// Body text.
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub content: String,
    /// Visibility; defaults to active.
    pub is_active: Option<bool>,
}

impl From<CreateAnnouncementBody> for CreateAnnouncementRequest {
    fn from(body: CreateAnnouncementBody) -> Self {
        Self {
            title: body.title,
            content: body.content,
            is_active: body.is_active,
        }
    }
}

/// `PUT /api/announcements/{id}/` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReplaceAnnouncementBody {
    /// Headline.
    #[validate(length(min = 1, max = 255, message = "Ensure this field has 1 to 255 characters."))]
    pub title: String,
    /// Body text.
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub content: String,
    /// Visibility.
    pub is_active: Option<bool>,
}

impl From<ReplaceAnnouncementBody> for UpdateAnnouncement {
    fn from(body: ReplaceAnnouncementBody) -> Self {
        Self {
            title: Some(body.title),
            content: Some(body.content),
            is_active: body.is_active,
        }
    }
}

/// `PATCH /api/announcements/{id}/` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PatchAnnouncementBody {
    /// Headline.
    #[validate(length(min = 1, max = 255, message = "Ensure this field has 1 to 255 characters."))]
    pub title: Option<String>,
    /// Body text.
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub content: Option<String>,
    /// Visibility.
    pub is_active: Option<bool>,
}

impl From<PatchAnnouncementBody> for UpdateAnnouncement {
    fn from(body: PatchAnnouncementBody) -> Self {
        Self {
            title: body.title,
            content: body.content,
            is_active: body.is_active,
        }
    }
}
