//! Repository trait implementations for [`MemoryStore`].

use async_trait::async_trait;
use chrono::Utc;

use campus_core::error::AppError;
use campus_core::result::AppResult;
use campus_core::types::pagination::{PageRequest, PageResponse};
use campus_entity::Id;
use campus_entity::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};
use campus_entity::club::{Club, CreateClub, DUPLICATE_CLUB_NAME_MESSAGE, UpdateClub};
use campus_entity::event::{ClubEvent, CreateEvent, UpdateEvent};
use campus_entity::membership::{
    ClubMembership, CreateMembership, DUPLICATE_MEMBERSHIP_MESSAGE, UpdateMembership,
};
use campus_entity::user::User;

use super::store::{MemoryState, MemoryStore};
use crate::repositories::unknown_author;
use crate::repositories::{
    AnnouncementRepository, ClubRepository, EventRepository, MembershipRepository, UserRepository,
};

fn missing_club(club_id: Id) -> AppError {
    AppError::field_validation("club_id", format!("Club {club_id} does not exist."))
}

fn name_taken(state: &MemoryState, name: &str, except: Option<Id>) -> bool {
    state
        .clubs
        .rows
        .values()
        .any(|c| c.name == name && Some(c.id) != except)
}

#[async_trait]
impl ClubRepository for MemoryStore {
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Club>> {
        Ok(self.state.read().await.clubs.rows.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Club>> {
        let state = self.state.read().await;
        Ok(state.clubs.rows.values().find(|c| c.name == name).cloned())
    }

    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Club>> {
        let mut clubs: Vec<Club> = self.state.read().await.clubs.rows.values().cloned().collect();
        clubs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(page.paginate(clubs))
    }

    async fn create(&self, data: &CreateClub) -> AppResult<Club> {
        let mut state = self.state.write().await;
        if name_taken(&state, &data.name, None) {
            return Err(AppError::field_validation("name", DUPLICATE_CLUB_NAME_MESSAGE));
        }
        let now = Utc::now();
        let club = Club {
            id: state.clubs.next_id(),
            name: data.name.clone(),
            description: data.description.clone(),
            metadata: data.metadata.clone(),
            created_at: now,
            updated_at: now,
        };
        state.clubs.rows.insert(club.id, club.clone());
        Ok(club)
    }

    async fn update(&self, id: Id, changes: &UpdateClub) -> AppResult<Option<Club>> {
        let mut state = self.state.write().await;
        if !state.clubs.rows.contains_key(&id) {
            return Ok(None);
        }
        if let Some(name) = &changes.name {
            if name_taken(&state, name, Some(id)) {
                return Err(AppError::field_validation("name", DUPLICATE_CLUB_NAME_MESSAGE));
            }
        }
        let Some(club) = state.clubs.rows.get_mut(&id) else {
            return Ok(None);
        };
        changes.apply_to(club);
        club.updated_at = Utc::now();
        Ok(Some(club.clone()))
    }

    async fn delete(&self, id: Id) -> AppResult<bool> {
        Ok(self.state.write().await.delete_club_cascade(id))
    }
}

#[async_trait]
impl MembershipRepository for MemoryStore {
    async fn find_by_id(&self, id: Id) -> AppResult<Option<ClubMembership>> {
        Ok(self.state.read().await.memberships.rows.get(&id).cloned())
    }

    async fn find_by_club_and_student(
        &self,
        club_id: Id,
        student_id: Id,
    ) -> AppResult<Option<ClubMembership>> {
        let state = self.state.read().await;
        Ok(state
            .memberships
            .rows
            .values()
            .find(|m| m.club_id == club_id && m.student_id == student_id)
            .cloned())
    }

    async fn list_by_club(
        &self,
        club_id: Id,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ClubMembership>> {
        let state = self.state.read().await;
        // BTreeMap iteration is already ordered by id.
        let memberships: Vec<ClubMembership> = state
            .memberships
            .rows
            .values()
            .filter(|m| m.club_id == club_id)
            .cloned()
            .collect();
        Ok(page.paginate(memberships))
    }

    async fn create(&self, data: &CreateMembership) -> AppResult<ClubMembership> {
        let mut state = self.state.write().await;
        if !state.clubs.rows.contains_key(&data.club_id) {
            return Err(AppError::not_found("Club not found."));
        }
        if !state.users.rows.contains_key(&data.student_id) {
            return Err(AppError::field_validation(
                "student_id",
                format!("Student {} does not exist.", data.student_id),
            ));
        }
        let duplicate = state
            .memberships
            .rows
            .values()
            .any(|m| m.club_id == data.club_id && m.student_id == data.student_id);
        if duplicate {
            return Err(AppError::validation(DUPLICATE_MEMBERSHIP_MESSAGE));
        }

        let now = Utc::now();
        let membership = ClubMembership {
            id: state.memberships.next_id(),
            club_id: data.club_id,
            student_id: data.student_id,
            role: data.role,
            joined_at: now,
            updated_at: now,
        };
        state.memberships.rows.insert(membership.id, membership.clone());
        Ok(membership)
    }

    async fn update(
        &self,
        id: Id,
        changes: &UpdateMembership,
    ) -> AppResult<Option<ClubMembership>> {
        let mut state = self.state.write().await;
        let Some(membership) = state.memberships.rows.get_mut(&id) else {
            return Ok(None);
        };
        if changes.role.is_some() {
            changes.apply_to(membership);
            membership.updated_at = Utc::now();
        }
        Ok(Some(membership.clone()))
    }

    async fn delete(&self, id: Id) -> AppResult<bool> {
        Ok(self.state.write().await.memberships.rows.remove(&id).is_some())
    }
}

#[async_trait]
impl EventRepository for MemoryStore {
    async fn find_by_id(&self, id: Id) -> AppResult<Option<ClubEvent>> {
        Ok(self.state.read().await.events.rows.get(&id).cloned())
    }

    async fn list(
        &self,
        club_id: Option<Id>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ClubEvent>> {
        let state = self.state.read().await;
        let mut events: Vec<ClubEvent> = state
            .events
            .rows
            .values()
            .filter(|e| club_id.is_none_or(|id| e.club_id == id))
            .cloned()
            .collect();
        events.sort_by(|a, b| b.event_date.cmp(&a.event_date).then(b.id.cmp(&a.id)));
        Ok(page.paginate(events))
    }

    async fn create(&self, data: &CreateEvent) -> AppResult<ClubEvent> {
        let mut state = self.state.write().await;
        if !state.clubs.rows.contains_key(&data.club_id) {
            return Err(missing_club(data.club_id));
        }
        if !state.users.rows.contains_key(&data.created_by) {
            return Err(unknown_author(data.created_by));
        }
        let now = Utc::now();
        let event = ClubEvent {
            id: state.events.next_id(),
            club_id: data.club_id,
            title: data.title.clone(),
            description: data.description.clone(),
            location: data.location.clone(),
            event_date: data.event_date,
            status: data.status,
            created_by: data.created_by,
            created_at: now,
            updated_at: now,
        };
        state.events.rows.insert(event.id, event.clone());
        Ok(event)
    }

    async fn update(&self, id: Id, changes: &UpdateEvent) -> AppResult<Option<ClubEvent>> {
        let mut state = self.state.write().await;
        if let Some(club_id) = changes.club_id {
            if !state.clubs.rows.contains_key(&club_id) {
                return Err(missing_club(club_id));
            }
        }
        let Some(event) = state.events.rows.get_mut(&id) else {
            return Ok(None);
        };
        changes.apply_to(event);
        event.updated_at = Utc::now();
        Ok(Some(event.clone()))
    }

    async fn delete(&self, id: Id) -> AppResult<bool> {
        Ok(self.state.write().await.events.rows.remove(&id).is_some())
    }
}

#[async_trait]
impl AnnouncementRepository for MemoryStore {
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Announcement>> {
        Ok(self.state.read().await.announcements.rows.get(&id).cloned())
    }

    async fn list_active(&self, page: &PageRequest) -> AppResult<PageResponse<Announcement>> {
        let state = self.state.read().await;
        let mut announcements: Vec<Announcement> = state
            .announcements
            .rows
            .values()
            .filter(|a| a.is_active)
            .cloned()
            .collect();
        announcements.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(page.paginate(announcements))
    }

    async fn create(&self, data: &CreateAnnouncement) -> AppResult<Announcement> {
        let mut state = self.state.write().await;
        if !state.users.rows.contains_key(&data.created_by) {
            return Err(unknown_author(data.created_by));
        }
        let now = Utc::now();
        let announcement = Announcement {
            id: state.announcements.next_id(),
            title: data.title.clone(),
            content: data.content.clone(),
            created_by: data.created_by,
            created_at: now,
            updated_at: now,
            is_active: data.is_active,
        };
        state
            .announcements
            .rows
            .insert(announcement.id, announcement.clone());
        Ok(announcement)
    }

    async fn update(
        &self,
        id: Id,
        changes: &UpdateAnnouncement,
    ) -> AppResult<Option<Announcement>> {
        let mut state = self.state.write().await;
        let Some(announcement) = state.announcements.rows.get_mut(&id) else {
            return Ok(None);
        };
        changes.apply_to(announcement);
        announcement.updated_at = Utc::now();
        Ok(Some(announcement.clone()))
    }

    async fn delete(&self, id: Id) -> AppResult<bool> {
        Ok(self.state.write().await.announcements.rows.remove(&id).is_some())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Id) -> AppResult<Option<User>> {
        Ok(self.state.read().await.users.rows.get(&id).cloned())
    }
}
