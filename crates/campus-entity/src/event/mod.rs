//! Club event domain entities.

pub mod model;
pub mod status;

pub use model::{ClubEvent, CreateEvent, UpdateEvent};
pub use status::EventStatus;
