//! Club domain entities.

pub mod model;

pub use model::{Club, CreateClub, DUPLICATE_CLUB_NAME_MESSAGE, UpdateClub};
