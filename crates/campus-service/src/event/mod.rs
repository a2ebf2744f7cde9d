//! Club event scheduling and approval.

pub mod service;

pub use service::{CreateEventRequest, EventService};
