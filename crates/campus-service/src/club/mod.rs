//! Club CRUD.

pub mod service;

pub use service::ClubService;
