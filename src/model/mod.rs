//! Data transfer objects shared by the HTTP status surface.

pub mod api;
pub mod status;
