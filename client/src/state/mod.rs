//! Shared client-side state.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `mentors`, `sessions`, `notifications`)
//! and aggregated by `store`, which owns the one dispatch point.

pub mod auth;
pub mod mentors;
pub mod notifications;
pub mod sessions;
pub mod store;
