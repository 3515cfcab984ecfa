//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guarding, fetching on mount,
//! dialogs) and delegates rendering details to `components`.

pub mod dashboard;
pub mod finder;
pub mod home;
pub mod login;
pub mod mentor_profile;
pub mod profile;
pub mod register;
