//! Async handlers that drive each remote operation through its lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these from `spawn_local`. Each handler dispatches a pending
//! transition, awaits the API call, then dispatches the fulfilled or rejected
//! transition. Handlers also return the outcome so the caller can navigate or
//! close a dialog without re-reading the store.
//!
//! ERROR HANDLING
//! ==============
//! Failures are converted to an `ErrorPayload` using the operation's fallback
//! message. Non-critical reads (skills, ratings) log and yield an empty list.

pub mod auth;
pub mod mentors;
pub mod sessions;

#[cfg(test)]
pub(crate) mod recorder;
