//! Networking modules for the SkillSync REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `credentials` owns the persisted token pair, `http` applies it to requests
//! and runs the refresh policy, `api` maps each remote operation onto a
//! request, and `types` defines the JSON schema.

pub mod api;
pub mod credentials;
pub mod http;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
