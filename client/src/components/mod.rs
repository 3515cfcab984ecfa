//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from the `Store` provided in context and
//! report user intent back to their page through callbacks.

pub mod mentor_card;
pub mod navbar;
pub mod notification_center;
pub mod session_card;
