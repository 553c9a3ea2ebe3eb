//! Unified domain model for the resume editor.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep editor state and document shapes free of presentation detail.
//!
//! # Invariants
//! - `PersonalInfo` exclusively owns its named lists; no sharing.
//! - Committed list entries are append/remove only, never edited in place.

pub mod item;
pub mod profile;
