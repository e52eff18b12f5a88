//! Domain crate for the VoxNotes backend.
//!
//! Zero internal deps: shared types, the domain error taxonomy, note field
//! validation, and the dashboard query helpers used on fetched note lists.

pub mod dashboard;
pub mod error;
pub mod notes;
pub mod types;
