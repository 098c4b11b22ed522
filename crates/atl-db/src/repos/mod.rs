//! Repository modules for every persisted entity.
//!
//! Each module adds methods to `AtlService` via `impl AtlService` blocks.

pub mod profile;
pub mod project;
pub mod restriction;
pub mod snapshot;
pub mod task;
