//! Entity structs for all Atelier domain objects.
//!
//! Each entity maps to a table in the reference libSQL store. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod profile;
mod project;
mod restriction;
mod task;

pub use profile::Profile;
pub use project::Project;
pub use restriction::{NewRestriction, RestrictionEdge};
pub use task::{Task, normalize_assignees};
