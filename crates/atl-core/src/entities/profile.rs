use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A person who can be assigned tasks, used for name resolution.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub display_name: String,
}
