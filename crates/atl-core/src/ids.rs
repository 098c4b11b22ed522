//! ID prefixes for every persisted entity.
//!
//! IDs take the form `{prefix}-{8 hex chars}`, e.g. `tsk-a3f8b2c1`.

pub const PREFIX_TASK: &str = "tsk";
pub const PREFIX_RESTRICTION: &str = "rst";
pub const PREFIX_PROFILE: &str = "usr";
pub const PREFIX_PROJECT: &str = "prj";

/// All prefixes, in table creation order.
pub const ALL_PREFIXES: [&str; 4] = [PREFIX_PROJECT, PREFIX_PROFILE, PREFIX_TASK, PREFIX_RESTRICTION];
