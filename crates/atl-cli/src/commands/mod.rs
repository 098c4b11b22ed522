pub mod dashboard;
pub mod dispatch;
pub mod init;
pub mod profile;
pub mod project;
pub mod readiness;
pub mod restriction;
pub mod scoring;
pub mod shared;
pub mod task;
