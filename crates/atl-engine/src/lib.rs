//! # atl-engine
//!
//! Pure computations over an immutable [`Snapshot`] of tasks and restriction
//! edges:
//! - [`readiness`]: which tasks are ready to start, blocked, or blocking others
//! - [`scoring`]: priority and points derived from task dates
//! - [`dashboard`]: time-window buckets composed with readiness
//! - [`graph`]: wait-chain reachability and cycle detection
//!
//! Nothing here performs I/O or mutates its inputs. Calling any function twice
//! with the same snapshot yields the same result.

pub mod dashboard;
pub mod graph;
pub mod readiness;
pub mod scoring;
pub mod snapshot;

#[cfg(test)]
mod test_support;

pub use dashboard::DashboardOptions;
pub use snapshot::Snapshot;
