//! # atl-core
//!
//! Core types, ID prefixes, and error types for Atelier.
//!
//! This crate provides the foundational types shared across all Atelier crates:
//! - Entity structs for tasks, restriction edges, profiles, and projects
//! - Status enums with state machine transitions
//! - ID prefix constants
//! - Cross-cutting error types
//! - Response types produced by the readiness, scoring, and dashboard queries

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
