//! Core domain types
//!
//! This module contains the entities returned by the Strata platform API.
//! They are read-only snapshots: the platform owns their state and the SDK
//! only fetches them on demand.

pub mod analytic;
pub mod application;
pub mod data;
pub mod job;
pub mod user;
