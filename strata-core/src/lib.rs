//! Strata Core
//!
//! Core types for the Strata analytics platform SDK.
//!
//! This crate contains:
//! - Domain types: Platform entities (Job, Analytic, User, etc.)
//! - DTOs: Request and query payloads sent to the platform API
//!
//! Nothing here performs I/O; the HTTP layer lives in `strata-client`.

pub mod domain;
pub mod dto;
