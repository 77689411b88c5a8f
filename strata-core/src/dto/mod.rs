//! Data Transfer Objects for the platform API
//!
//! Request bodies and query-string parameters sent by the client. Response
//! bodies deserialize straight into the domain types.

pub mod analytic;
pub mod application;
pub mod job;
pub mod user;
