//! Shared types for the employee service
//!
//! Types used by the server and by API clients: the employee models and the
//! unified error/response structures.

pub mod error;
pub mod models;
