//! HTTP middleware

pub mod middleware;
