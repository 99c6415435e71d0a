//! HTTP Module
//!
//! Routes, handlers and custom extractors.

pub mod extractors;
pub mod handlers;
pub mod routes;
