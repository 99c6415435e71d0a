//! Middleware
//!
//! Tower middleware for request processing.

pub mod cors;
pub mod logging;
pub mod visits;

pub use visits::{count_visits, VisitCounter};
