//! nexacare-core
//!
//! Pure domain types for the NexaCare assessment pipeline and report
//! identifier conventions. No AWS, HTTP, or database dependency; this is
//! the shared vocabulary of the system.

pub mod models;
pub mod report_id;
