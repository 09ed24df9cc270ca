//! nexacare-realtime
//!
//! Live appointment and notification state for portal clients: one initial
//! table fetch plus a Postgres LISTEN/NOTIFY change feed merged into local
//! view state.

pub mod appointments;
pub mod config;
pub mod error;
pub mod event;
pub mod notifications;
pub mod subscription;

pub use error::RealtimeError;
