pub mod analyze;
pub mod assessments;
pub mod chat;
pub mod export;
pub mod health;
pub mod reports;
