pub mod analysis;
pub mod answer;
pub mod question;
pub mod submission;
