//! nexacare-export
//!
//! Report rendering and PDF export: Markdown-to-styled-HTML conversion,
//! the printable report document, and PDF printing through a headless
//! Chromium.

pub mod document;
pub mod error;
pub mod markdown;
pub mod pdf;
pub mod styles;

pub use error::ExportError;
