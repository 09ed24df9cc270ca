use serde::{Deserialize, Serialize};

/// Styling configuration for the printable report document.
///
/// The defaults match the patient portal's report theme so a printed
/// report looks like its on-screen counterpart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font stack for body text.
    pub body_font: String,

    /// Brand accent, used for the header rule and logo.
    pub accent_color: String,

    /// Heading and emphasized-value text color.
    pub heading_color: String,

    /// Body text color.
    pub body_color: String,

    /// Secondary text color (subtitles, labels, footer).
    pub muted_color: String,

    /// Page margin in millimetres (applied uniformly).
    pub page_margin_mm: u32,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "'Helvetica Neue', Arial, sans-serif".to_string(),
            accent_color: "#3b82f6".to_string(),
            heading_color: "#1f2937".to_string(),
            body_color: "#374151".to_string(),
            muted_color: "#6b7280".to_string(),
            page_margin_mm: 20,
        }
    }
}
