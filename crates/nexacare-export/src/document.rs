//! The printable report document.
//!
//! Assembles a complete HTML page from an analysis result: branded
//! header, patient information grid, the converted analysis body, and
//! the fixed disclaimer and footer blocks.

use jiff::Timestamp;
use serde::Serialize;
use tera::{Context, Tera};

use nexacare_core::models::analysis::AnalysisResult;

use crate::error::ExportError;
use crate::markdown;
use crate::styles::DocumentStyles;

const REPORT_TEMPLATE: &str = include_str!("../templates/report.html");

#[derive(Serialize)]
struct PatientInfo {
    full_name: String,
    age: String,
    gender: String,
    phone_number: String,
    email_address: String,
    residence: String,
}

#[derive(Serialize)]
struct ReportContext<'a> {
    assessment_name: &'a str,
    report_id: &'a str,
    generated_on: String,
    generated_at: String,
    analysis: String,
    patient: PatientInfo,
    styles: &'a DocumentStyles,
}

/// Render the full report page for a completed analysis.
///
/// The header date comes from the submission timestamp; the footer
/// carries the render time. Missing demographics render as blank cells
/// rather than collapsing the grid.
pub fn render_document(
    result: &AnalysisResult,
    styles: &DocumentStyles,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template("report.html", REPORT_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let user = &result.user_info;
    let context = ReportContext {
        assessment_name: &result.assessment_name,
        report_id: &result.report_id,
        generated_on: result.timestamp.strftime("%B %-d, %Y").to_string(),
        generated_at: Timestamp::now()
            .strftime("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        analysis: markdown::to_html(&result.analysis),
        patient: PatientInfo {
            full_name: user.full_name.clone().unwrap_or_default(),
            age: user.age.map(|a| format!("{a} years")).unwrap_or_default(),
            gender: user.gender.clone().unwrap_or_default(),
            phone_number: user.phone_number.clone().unwrap_or_default(),
            email_address: user.email_address.clone().unwrap_or_default(),
            residence: user.place_of_residence.clone().unwrap_or_default(),
        },
        styles,
    };

    let value = serde_json::to_value(&context)?;
    let tera_context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render("report.html", &tera_context)?;
    Ok(rendered)
}
