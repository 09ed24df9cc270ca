use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::submission::{AnsweredQuestion, Demographics};

/// The structured outcome of an analysis invocation. This is what the
/// results page renders and what the PDF endpoint accepts back.
///
/// Every field tolerates absence at the serde layer so endpoint validation
/// owns the failure mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisResult {
    #[serde(default)]
    pub report_id: String,
    #[serde(default)]
    pub assessment_id: String,
    #[serde(default)]
    pub assessment_name: String,
    #[serde(default)]
    pub user_info: Demographics,
    #[serde(default)]
    pub timestamp: jiff::Timestamp,
    /// Markdown-flavored report text produced by the model.
    #[serde(default)]
    pub analysis: String,
    #[serde(default)]
    pub raw_answers: Vec<AnsweredQuestion>,
    #[serde(default)]
    pub status: ReportStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Completed,
    Failed,
}
