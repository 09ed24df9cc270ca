use std::sync::Arc;

use nexacare_bedrock::engine::AnalysisEngine;
use nexacare_export::pdf::{BrowserLauncher, PageSetup};
use nexacare_export::styles::DocumentStyles;

use crate::cache::ReportCache;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn AnalysisEngine>,
    pub launcher: Arc<dyn BrowserLauncher>,
    pub styles: DocumentStyles,
    pub page_setup: PageSetup,
    pub reports: ReportCache,
}
