//! PDF printing through headless Chromium.
//!
//! The rendered report page is written to a temp file, loaded over
//! `file://`, and printed via the DevTools protocol. The browser is a
//! fresh process per export and is always shut down afterwards, on the
//! failure path too; a shutdown failure is logged, never allowed to mask
//! the print error.

use std::ffi::OsStr;
use std::io::Write;
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use regex::Regex;
use tracing::{info, warn};

use crate::error::ExportError;

// ── Page setup ───────────────────────────────────────────────────────────────

/// Print settings for a report export. Defaults to A4 with 20mm margins
/// and backgrounds on, so the styled boxes survive printing.
#[derive(Debug, Clone)]
pub struct PageSetup {
    pub paper_width_in: f64,
    pub paper_height_in: f64,
    pub margin_in: f64,
    pub print_background: bool,
    /// Ceiling for page load and print operations.
    pub load_timeout: Duration,
}

impl Default for PageSetup {
    fn default() -> Self {
        PageSetup {
            paper_width_in: 8.27,
            paper_height_in: 11.69,
            margin_in: 20.0 / 25.4,
            print_background: true,
            load_timeout: Duration::from_secs(30),
        }
    }
}

// ── Browser seam ─────────────────────────────────────────────────────────────

/// One launched browser, good for printing and then closing.
pub trait ReportBrowser {
    fn print_to_pdf(&mut self, html: &str, setup: &PageSetup) -> Result<Vec<u8>, ExportError>;
    fn close(&mut self) -> Result<(), ExportError>;
}

/// Launches browsers. The server holds one launcher for its lifetime;
/// tests substitute a scripted implementation.
pub trait BrowserLauncher: Send + Sync {
    fn launch(&self) -> Result<Box<dyn ReportBrowser>, ExportError>;
}

/// Production launcher: a local Chromium in headless mode.
#[derive(Debug, Default)]
pub struct ChromiumLauncher {
    /// Explicit browser binary. `None` falls back to auto-detection.
    pub browser_path: Option<PathBuf>,
}

impl ChromiumLauncher {
    pub fn new(browser_path: Option<PathBuf>) -> Self {
        ChromiumLauncher { browser_path }
    }
}

impl BrowserLauncher for ChromiumLauncher {
    fn launch(&self) -> Result<Box<dyn ReportBrowser>, ExportError> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .args(vec![
                OsStr::new("--disable-setuid-sandbox"),
                OsStr::new("--disable-dev-shm-usage"),
                OsStr::new("--disable-gpu"),
            ])
            .path(self.browser_path.clone())
            .build()
            .map_err(|e| ExportError::Pdf(e.to_string()))?;

        let browser = Browser::new(options).map_err(|e| ExportError::Pdf(e.to_string()))?;
        Ok(Box::new(ChromiumBrowser {
            browser: Some(browser),
        }))
    }
}

struct ChromiumBrowser {
    browser: Option<Browser>,
}

impl ReportBrowser for ChromiumBrowser {
    fn print_to_pdf(&mut self, html: &str, setup: &PageSetup) -> Result<Vec<u8>, ExportError> {
        let browser = self
            .browser
            .as_ref()
            .ok_or_else(|| ExportError::Pdf("browser already closed".to_string()))?;

        // Loaded over file:// because the DevTools protocol has no direct
        // set-content call.
        let mut page_file = tempfile::Builder::new()
            .prefix("nexacare-report-")
            .suffix(".html")
            .tempfile()
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        page_file
            .write_all(html.as_bytes())
            .and_then(|()| page_file.flush())
            .map_err(|e| ExportError::Pdf(e.to_string()))?;

        let url = format!("file://{}", page_file.path().display());

        let tab = browser
            .new_tab()
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        tab.set_default_timeout(setup.load_timeout);
        tab.navigate_to(&url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| ExportError::Pdf(e.to_string()))?;

        let print_options = PrintToPdfOptions {
            print_background: Some(setup.print_background),
            paper_width: Some(setup.paper_width_in),
            paper_height: Some(setup.paper_height_in),
            margin_top: Some(setup.margin_in),
            margin_bottom: Some(setup.margin_in),
            margin_left: Some(setup.margin_in),
            margin_right: Some(setup.margin_in),
            ..PrintToPdfOptions::default()
        };

        let pdf = tab
            .print_to_pdf(Some(print_options))
            .map_err(|e| ExportError::Pdf(e.to_string()))?;

        info!(bytes = pdf.len(), "report printed");
        Ok(pdf)
    }

    fn close(&mut self) -> Result<(), ExportError> {
        // Dropping the handle shuts the browser process down.
        self.browser.take();
        Ok(())
    }
}

// ── Export orchestration ─────────────────────────────────────────────────────

/// Print rendered HTML to PDF bytes, closing the browser in every path.
pub fn export_pdf(
    launcher: &dyn BrowserLauncher,
    html: &str,
    setup: &PageSetup,
) -> Result<Vec<u8>, ExportError> {
    let mut browser = launcher.launch()?;
    let printed = browser.print_to_pdf(html, setup);
    if let Err(close_error) = browser.close() {
        warn!(error = %close_error, "browser close failed after print");
    }
    printed
}

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Download filename for a report: whitespace runs become underscores.
pub fn report_filename(assessment_name: &str) -> String {
    format!("{}_Report.pdf", WHITESPACE.replace_all(assessment_name, "_"))
}
