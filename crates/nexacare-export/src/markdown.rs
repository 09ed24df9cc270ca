//! Markdown-to-HTML conversion for report documents.
//!
//! Covers the subset of Markdown the analysis model is instructed to emit:
//! three heading levels, bulleted and numbered list items, bold, italic,
//! and horizontal rules. Every element carries its styles inline so the
//! printed page needs no external stylesheet.

use std::sync::LazyLock;

use regex::Regex;

static HEADING1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());
static HEADING2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());
static HEADING3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());
static STAR_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\* (.*)$").unwrap());
static BULLET_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^• (.*)$").unwrap());
static NUMBERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\d+\. (.*)$").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());

const HEADING1_TAG: &str = r#"<h1 style="color: #1f2937; font-size: 28px; font-weight: bold; margin: 20px 0 15px 0; border-bottom: 2px solid #3b82f6; padding-bottom: 10px;">$1</h1>"#;
const HEADING2_TAG: &str = r#"<h2 style="color: #374151; font-size: 22px; font-weight: 600; margin: 25px 0 12px 0;">$1</h2>"#;
const HEADING3_TAG: &str = r#"<h3 style="color: #4b5563; font-size: 18px; font-weight: 500; margin: 20px 0 10px 0;">$1</h3>"#;
const LIST_ITEM_TAG: &str = r#"<li style="margin: 8px 0;">$1</li>"#;
const BOLD_TAG: &str = r#"<strong style="font-weight: 600;">$1</strong>"#;
const ITALIC_TAG: &str = r#"<em style="font-style: italic;">$1</em>"#;
const RULE_TAG: &str = r#"<hr style="margin: 25px 0; border: none; border-top: 1px solid #e5e7eb;">"#;
const PARAGRAPH_OPEN: &str = r#"<p style="margin: 15px 0; line-height: 1.6;">"#;

/// Convert analysis Markdown to styled HTML.
///
/// Structural conversions run line by line; heading markers must open the
/// line, and `---` becomes a rule wherever it appears. Lines left over
/// after conversion are wrapped as paragraphs, blank lines are dropped.
pub fn to_html(markdown: &str) -> String {
    let html = HEADING1.replace_all(markdown, HEADING1_TAG);
    let html = HEADING2.replace_all(&html, HEADING2_TAG);
    let html = HEADING3.replace_all(&html, HEADING3_TAG);
    let html = STAR_ITEM.replace_all(&html, LIST_ITEM_TAG);
    let html = BULLET_ITEM.replace_all(&html, LIST_ITEM_TAG);
    let html = NUMBERED_ITEM.replace_all(&html, LIST_ITEM_TAG);
    let html = BOLD.replace_all(&html, BOLD_TAG);
    let html = ITALIC.replace_all(&html, ITALIC_TAG);
    let html = html.replace("---", RULE_TAG);

    let mut out = String::with_capacity(html.len() + html.len() / 4);
    for line in html.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        if is_block_element(line) {
            out.push_str(line);
        } else {
            out.push_str(PARAGRAPH_OPEN);
            out.push_str(line);
            out.push_str("</p>");
        }
    }
    out
}

fn is_block_element(line: &str) -> bool {
    line.starts_with("<h1")
        || line.starts_with("<h2")
        || line.starts_with("<h3")
        || line.starts_with("<li")
        || line.starts_with("<hr")
}
