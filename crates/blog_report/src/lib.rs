//! blog_report — rendering of the validation report.
//!
//! The renderer reads the report only; it never recomputes findings. Two
//! frontends: human-readable log lines (the orchestrator prints these) and
//! canonical JSON bytes (stable for diffing and archiving). Rendering is
//! deliberately outside the validator's contract.

#![forbid(unsafe_code)]

use blog_validate::{Severity, ValidationReport};

/// How many error lines the text rendering shows before truncating.
pub const DEFAULT_ERROR_PREVIEW: usize = 10;

/// Render the report as log lines: summary header, an error preview capped
/// at `preview` lines, all warnings, and a final pass/fail line.
pub fn render_text(report: &ValidationReport, preview: usize) -> String {
    let s = &report.summary;
    let mut out = String::new();

    out.push_str(&format!(
        "validated {} users and {} articles ({} unique user ids, {} unique article ids)\n",
        s.users_total, s.articles_total, s.unique_user_ids, s.unique_article_ids
    ));

    let errors: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .collect();
    if !errors.is_empty() {
        out.push_str(&format!("{} error(s):\n", errors.len()));
        for finding in errors.iter().take(preview) {
            out.push_str(&format!("  - {finding}\n"));
        }
        if errors.len() > preview {
            out.push_str(&format!("  ... and {} more error(s)\n", errors.len() - preview));
        }
    }

    let warnings: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.severity == Severity::Warning)
        .collect();
    if !warnings.is_empty() {
        out.push_str(&format!("{} warning(s):\n", warnings.len()));
        for finding in &warnings {
            out.push_str(&format!("  - {finding}\n"));
        }
    }

    if report.has_errors() {
        out.push_str("validation FAILED\n");
    } else {
        out.push_str("validation passed\n");
    }
    out
}

/// Render the report as canonical JSON bytes (sorted keys, compact).
/// Identical reports render to identical bytes.
pub fn render_json(report: &ValidationReport) -> Result<Vec<u8>, serde_json::Error> {
    blog_io::canonical_json::canonical_json_bytes(report)
}
