//! blog_pipeline — deterministic load pipeline (load → validate → documents → bulk).
//!
//! This crate orchestrates one batch load: read the batch file via `blog_io`,
//! run the relationship validator, gate on `has_errors()`, then build the
//! search documents and bulk NDJSON bodies. It never talks to a live search
//! cluster; the bulk bodies are artifacts for the transport layer (an
//! external collaborator) or the CLI's `--out` directory.

#![forbid(unsafe_code)]

use std::fmt;
use std::path::Path;

use blog_core::BlogBatch;
use blog_validate::{ValidateOptions, ValidationReport};

pub mod documents;
pub mod submit;

pub use submit::BulkStats;

/// Single error surface for the pipeline orchestration.
#[derive(Debug)]
pub enum PipelineError {
    /// Filesystem / path / size-limit problems from blog_io.
    Io(String),
    /// Batch file failed to decode into typed entities.
    Decode(String),
    /// Search-document building failed (entity not an object, serde error).
    Document(String),
    /// The validator found ERROR findings and skip-validation was not set.
    /// Carries the full report so the caller can render it.
    Validation(Box<ValidationReport>),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Io(m) => write!(f, "io: {m}"),
            PipelineError::Decode(m) => write!(f, "decode: {m}"),
            PipelineError::Document(m) => write!(f, "document: {m}"),
            PipelineError::Validation(report) => write!(
                f,
                "validation failed: {} error(s), {} warning(s)",
                report.summary.errors, report.summary.warnings
            ),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<blog_io::IoError> for PipelineError {
    fn from(e: blog_io::IoError) -> Self {
        match e {
            blog_io::IoError::Json { at, msg } => PipelineError::Decode(format!("{at}: {msg}")),
            other => PipelineError::Io(other.to_string()),
        }
    }
}

/// Caller knobs for one pipeline run.
#[derive(Clone, Debug)]
pub struct PipelineOptions {
    /// Proceed even when the report contains errors; only duplicate/missing-ID
    /// detection runs (the validator's fast path).
    pub skip_validation: bool,
    /// Opt-in follow-graph symmetry audit (advisory findings only).
    pub check_follow_symmetry: bool,
    pub users_index: String,
    pub articles_index: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions {
            skip_validation: false,
            check_follow_symmetry: false,
            users_index: "blog-users".to_string(),
            articles_index: "blog-articles".to_string(),
        }
    }
}

/// Everything one run produces. The bulk bodies are canonical bytes;
/// identical input yields identical outputs.
#[derive(Debug)]
pub struct PipelineOutputs {
    /// SHA-256 of the canonical batch bytes (run provenance).
    pub batch_sha256: String,
    pub report: ValidationReport,
    pub users_bulk: Vec<u8>,
    pub articles_bulk: Vec<u8>,
    pub users_stats: BulkStats,
    pub articles_stats: BulkStats,
}

/// Run the validator over an in-memory batch with the pipeline's options
/// mapped onto the validator's. Used by both `run_load` and the CLI's
/// validate-only path.
pub fn validate_batch(batch: &BlogBatch, opts: &PipelineOptions) -> ValidationReport {
    let vopts = ValidateOptions {
        check_relationships: !opts.skip_validation,
        check_follow_symmetry: opts.check_follow_symmetry,
    };
    blog_validate::validate(&batch.users, &batch.articles, &vopts)
}

/// One full load: file → entities → report → gate → bulk bodies.
///
/// The gate: a report with errors aborts the run unless `skip_validation`
/// was explicitly requested. Warnings never block.
pub fn run_load(path: &Path, opts: &PipelineOptions) -> Result<PipelineOutputs, PipelineError> {
    let loaded = blog_io::loader::load_batch(path)?;
    let report = validate_batch(&loaded.batch, opts);
    if !opts.skip_validation && report.has_errors() {
        return Err(PipelineError::Validation(Box::new(report)));
    }

    let (users_bulk, users_stats) =
        submit::build_user_bulk(&loaded.batch.users, &opts.users_index)?;
    let (articles_bulk, articles_stats) =
        submit::build_article_bulk(&loaded.batch.articles, &opts.articles_index)?;

    Ok(PipelineOutputs {
        batch_sha256: loaded.batch_sha256,
        report,
        users_bulk,
        articles_bulk,
        users_stats,
        articles_stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_fixture(json: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated.json");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(json.as_bytes()).unwrap();
        (dir, path)
    }

    const CLEAN: &str = r#"{
        "Users": [{"id": 1, "likes": [10]}],
        "Articles": [{"id": 10, "author_id": 1, "likes": 1}]
    }"#;

    const DUPED: &str = r#"{"Users": [{"id": 1}, {"id": 1}], "Articles": []}"#;

    #[test]
    fn clean_batch_produces_bulk_bodies() {
        let (_dir, path) = write_fixture(CLEAN);
        let out = run_load(&path, &PipelineOptions::default()).unwrap();
        assert!(!out.report.has_errors());
        assert_eq!(out.users_stats.total(), 1);
        assert_eq!(out.articles_stats.total(), 1);
        assert!(!out.users_bulk.is_empty());
        assert_eq!(out.batch_sha256.len(), 64);
    }

    #[test]
    fn error_report_aborts_the_load() {
        let (_dir, path) = write_fixture(DUPED);
        let err = run_load(&path, &PipelineOptions::default()).unwrap_err();
        match err {
            PipelineError::Validation(report) => {
                assert!(report.has_errors());
                assert_eq!(report.summary.duplicate_user_ids, 1);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn skip_validation_loads_anyway() {
        let (_dir, path) = write_fixture(DUPED);
        let opts = PipelineOptions {
            skip_validation: true,
            ..PipelineOptions::default()
        };
        let out = run_load(&path, &opts).unwrap();
        // The fast-path report still records the duplicate.
        assert!(out.report.has_errors());
        assert_eq!(out.users_stats.total(), 2);
    }

    #[test]
    fn identical_input_identical_outputs() {
        let (_dir, path) = write_fixture(CLEAN);
        let a = run_load(&path, &PipelineOptions::default()).unwrap();
        let b = run_load(&path, &PipelineOptions::default()).unwrap();
        assert_eq!(a.users_bulk, b.users_bulk);
        assert_eq!(a.articles_bulk, b.articles_bulk);
        assert_eq!(a.batch_sha256, b.batch_sha256);
        assert_eq!(a.report, b.report);
    }
}
