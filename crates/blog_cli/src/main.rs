// crates/blog_cli/src/main.rs
//
// Wires up: exit codes, typed error mapping, CLI parsing, the
// validate-only short-circuit, and the full load path (load → validate →
// bulk artifacts → optional report rendering).

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    /// Batch content failed validation (or args were invalid).
    pub const VALIDATION: i32 = 2;
    /// I/O, path, decode, or artifact-write failures.
    pub const IO: i32 = 4;
}

use std::process::ExitCode;

use args::{parse_and_validate as parse_cli, Args};

use blog_pipeline::{PipelineError, PipelineOptions};
use blog_report::DEFAULT_ERROR_PREVIEW;

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// Validation findings blocked the run (report already rendered).
    Validation(String),
    /// Everything filesystem/decode shaped.
    Io(String),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Validation(m) => write!(f, "validation: {m}"),
            MainError::Io(m) => write!(f, "io: {m}"),
        }
    }
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("blogload: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };

    let outcome = if args.validate_only {
        validate_only(&args)
    } else {
        run_once(&args)
    };
    let rc = match outcome {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            eprintln!("blogload: {e}");
            map_error(&e)
        }
    };

    ExitCode::from(rc as u8)
}

fn map_error(e: &MainError) -> i32 {
    match e {
        MainError::Validation(_) => exitcodes::VALIDATION,
        MainError::Io(_) => exitcodes::IO,
    }
}

fn pipeline_options(args: &Args) -> PipelineOptions {
    PipelineOptions {
        skip_validation: args.skip_validation,
        check_follow_symmetry: args.check_symmetry,
        users_index: args.users_index.clone(),
        articles_index: args.articles_index.clone(),
    }
}

/// Validate-only path: load, validate, print the report, write nothing.
/// Exit 0 when the report is clean, 2 when it contains errors.
fn validate_only(args: &Args) -> Result<(), MainError> {
    let loaded = blog_io::loader::load_batch(&args.data)
        .map_err(|e| MainError::Io(e.to_string()))?;
    let report = blog_pipeline::validate_batch(&loaded.batch, &pipeline_options(args));

    print!("{}", blog_report::render_text(&report, DEFAULT_ERROR_PREVIEW));
    if report.has_errors() {
        return Err(MainError::Validation(format!(
            "{} error(s)",
            report.summary.errors
        )));
    }
    Ok(())
}

/// Full run: pipeline → bulk artifacts + report artifact under --out.
fn run_once(args: &Args) -> Result<(), MainError> {
    let opts = pipeline_options(args);
    let outputs = match blog_pipeline::run_load(&args.data, &opts) {
        Ok(outputs) => outputs,
        Err(PipelineError::Validation(report)) => {
            eprint!("{}", blog_report::render_text(&report, DEFAULT_ERROR_PREVIEW));
            return Err(MainError::Validation(format!(
                "{} error(s); rerun with --skip-validation to load anyway",
                report.summary.errors
            )));
        }
        Err(e) => return Err(MainError::Io(e.to_string())),
    };

    let users_path = args.out.join(format!("{}.bulk.ndjson", args.users_index));
    let articles_path = args.out.join(format!("{}.bulk.ndjson", args.articles_index));
    blog_io::canonical_json::write_bytes_atomic(&users_path, &outputs.users_bulk)
        .map_err(|e| MainError::Io(format!("{}: {e}", users_path.display())))?;
    blog_io::canonical_json::write_bytes_atomic(&articles_path, &outputs.articles_bulk)
        .map_err(|e| MainError::Io(format!("{}: {e}", articles_path.display())))?;

    if args.render.iter().any(|r| r == "json") {
        let bytes = blog_report::render_json(&outputs.report)
            .map_err(|e| MainError::Io(format!("report render: {e}")))?;
        let report_path = args.out.join("validation_report.json");
        blog_io::canonical_json::write_bytes_atomic(&report_path, &bytes)
            .map_err(|e| MainError::Io(format!("{}: {e}", report_path.display())))?;
    }
    if args.render.iter().any(|r| r == "text") {
        print!("{}", blog_report::render_text(&outputs.report, DEFAULT_ERROR_PREVIEW));
    }

    if !args.quiet {
        eprintln!(
            "loaded {} user doc(s) and {} article doc(s) (batch sha256 {})",
            outputs.users_stats.total(),
            outputs.articles_stats.total(),
            &outputs.batch_sha256[..12]
        );
        if outputs.report.summary.warnings > 0 {
            eprintln!("{} validation warning(s)", outputs.report.summary.warnings);
        }
    }

    Ok(())
}
