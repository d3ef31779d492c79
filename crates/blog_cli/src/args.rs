// crates/blog_cli/src/args.rs
//
// Deterministic, offline CLI argument surface.
//
// Rules:
// - No networked paths (reject any scheme:// like http/https/file)
// - --validate-only checks the batch without writing artifacts
// - --skip-validation loads even when the report contains errors
//   (mutually exclusive with --validate-only)
// - Output: --out dir, --render [json|text]*

use clap::Parser;
use std::path::PathBuf;

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "blogload",
    disable_help_subcommand = true,
    about = "Offline batch validation and search-load artifact builder for blog data"
)]
pub struct Args {
    /// Batch JSON file ({"Users": [...], "Articles": [...]}).
    #[arg(long, default_value = "data/generated.json")]
    pub data: PathBuf,

    /// Output directory for bulk bodies and the report artifact.
    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    /// Validate the batch and print the report; write no artifacts.
    #[arg(long, conflicts_with = "skip_validation")]
    pub validate_only: bool,

    /// Proceed even when validation reports errors; only duplicate/missing-ID
    /// detection runs.
    #[arg(long)]
    pub skip_validation: bool,

    /// Audit follow-graph symmetry (advisory warnings only).
    #[arg(long)]
    pub check_symmetry: bool,

    /// Target index for user documents.
    #[arg(long, default_value = "blog-users")]
    pub users_index: String,

    /// Target index for article documents.
    #[arg(long, default_value = "blog-articles")]
    pub articles_index: String,

    /// Report renderer(s) to emit. Omit for text on stderr only.
    #[arg(long, value_parser = ["json", "text"], num_args = 0..=2)]
    pub render: Vec<String>,

    /// Suppress non-essential stderr logs.
    #[arg(long)]
    pub quiet: bool,
}

/// Errors surfaced by argument validation.
/// Keep messages short/stable (handy for scripts/tests).
#[derive(Debug)]
pub enum CliError {
    NonLocalPath(&'static str),
    EmptyIndexName(&'static str),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::NonLocalPath(flag) => write!(f, "--{flag} must be a local path"),
            CliError::EmptyIndexName(flag) => write!(f, "--{flag} must not be empty"),
        }
    }
}

/// Parse from the process args and apply the offline-posture checks clap
/// cannot express.
pub fn parse_and_validate() -> Result<Args, CliError> {
    let args = Args::parse();
    validate_args(&args)?;
    Ok(args)
}

pub fn validate_args(args: &Args) -> Result<(), CliError> {
    if looks_like_url(&args.data) {
        return Err(CliError::NonLocalPath("data"));
    }
    if looks_like_url(&args.out) {
        return Err(CliError::NonLocalPath("out"));
    }
    if args.users_index.trim().is_empty() {
        return Err(CliError::EmptyIndexName("users-index"));
    }
    if args.articles_index.trim().is_empty() {
        return Err(CliError::EmptyIndexName("articles-index"));
    }
    Ok(())
}

fn looks_like_url(path: &std::path::Path) -> bool {
    path.to_string_lossy().contains("://")
}
