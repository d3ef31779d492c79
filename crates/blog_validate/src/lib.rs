//! blog_validate — relationship-integrity validation engine.
//!
//! Single-shot pure computation: `Input(Users, Articles) → ValidationReport`.
//! Four passes over the two collections:
//!
//! 1. identity — unique-ID sets, duplicate/missing-ID findings
//! 2. users    — outgoing references, self-references, conflicts
//! 3. articles — author references, counter sanity
//! 4. aggregate — declared counts vs. observed engagement, final report
//!
//! The identity pass runs first; the two checker passes read only its
//! immutable output and their own collection, so they run on separate
//! workers (`rayon::join`) and their results are merged in a fixed order.
//! The report is therefore byte-identical across runs on the same input.
//!
//! No I/O, no global state, no panics on data content: every abnormal
//! condition is a finding, never an error return.

#![forbid(unsafe_code)]

pub mod aggregate;
pub mod articles;
pub mod identity;
pub mod report;
pub mod users;

use blog_core::{Article, User};

pub use identity::IdentityIndex;
pub use report::{Category, EntityKind, Finding, Severity, Summary, ValidationReport};
pub use users::UserSideOutput;

/// Caller-facing knobs for a `validate` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidateOptions {
    /// When false, only duplicate/missing-ID detection runs (fast path for
    /// re-runs against already-validated data).
    pub check_relationships: bool,
    /// Opt-in follow-graph symmetry audit; asymmetry is advisory upstream,
    /// so this defaults off.
    pub check_follow_symmetry: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        ValidateOptions {
            check_relationships: true,
            check_follow_symmetry: false,
        }
    }
}

/// Validate one batch. Inputs are read-only; the report is produced fresh
/// per invocation and `has_errors()` tells the caller whether to abort the
/// downstream load.
pub fn validate(users: &[User], articles: &[Article], options: &ValidateOptions) -> ValidationReport {
    let (idx, mut findings) = identity::index_identities(users, articles);

    if !options.check_relationships {
        return aggregate::aggregate(findings, &idx, users, articles, None, options);
    }

    // Both checkers read only the identity output and their own collection;
    // merge order (users before articles) is fixed regardless of which
    // worker finishes first.
    let (mut user_side, mut article_findings) = rayon::join(
        || users::check_users(users, &idx),
        || articles::check_articles(articles, &idx),
    );
    findings.append(&mut user_side.findings);
    findings.append(&mut article_findings);

    aggregate::aggregate(findings, &idx, users, articles, Some(&user_side), options)
}
