//! crates/blog_validate/src/report.rs
//! Finding/report model shared by all four validation passes.
//! Deterministic content only; the report is the validator's sole artifact.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Finding severity. Errors block downstream loading (unless the caller
/// explicitly overrides); warnings are always advisory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("ERROR"),
            Severity::Warning => f.write_str("WARNING"),
        }
    }
}

/// Closed finding taxonomy. `AsymmetricFollow` is emitted only under the
/// opt-in `check_follow_symmetry` option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    MissingIdentifier,
    DuplicateId,
    DanglingReference,
    SelfReference,
    ConflictingAction,
    CountInconsistency,
    ImpossibleValue,
    AsymmetricFollow,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::MissingIdentifier => "MISSING_IDENTIFIER",
            Category::DuplicateId => "DUPLICATE_ID",
            Category::DanglingReference => "DANGLING_REFERENCE",
            Category::SelfReference => "SELF_REFERENCE",
            Category::ConflictingAction => "CONFLICTING_ACTION",
            Category::CountInconsistency => "COUNT_INCONSISTENCY",
            Category::ImpossibleValue => "IMPOSSIBLE_VALUE",
            Category::AsymmetricFollow => "ASYMMETRIC_FOLLOW",
        };
        f.write_str(s)
    }
}

/// Which collection the finding points into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Article,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => f.write_str("User"),
            EntityKind::Article => f.write_str("Article"),
        }
    }
}

/// One reported integrity problem. `entity_id` is absent exactly for
/// `MissingIdentifier` findings (the entity cannot be named).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub category: Category,
    pub entity_kind: EntityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<u64>,
    pub message: String,
}

impl Finding {
    pub fn error(category: Category, kind: EntityKind, id: u64, message: String) -> Self {
        Finding {
            severity: Severity::Error,
            category,
            entity_kind: kind,
            entity_id: Some(id),
            message,
        }
    }

    pub fn warning(category: Category, kind: EntityKind, id: u64, message: String) -> Self {
        Finding {
            severity: Severity::Warning,
            category,
            entity_kind: kind,
            entity_id: Some(id),
            message,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entity_id {
            Some(id) => write!(
                f,
                "{} [{}] {} {}: {}",
                self.severity, self.category, self.entity_kind, id, self.message
            ),
            None => write!(
                f,
                "{} [{}] {}: {}",
                self.severity, self.category, self.entity_kind, self.message
            ),
        }
    }
}

/// Summary statistics computed once by the aggregator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub users_total: u64,
    pub articles_total: u64,
    pub unique_user_ids: u64,
    pub unique_article_ids: u64,
    /// Occurrences beyond the first of a repeated user ID.
    pub duplicate_user_ids: u64,
    /// Occurrences beyond the first of a repeated article ID.
    pub duplicate_article_ids: u64,
    pub errors: u64,
    pub warnings: u64,
    pub by_category: BTreeMap<Category, u64>,
}

/// Ordered findings plus summary; produced fresh per `validate` call.
/// Two runs over identical input yield identical reports.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
    pub summary: Summary,
}

impl ValidationReport {
    /// True iff at least one ERROR-severity finding exists. Callers gate
    /// downstream loading on this predicate.
    pub fn has_errors(&self) -> bool {
        self.summary.errors > 0
    }
}
