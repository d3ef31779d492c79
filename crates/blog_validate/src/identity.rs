//! crates/blog_validate/src/identity.rs
//! IDENTITY pass: build the unique-ID sets both checkers resolve against.
//! Runs first, has no dependencies, never fails; duplicate and missing IDs
//! become findings so later passes can skip those entities safely.

use std::collections::BTreeSet;

use blog_core::{Article, ArticleId, User, UserId};

use crate::report::{Category, EntityKind, Finding, Severity};

/// Immutable ID sets shared (read-only) by both checker passes.
#[derive(Clone, Debug, Default)]
pub struct IdentityIndex {
    pub user_ids: BTreeSet<UserId>,
    pub article_ids: BTreeSet<ArticleId>,
    /// Occurrences beyond the first of a repeated user ID.
    pub duplicate_user_ids: u64,
    /// Occurrences beyond the first of a repeated article ID.
    pub duplicate_article_ids: u64,
}

/// Index both collections. Findings come out in collection order, Users
/// before Articles: one ERROR per duplicate occurrence beyond the first,
/// one WARNING per entity without an ID.
pub fn index_identities(users: &[User], articles: &[Article]) -> (IdentityIndex, Vec<Finding>) {
    let mut idx = IdentityIndex::default();
    let mut findings = Vec::new();

    for (pos, user) in users.iter().enumerate() {
        match user.id {
            Some(id) => {
                if !idx.user_ids.insert(id) {
                    idx.duplicate_user_ids += 1;
                    findings.push(Finding::error(
                        Category::DuplicateId,
                        EntityKind::User,
                        id.as_u64(),
                        format!("duplicate user id {id}"),
                    ));
                }
            }
            None => findings.push(Finding {
                severity: Severity::Warning,
                category: Category::MissingIdentifier,
                entity_kind: EntityKind::User,
                entity_id: None,
                message: format!("user at position {pos} has no id; skipped by later passes"),
            }),
        }
    }

    for (pos, article) in articles.iter().enumerate() {
        match article.id {
            Some(id) => {
                if !idx.article_ids.insert(id) {
                    idx.duplicate_article_ids += 1;
                    findings.push(Finding::error(
                        Category::DuplicateId,
                        EntityKind::Article,
                        id.as_u64(),
                        format!("duplicate article id {id}"),
                    ));
                }
            }
            None => findings.push(Finding {
                severity: Severity::Warning,
                category: Category::MissingIdentifier,
                entity_kind: EntityKind::Article,
                entity_id: None,
                message: format!("article at position {pos} has no id; skipped by later passes"),
            }),
        }
    }

    (idx, findings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64) -> User {
        User {
            id: Some(UserId::new(id)),
            ..User::default()
        }
    }

    fn article(id: u64) -> Article {
        Article {
            id: Some(ArticleId::new(id)),
            ..Article::default()
        }
    }

    #[test]
    fn one_finding_per_duplicate_beyond_first() {
        let users = vec![user(1), user(1), user(1), user(2)];
        let (idx, findings) = index_identities(&users, &[]);
        assert_eq!(idx.user_ids.len(), 2);
        assert_eq!(idx.duplicate_user_ids, 2);
        let dups: Vec<_> = findings
            .iter()
            .filter(|f| f.category == Category::DuplicateId)
            .collect();
        assert_eq!(dups.len(), 2);
        assert!(dups.iter().all(|f| f.entity_id == Some(1)));
        assert!(dups.iter().all(|f| f.severity == Severity::Error));
    }

    #[test]
    fn missing_id_is_a_warning_not_an_error() {
        let users = vec![User::default()];
        let articles = vec![article(10), Article::default()];
        let (idx, findings) = index_identities(&users, &articles);
        assert_eq!(idx.user_ids.len(), 0);
        assert_eq!(idx.article_ids.len(), 1);
        assert_eq!(findings.len(), 2);
        assert!(findings
            .iter()
            .all(|f| f.category == Category::MissingIdentifier
                && f.severity == Severity::Warning
                && f.entity_id.is_none()));
        // Users are reported before articles.
        assert_eq!(findings[0].entity_kind, EntityKind::User);
        assert_eq!(findings[1].entity_kind, EntityKind::Article);
    }
}
