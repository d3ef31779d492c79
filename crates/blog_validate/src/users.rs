//! crates/blog_validate/src/users.rs
//! USER pass: outgoing references, self-reference rules, like/dislike
//! conflicts, and the reverse engagement maps the aggregator consumes.
//!
//! Finding order per user is fixed: email, following, followers, likes,
//! dislikes, bookmarks, then conflicts — each in input-list order.

use std::collections::{BTreeMap, BTreeSet};

use blog_core::{is_valid_email, ArticleId, User, UserId};

use crate::identity::IdentityIndex;
use crate::report::{Category, EntityKind, Finding};

/// Checker output. The reverse maps are never mutated after being returned;
/// only references to articles that exist contribute to them.
#[derive(Clone, Debug, Default)]
pub struct UserSideOutput {
    pub findings: Vec<Finding>,
    pub likers: BTreeMap<ArticleId, BTreeSet<UserId>>,
    pub dislikers: BTreeMap<ArticleId, BTreeSet<UserId>>,
}

/// Validate every user's outgoing references against the identity index.
/// Users without an ID were already reported by the identity pass and are
/// skipped here.
pub fn check_users(users: &[User], idx: &IdentityIndex) -> UserSideOutput {
    let mut out = UserSideOutput::default();

    for user in users {
        let Some(uid) = user.id else { continue };

        if let Some(email) = &user.email {
            if !is_valid_email(email) {
                out.findings.push(Finding::warning(
                    Category::ImpossibleValue,
                    EntityKind::User,
                    uid.as_u64(),
                    format!("email '{email}' is not a plausible address"),
                ));
            }
        }

        check_user_refs(&mut out.findings, uid, &user.following, idx, "follows");
        check_follower_refs(&mut out.findings, uid, &user.followers, idx);
        check_article_refs(&mut out.findings, uid, &user.likes, idx, "likes");
        check_article_refs(&mut out.findings, uid, &user.dislikes, idx, "dislikes");
        check_article_refs(&mut out.findings, uid, &user.bookmarks, idx, "bookmarks");

        // Conflicts: same article in both likes and dislikes. One finding per
        // article ID, in likes-list order.
        let disliked: BTreeSet<ArticleId> = user
            .dislikes
            .iter()
            .copied()
            .filter(|a| !a.is_placeholder())
            .collect();
        let mut reported = BTreeSet::new();
        for &aid in &user.likes {
            if !aid.is_placeholder() && disliked.contains(&aid) && reported.insert(aid) {
                out.findings.push(Finding::warning(
                    Category::ConflictingAction,
                    EntityKind::User,
                    uid.as_u64(),
                    format!("both likes and dislikes article {aid}"),
                ));
            }
        }

        // Reverse engagement maps (existing articles only).
        for &aid in &user.likes {
            if idx.article_ids.contains(&aid) {
                out.likers.entry(aid).or_default().insert(uid);
            }
        }
        for &aid in &user.dislikes {
            if idx.article_ids.contains(&aid) {
                out.dislikers.entry(aid).or_default().insert(uid);
            }
        }
    }

    out
}

/// `following` entries: self-reference is an error even if the ID exists.
fn check_user_refs(
    findings: &mut Vec<Finding>,
    uid: UserId,
    refs: &[UserId],
    idx: &IdentityIndex,
    verb: &str,
) {
    for &target in refs {
        if target.is_placeholder() {
            continue;
        }
        if target == uid {
            findings.push(Finding::error(
                Category::SelfReference,
                EntityKind::User,
                uid.as_u64(),
                format!("{verb} themselves"),
            ));
        } else if !idx.user_ids.contains(&target) {
            findings.push(Finding::error(
                Category::DanglingReference,
                EntityKind::User,
                uid.as_u64(),
                format!("{verb} non-existent user {target}"),
            ));
        }
    }
}

fn check_follower_refs(findings: &mut Vec<Finding>, uid: UserId, refs: &[UserId], idx: &IdentityIndex) {
    for &target in refs {
        if target.is_placeholder() {
            continue;
        }
        if target == uid {
            findings.push(Finding::error(
                Category::SelfReference,
                EntityKind::User,
                uid.as_u64(),
                "is their own follower".to_string(),
            ));
        } else if !idx.user_ids.contains(&target) {
            findings.push(Finding::error(
                Category::DanglingReference,
                EntityKind::User,
                uid.as_u64(),
                format!("has non-existent follower {target}"),
            ));
        }
    }
}

fn check_article_refs(
    findings: &mut Vec<Finding>,
    uid: UserId,
    refs: &[ArticleId],
    idx: &IdentityIndex,
    verb: &str,
) {
    for &target in refs {
        if target.is_placeholder() {
            continue;
        }
        if !idx.article_ids.contains(&target) {
            findings.push(Finding::error(
                Category::DanglingReference,
                EntityKind::User,
                uid.as_u64(),
                format!("{verb} non-existent article {target}"),
            ));
        }
    }
}
