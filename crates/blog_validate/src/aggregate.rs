//! crates/blog_validate/src/aggregate.rs
//! AGGREGATE pass: reconcile declared counters with observed engagement,
//! optionally audit follow-graph symmetry, then merge everything into the
//! final report. Never fails; all abnormal conditions are findings.

use std::collections::{BTreeMap, BTreeSet};

use blog_core::{Article, User, UserId};

use crate::identity::IdentityIndex;
use crate::report::{Category, EntityKind, Finding, Severity, Summary, ValidationReport};
use crate::users::UserSideOutput;
use crate::ValidateOptions;

/// Merge all pass outputs into the final `ValidationReport`.
///
/// `engagement` is `None` on the fast path (`check_relationships = false`),
/// in which case only the already-collected identity findings survive.
pub fn aggregate(
    mut findings: Vec<Finding>,
    idx: &IdentityIndex,
    users: &[User],
    articles: &[Article],
    engagement: Option<&UserSideOutput>,
    options: &ValidateOptions,
) -> ValidationReport {
    if let Some(eng) = engagement {
        compare_declared_counts(&mut findings, articles, eng);
        if options.check_follow_symmetry {
            audit_follow_symmetry(&mut findings, users);
        }
    }

    let summary = summarize(&findings, idx, users.len(), articles.len());
    ValidationReport { findings, summary }
}

/// Declared `likes_count`/`dislikes_count` vs. the observed liker/disliker
/// sets, article order, likes before dislikes. Absent counters skip the
/// check (upstream data may be sampled or partial, hence WARNING).
fn compare_declared_counts(findings: &mut Vec<Finding>, articles: &[Article], eng: &UserSideOutput) {
    for article in articles {
        let Some(aid) = article.id else { continue };

        if let Some(declared) = article.likes_count {
            let observed = eng.likers.get(&aid).map_or(0, |s| s.len() as u64);
            if declared != observed {
                findings.push(Finding::warning(
                    Category::CountInconsistency,
                    EntityKind::Article,
                    aid.as_u64(),
                    format!("declared likes_count {declared} but {observed} user(s) like it"),
                ));
            }
        }
        if let Some(declared) = article.dislikes_count {
            let observed = eng.dislikers.get(&aid).map_or(0, |s| s.len() as u64);
            if declared != observed {
                findings.push(Finding::warning(
                    Category::CountInconsistency,
                    EntityKind::Article,
                    aid.as_u64(),
                    format!("declared dislikes_count {declared} but {observed} user(s) dislike it"),
                ));
            }
        }
    }
}

/// Opt-in audit: A follows B, B has a record, yet A is not among B's
/// followers. Both directions are stored independently upstream, so
/// asymmetry is advisory only.
fn audit_follow_symmetry(findings: &mut Vec<Finding>, users: &[User]) {
    let followers_of: BTreeMap<UserId, BTreeSet<UserId>> = users
        .iter()
        .filter_map(|u| {
            u.id.map(|id| (id, u.followers.iter().copied().collect()))
        })
        .collect();

    for user in users {
        let Some(uid) = user.id else { continue };
        for &followed in &user.following {
            if followed.is_placeholder() || followed == uid {
                continue;
            }
            if let Some(their_followers) = followers_of.get(&followed) {
                if !their_followers.contains(&uid) {
                    findings.push(Finding::warning(
                        Category::AsymmetricFollow,
                        EntityKind::User,
                        uid.as_u64(),
                        format!("follows user {followed} but the relationship is not reciprocal"),
                    ));
                }
            }
        }
    }
}

fn summarize(findings: &[Finding], idx: &IdentityIndex, users_total: usize, articles_total: usize) -> Summary {
    let mut summary = Summary {
        users_total: users_total as u64,
        articles_total: articles_total as u64,
        unique_user_ids: idx.user_ids.len() as u64,
        unique_article_ids: idx.article_ids.len() as u64,
        duplicate_user_ids: idx.duplicate_user_ids,
        duplicate_article_ids: idx.duplicate_article_ids,
        ..Summary::default()
    };
    for finding in findings {
        match finding.severity {
            Severity::Error => summary.errors += 1,
            Severity::Warning => summary.warnings += 1,
        }
        *summary.by_category.entry(finding.category).or_insert(0) += 1;
    }
    summary
}
