//! crates/blog_validate/src/articles.rs
//! ARTICLE pass: author references and declared-counter sanity.
//! Check order per article is fixed: author, likes-vs-views,
//! likes+dislikes-vs-views.

use blog_core::Article;

use crate::identity::IdentityIndex;
use crate::report::{Category, EntityKind, Finding};

/// Validate each article against the identity index. Articles without an ID
/// were already reported by the identity pass and are skipped here.
pub fn check_articles(articles: &[Article], idx: &IdentityIndex) -> Vec<Finding> {
    let mut findings = Vec::new();

    for article in articles {
        let Some(aid) = article.id else { continue };

        if let Some(author) = article.author_id {
            if !author.is_placeholder() && !idx.user_ids.contains(&author) {
                findings.push(Finding::error(
                    Category::DanglingReference,
                    EntityKind::Article,
                    aid.as_u64(),
                    format!("references non-existent author {author}"),
                ));
            }
        }

        if let (Some(likes), Some(views)) = (article.likes_count, article.views) {
            if likes > views {
                findings.push(Finding::error(
                    Category::ImpossibleValue,
                    EntityKind::Article,
                    aid.as_u64(),
                    format!("likes_count ({likes}) exceeds views ({views})"),
                ));
            }
        }

        if let (Some(likes), Some(dislikes), Some(views)) =
            (article.likes_count, article.dislikes_count, article.views)
        {
            // checked_add: an overflowing sum trivially exceeds any view count.
            let exceeds = match likes.checked_add(dislikes) {
                Some(sum) => sum > views,
                None => true,
            };
            if exceeds {
                findings.push(Finding::error(
                    Category::ImpossibleValue,
                    EntityKind::Article,
                    aid.as_u64(),
                    format!(
                        "likes_count + dislikes_count ({likes} + {dislikes}) exceeds views ({views})"
                    ),
                ));
            }
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::index_identities;
    use crate::report::Severity;
    use blog_core::{ArticleId, User, UserId};

    fn article(id: u64) -> Article {
        Article {
            id: Some(ArticleId::new(id)),
            ..Article::default()
        }
    }

    #[test]
    fn dangling_author_is_one_error() {
        let mut a = article(10);
        a.author_id = Some(UserId::new(5));
        let (idx, _) = index_identities(&[], std::slice::from_ref(&a));
        let findings = check_articles(std::slice::from_ref(&a), &idx);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, Category::DanglingReference);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].entity_id, Some(10));
    }

    #[test]
    fn existing_author_is_clean() {
        let author = User {
            id: Some(UserId::new(5)),
            ..User::default()
        };
        let mut a = article(10);
        a.author_id = Some(UserId::new(5));
        let (idx, _) = index_identities(std::slice::from_ref(&author), std::slice::from_ref(&a));
        assert!(check_articles(std::slice::from_ref(&a), &idx).is_empty());
    }

    #[test]
    fn likes_exceeding_views_is_impossible() {
        let mut a = article(10);
        a.views = Some(5);
        a.likes_count = Some(9);
        let (idx, _) = index_identities(&[], std::slice::from_ref(&a));
        let findings = check_articles(std::slice::from_ref(&a), &idx);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, Category::ImpossibleValue);
    }

    #[test]
    fn sum_check_needs_all_three_counters() {
        let mut a = article(10);
        a.views = Some(5);
        a.likes_count = Some(3);
        a.dislikes_count = Some(4);
        let (idx, _) = index_identities(&[], std::slice::from_ref(&a));
        let findings = check_articles(std::slice::from_ref(&a), &idx);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("3 + 4"));

        // Absent dislikes_count: the sum check is skipped entirely.
        a.dislikes_count = None;
        let findings = check_articles(std::slice::from_ref(&a), &idx);
        assert!(findings.is_empty());
    }

    #[test]
    fn absent_counters_mean_unknown_not_zero() {
        let mut a = article(10);
        a.likes_count = Some(1_000);
        let (idx, _) = index_identities(&[], std::slice::from_ref(&a));
        assert!(check_articles(std::slice::from_ref(&a), &idx).is_empty());
    }
}
