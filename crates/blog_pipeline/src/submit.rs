//! crates/blog_pipeline/src/submit.rs
//! Bulk-action building: deterministic document IDs and Elasticsearch-shaped
//! NDJSON bodies (action line + source line per document). Transport is an
//! external collaborator; this module only produces canonical bytes.

use blog_core::{Article, User};
use blog_io::canonical_json::to_canonical_json_bytes;
use blog_io::hasher::short_digest;
use serde_json::json;

use crate::documents::{article_doc, user_doc};
use crate::PipelineError;

/// Hex length of hash-fallback document IDs (entities without a numeric ID).
const FALLBACK_ID_LEN: usize = 16;

/// Per-collection bulk statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BulkStats {
    /// Documents with a proper `<kind>_<id>` identifier.
    pub identified: u64,
    /// Documents indexed under a hash-fallback identifier.
    pub fallback_ids: u64,
}

impl BulkStats {
    #[inline]
    pub fn total(&self) -> u64 {
        self.identified + self.fallback_ids
    }
}

/// Document ID for a user: `user_<id>`, or a 16-hex digest of
/// email + full_name when the record has no ID.
pub fn user_doc_id(user: &User) -> String {
    match user.id {
        Some(id) => format!("user_{id}"),
        None => {
            let key = format!(
                "{}{}",
                user.email.as_deref().unwrap_or(""),
                user.full_name.as_deref().unwrap_or("")
            );
            short_digest(&key, FALLBACK_ID_LEN)
        }
    }
}

/// Document ID for an article: `article_<id>`, or a 16-hex digest of
/// title + author_id when the record has no ID.
pub fn article_doc_id(article: &Article) -> String {
    match article.id {
        Some(id) => format!("article_{id}"),
        None => {
            let key = format!(
                "{}{}",
                article.title.as_deref().unwrap_or(""),
                article
                    .author_id
                    .map(|a| a.to_string())
                    .unwrap_or_default()
            );
            short_digest(&key, FALLBACK_ID_LEN)
        }
    }
}

/// Build the NDJSON bulk body for the user collection.
pub fn build_user_bulk(users: &[User], index: &str) -> Result<(Vec<u8>, BulkStats), PipelineError> {
    let mut body = Vec::new();
    let mut stats = BulkStats::default();
    for user in users {
        let id = user_doc_id(user);
        bump(&mut stats, user.id.is_some());
        push_action(&mut body, index, &id, user_doc(user)?);
    }
    Ok((body, stats))
}

/// Build the NDJSON bulk body for the article collection.
pub fn build_article_bulk(
    articles: &[Article],
    index: &str,
) -> Result<(Vec<u8>, BulkStats), PipelineError> {
    let mut body = Vec::new();
    let mut stats = BulkStats::default();
    for article in articles {
        let id = article_doc_id(article);
        bump(&mut stats, article.id.is_some());
        push_action(&mut body, index, &id, article_doc(article)?);
    }
    Ok((body, stats))
}

fn bump(stats: &mut BulkStats, identified: bool) {
    if identified {
        stats.identified += 1;
    } else {
        stats.fallback_ids += 1;
    }
}

fn push_action(body: &mut Vec<u8>, index: &str, id: &str, source: serde_json::Value) {
    let action = json!({"index": {"_index": index, "_id": id}});
    body.extend_from_slice(&to_canonical_json_bytes(&action));
    body.push(b'\n');
    body.extend_from_slice(&to_canonical_json_bytes(&source));
    body.push(b'\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::{ArticleId, UserId};

    #[test]
    fn doc_ids_prefer_numeric_ids() {
        let user = User {
            id: Some(UserId::new(7)),
            ..User::default()
        };
        assert_eq!(user_doc_id(&user), "user_7");
        let article = Article {
            id: Some(ArticleId::new(12)),
            ..Article::default()
        };
        assert_eq!(article_doc_id(&article), "article_12");
    }

    #[test]
    fn fallback_ids_are_stable_sixteen_hex() {
        let ghost = User {
            email: Some("a@b.co".into()),
            full_name: Some("Ada".into()),
            ..User::default()
        };
        let id = user_doc_id(&ghost);
        assert_eq!(id.len(), 16);
        assert!(id.bytes().all(|b| b.is_ascii_hexdigit()));
        assert_eq!(id, user_doc_id(&ghost));
    }

    #[test]
    fn bulk_body_alternates_action_and_source() {
        let users = vec![
            User {
                id: Some(UserId::new(1)),
                ..User::default()
            },
            User::default(),
        ];
        let (body, stats) = build_user_bulk(&users, "blog-users").unwrap();
        assert_eq!(stats.identified, 1);
        assert_eq!(stats.fallback_ids, 1);
        assert_eq!(stats.total(), 2);

        let lines: Vec<&str> = std::str::from_utf8(&body).unwrap().lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains(r#""_index":"blog-users""#));
        assert!(lines[0].contains(r#""_id":"user_1""#));
        let source: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(source["id"], 1);
    }

    #[test]
    fn bulk_bytes_are_deterministic() {
        let articles = vec![Article {
            id: Some(ArticleId::new(10)),
            tags: vec!["b".into(), "a".into()],
            ..Article::default()
        }];
        let (first, _) = build_article_bulk(&articles, "blog-articles").unwrap();
        let (second, _) = build_article_bulk(&articles, "blog-articles").unwrap();
        assert_eq!(first, second);
    }
}
