//! crates/blog_pipeline/src/documents.rs
//! Search-document building: entity fields plus the ingest-time computed
//! fields the query layer sorts and filters on. Pure functions over the
//! already-validated entities.

use blog_core::{Article, User};
use serde_json::{json, Map, Value};

use crate::PipelineError;

/// Words-per-minute assumption behind `reading_time_minutes`.
const READING_WPM: f64 = 200.0;

/// Build the search document for a user: all wire fields plus engagement
/// totals and the derived activity/influence scores.
pub fn user_doc(user: &User) -> Result<Value, PipelineError> {
    let mut doc = to_object(user)?;

    let total_likes = user.likes.len() as i64;
    let total_dislikes = user.dislikes.len() as i64;
    let total_bookmarks = user.bookmarks.len() as i64;
    let total_following = user.following.len() as i64;
    let total_followers = user.followers.len() as i64;

    doc.insert("total_likes".into(), json!(total_likes));
    doc.insert("total_dislikes".into(), json!(total_dislikes));
    doc.insert("total_bookmarks".into(), json!(total_bookmarks));
    doc.insert("total_following".into(), json!(total_following));
    doc.insert("total_followers".into(), json!(total_followers));
    doc.insert(
        "engagement_score".into(),
        json!(total_likes + total_bookmarks - total_dislikes),
    );

    let activity = total_likes + total_bookmarks;
    let level = if activity > 10 {
        "high"
    } else if activity > 5 {
        "medium"
    } else {
        "low"
    };
    doc.insert("user_activity_level".into(), json!(level));
    doc.insert(
        "social_influence".into(),
        json!(total_followers * 2 + total_following),
    );

    Ok(Value::Object(doc))
}

/// Build the search document for an article: wire fields plus length,
/// reading-time, popularity and the flattened searchable text.
pub fn article_doc(article: &Article) -> Result<Value, PipelineError> {
    let mut doc = to_object(article)?;

    let likes = article.likes_count.unwrap_or(0);
    let dislikes = article.dislikes_count.unwrap_or(0);
    let views = article.views.unwrap_or(0);
    let title = article.title.as_deref().unwrap_or("");
    let summary = article.summary.as_deref().unwrap_or("");
    let content = article.content.as_deref().unwrap_or("");

    let reactions = likes.saturating_add(dislikes).max(1);
    doc.insert(
        "engagement_ratio".into(),
        json!(likes as f64 / reactions as f64),
    );
    doc.insert("content_length".into(), json!(content.len()));
    doc.insert("summary_length".into(), json!(summary.len()));
    doc.insert("tag_count".into(), json!(article.tags.len()));
    doc.insert(
        "is_published".into(),
        json!(article.status.as_deref() == Some("published")),
    );

    let reading_minutes = ((content.len() as f64 / READING_WPM).round() as u64).max(1);
    doc.insert("reading_time_minutes".into(), json!(reading_minutes));
    doc.insert(
        "popularity_score".into(),
        json!(views as f64 * 0.1 + likes as f64 * 2.0 - dislikes as f64 * 0.5),
    );

    let mut parts: Vec<&str> = vec![title, summary, content];
    parts.extend(article.tags.iter().map(String::as_str));
    let searchable = parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    doc.insert("searchable_content".into(), json!(searchable));

    Ok(Value::Object(doc))
}

fn to_object<T: serde::Serialize>(value: &T) -> Result<Map<String, Value>, PipelineError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(PipelineError::Document(
            "entity did not serialize to an object".into(),
        )),
        Err(e) => Err(PipelineError::Document(e.to_string())),
    }
}
