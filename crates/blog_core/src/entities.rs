//! crates/blog_core/src/entities.rs
//! Wire-shaped entity records for the blog batch file.
//!
//! Every field is optional **by design** (upstream schema guarantees only
//! types, never presence). Absent numeric counters stay absent — an absent
//! `likes_count` is distinguishable from a declared zero, which the
//! count-consistency checks rely on.

use crate::ids::{ArticleId, UserId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One user record. Reference lists may be empty and may contain the
/// `0` placeholder; ordering is preserved from the input file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct User {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<UserId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub full_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub email: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub avatar_url: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub role: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub created_at: Option<String>,

    /// Article IDs this user likes (input order preserved).
    #[cfg_attr(feature = "serde", serde(default))]
    pub likes: Vec<ArticleId>,
    /// Article IDs this user dislikes (input order preserved).
    #[cfg_attr(feature = "serde", serde(default))]
    pub dislikes: Vec<ArticleId>,
    /// Bookmarked article IDs (input order preserved).
    #[cfg_attr(feature = "serde", serde(default))]
    pub bookmarks: Vec<ArticleId>,

    /// User IDs this user follows.
    #[cfg_attr(feature = "serde", serde(default))]
    pub following: Vec<UserId>,
    /// User IDs following this user.
    #[cfg_attr(feature = "serde", serde(default))]
    pub followers: Vec<UserId>,
}

/// One article record. Engagement counters are declared aggregates from
/// upstream; the wire names are `likes`/`dislikes`/`views`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Article {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<ArticleId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub summary: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Option<String>,
    /// Free-vocabulary tags (no enum restriction upstream).
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub author_id: Option<UserId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub author_name: Option<String>,

    /// Declared like count (wire name `likes`). Absent means unknown.
    #[cfg_attr(feature = "serde", serde(default, rename = "likes"))]
    pub likes_count: Option<u64>,
    /// Declared dislike count (wire name `dislikes`). Absent means unknown.
    #[cfg_attr(feature = "serde", serde(default, rename = "dislikes"))]
    pub dislikes_count: Option<u64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub views: Option<u64>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub created_at: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub updated_at: Option<String>,
}

/// The complete batch file shape: `{"Users": [...], "Articles": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlogBatch {
    #[cfg_attr(feature = "serde", serde(default, rename = "Users"))]
    pub users: Vec<User>,
    #[cfg_attr(feature = "serde", serde(default, rename = "Articles"))]
    pub articles: Vec<Article>,
}

impl BlogBatch {
    /// Total entity count across both collections.
    #[inline]
    pub fn len(&self) -> usize {
        self.users.len() + self.articles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.articles.is_empty()
    }
}
