//! End-to-end properties of the batch validator: duplicate accounting,
//! dangling/self references, determinism, the fast path, and the scenario
//! fixtures for conflicting actions and counter sanity.

use blog_core::{Article, ArticleId, User, UserId};
use blog_validate::{validate, Category, Severity, ValidateOptions};

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

fn aid(raw: u64) -> ArticleId {
    ArticleId::new(raw)
}

fn uid(raw: u64) -> UserId {
    UserId::new(raw)
}

#[test]
fn duplicate_findings_equal_repeats_minus_one_per_collection() {
    // user 1 x3 (2 extra), user 2 x2 (1 extra); article 10 x2 (1 extra).
    let users = vec![user(1), user(1), user(2), user(1), user(2)];
    let articles = vec![article(10), article(10), article(11)];
    let report = validate(&users, &articles, &ValidateOptions::default());

    let user_dups = report
        .findings
        .iter()
        .filter(|f| f.category == Category::DuplicateId && f.entity_kind == blog_validate::EntityKind::User)
        .count();
    let article_dups = report
        .findings
        .iter()
        .filter(|f| f.category == Category::DuplicateId && f.entity_kind == blog_validate::EntityKind::Article)
        .count();
    assert_eq!(user_dups, 3);
    assert_eq!(article_dups, 1);
    assert_eq!(report.summary.duplicate_user_ids, 3);
    assert_eq!(report.summary.duplicate_article_ids, 1);
    assert!(report.has_errors());
}

#[test]
fn exactly_one_duplicate_for_a_single_repeat() {
    let users = vec![user(1), user(1)];
    let report = validate(&users, &[], &ValidateOptions::default());
    let dups: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.category == Category::DuplicateId)
        .collect();
    assert_eq!(dups.len(), 1);
    assert_eq!(dups[0].entity_id, Some(1));
    assert_eq!(dups[0].severity, Severity::Error);
}

#[test]
fn absent_author_yields_exactly_one_dangling_error() {
    let mut a = article(10);
    a.author_id = Some(uid(42));
    let report = validate(&[], std::slice::from_ref(&a), &ValidateOptions::default());
    let dangling: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.category == Category::DanglingReference)
        .collect();
    assert_eq!(dangling.len(), 1);
    assert_eq!(dangling[0].entity_id, Some(10));

    // Present author: zero findings.
    let report = validate(
        std::slice::from_ref(&user(42)),
        std::slice::from_ref(&a),
        &ValidateOptions::default(),
    );
    assert!(report.findings.is_empty());
}

#[test]
fn self_reference_error_per_occurrence() {
    let mut u = user(1);
    u.following = vec![uid(1)];
    u.followers = vec![uid(1), uid(1)];
    let report = validate(std::slice::from_ref(&u), &[], &ValidateOptions::default());
    let selfs = report
        .findings
        .iter()
        .filter(|f| f.category == Category::SelfReference)
        .count();
    assert_eq!(selfs, 3);
}

#[test]
fn identical_input_produces_identical_reports() {
    let mut u1 = user(1);
    u1.likes = vec![aid(10), aid(99)];
    u1.dislikes = vec![aid(10)];
    u1.following = vec![uid(2), uid(7)];
    let u2 = user(2);
    let mut a = article(10);
    a.likes_count = Some(5);
    a.views = Some(2);
    let users = vec![u1, u2, User::default()];
    let articles = vec![a];

    let first = validate(&users, &articles, &ValidateOptions::default());
    let second = validate(&users, &articles, &ValidateOptions::default());
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[test]
fn fast_path_keeps_only_identity_findings() {
    let mut u = user(1);
    u.likes = vec![aid(99)];
    u.following = vec![uid(1)];
    let users = vec![u, user(1), User::default()];
    let articles = vec![article(10)];

    let full = validate(&users, &articles, &ValidateOptions::default());
    let fast = validate(
        &users,
        &articles,
        &ValidateOptions {
            check_relationships: false,
            ..ValidateOptions::default()
        },
    );

    assert!(fast
        .findings
        .iter()
        .all(|f| matches!(f.category, Category::DuplicateId | Category::MissingIdentifier)));
    // Strict subset of the full run.
    assert!(fast.findings.len() < full.findings.len());
    for finding in &fast.findings {
        assert!(full.findings.contains(finding));
    }
}

#[test]
fn conflicting_action_with_matching_declared_count() {
    // Users = [{id:1, likes:[10], dislikes:[10]}], Articles = [{id:10, likes_count:1}]
    let mut u = user(1);
    u.likes = vec![aid(10)];
    u.dislikes = vec![aid(10)];
    let mut a = article(10);
    a.likes_count = Some(1);
    let report = validate(
        std::slice::from_ref(&u),
        std::slice::from_ref(&a),
        &ValidateOptions::default(),
    );

    let conflicts: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.category == Category::ConflictingAction)
        .collect();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].entity_id, Some(1));
    assert!(conflicts[0].message.contains("10"));
    assert!(!report
        .findings
        .iter()
        .any(|f| f.category == Category::CountInconsistency));
    assert!(!report.has_errors());
}

#[test]
fn dangling_like_sets_has_errors() {
    // Users = [{id:1, likes:[99]}], Articles = [{id:10}]
    let mut u = user(1);
    u.likes = vec![aid(99)];
    let report = validate(
        std::slice::from_ref(&u),
        std::slice::from_ref(&article(10)),
        &ValidateOptions::default(),
    );
    let dangling: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.category == Category::DanglingReference)
        .collect();
    assert_eq!(dangling.len(), 1);
    assert!(dangling[0].message.contains("99"));
    assert!(report.has_errors());
}

#[test]
fn likes_count_exceeding_views_is_impossible_value() {
    // Articles = [{id:10, views:5, likes_count:9}], Users = []
    let mut a = article(10);
    a.views = Some(5);
    a.likes_count = Some(9);
    let report = validate(&[], std::slice::from_ref(&a), &ValidateOptions::default());
    let impossible: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.category == Category::ImpossibleValue)
        .collect();
    assert_eq!(impossible.len(), 1);
    assert_eq!(impossible[0].severity, Severity::Error);
    // The same article also fails the declared-count comparison (9 vs 0 likers),
    // which is advisory only.
    assert!(report
        .findings
        .iter()
        .any(|f| f.category == Category::CountInconsistency && f.severity == Severity::Warning));
    assert!(report.has_errors());
}

#[test]
fn finding_order_is_pass_then_collection_then_field() {
    // One of each: identity warning, user-side error, article-side error,
    // aggregator warning — in that order.
    let mut u = user(1);
    u.likes = vec![aid(99)];
    let mut a = article(10);
    a.author_id = Some(uid(77));
    a.likes_count = Some(4);
    let users = vec![User::default(), u];
    let articles = vec![a];
    let report = validate(&users, &articles, &ValidateOptions::default());

    let categories: Vec<Category> = report.findings.iter().map(|f| f.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::MissingIdentifier,
            Category::DanglingReference, // user 1 likes 99
            Category::DanglingReference, // article 10 author 77
            Category::CountInconsistency,
        ]
    );
}

#[test]
fn empty_batch_is_clean() {
    let report = validate(&[], &[], &ValidateOptions::default());
    assert!(report.findings.is_empty());
    assert!(!report.has_errors());
    assert_eq!(report.summary.users_total, 0);
    assert_eq!(report.summary.articles_total, 0);
}
