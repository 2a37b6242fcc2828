use chrono::{TimeZone, Utc};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr, SqlErr};
use uuid::Uuid;

use blog_core::domain::{Post, PostRecord, PostStatus, Slug, User};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostQuery, PostRepository, UserRepository};

use crate::database::entity::{post, user};
use crate::database::postgres_base::{constraint_error, map_db_err};
use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};

fn post_model(slug: &str, status: post::Status) -> post::Model {
    let publish = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
    let created = Utc.with_ymd_and_hms(2023, 12, 31, 8, 0, 0).unwrap();
    post::Model {
        id: Uuid::new_v4(),
        title: "Hello".to_owned(),
        slug: slug.to_owned(),
        author_id: Uuid::new_v4(),
        body: "...".to_owned(),
        publish: publish.into(),
        publish_date: publish.date_naive(),
        created: created.into(),
        updated: created.into(),
        status,
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let model = post_model("hello", post::Status::Draft);
    let post_id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model.clone()]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.expect("post should be found");
    assert_eq!(post.title(), "Hello");
    assert_eq!(post.id(), post_id);
    assert_eq!(post.status(), PostStatus::Draft);
    assert_eq!(post.created(), model.created);
    assert_eq!(post.to_string(), "Hello");
}

#[tokio::test]
async fn test_insert_returns_stored_post() {
    let author = Uuid::new_v4();
    let draft = Post::new(author, "Hello", Slug::parse("hello").unwrap(), "...").unwrap();

    let mut stored = post_model("hello", post::Status::Draft);
    stored.id = draft.id();
    stored.author_id = author;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored]])
        .into_connection();

    let saved = PostgresPostRepository::new(db).insert(draft.clone()).await.unwrap();
    assert_eq!(saved.id(), draft.id());
    assert_eq!(saved.author_id(), author);
}

#[tokio::test]
async fn test_list_maps_status() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            post_model("newer", post::Status::Published),
            post_model("older", post::Status::Published),
        ]])
        .into_connection();

    let posts = PostgresPostRepository::new(db)
        .list(PostQuery::published())
        .await
        .unwrap();

    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(Post::is_published));
}

#[tokio::test]
async fn test_find_by_date_and_slug() {
    let model = post_model("hello", post::Status::Draft);
    let date = model.publish_date;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let found = PostgresPostRepository::new(db)
        .find_by_date_and_slug(date, &Slug::parse("hello").unwrap())
        .await
        .unwrap()
        .expect("post should be found");
    assert_eq!(found.publish_date(), date);
    assert_eq!(found.absolute_path(), "/blog/2024/01/01/hello/");
}

#[tokio::test]
async fn test_update_does_not_write_caller_timestamps() {
    let model = post_model("hello", post::Status::Published);
    let long_ago = |year| Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap();
    let stale = Post::restore(PostRecord {
        id: model.id,
        author_id: model.author_id,
        title: model.title.clone(),
        slug: model.slug.clone(),
        body: "edited".to_owned(),
        publish: model.publish.into(),
        created: long_ago(1999),
        updated: long_ago(2000),
        status: PostStatus::Published,
    });

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();
    let repo = PostgresPostRepository::new(db);
    BaseRepository::<Post, Uuid>::update(&repo, stale)
        .await
        .unwrap();

    let log = format!("{:?}", repo.db.into_transaction_log());
    assert!(log.contains("UPDATE"));
    assert!(!log.contains("1999-01-01"));
    assert!(!log.contains("2000-01-01"));
}

#[tokio::test]
async fn test_delete_missing_user_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresUserRepository::new(db);
    let result = BaseRepository::<User, Uuid>::delete(&repo, Uuid::new_v4()).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_find_user_by_username() {
    let now = Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user::Model {
            id: Uuid::new_v4(),
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }]])
        .into_connection();

    let user = PostgresUserRepository::new(db)
        .find_by_username("alice")
        .await
        .unwrap()
        .expect("user should be found");
    assert_eq!(user.email, "alice@example.com");
}

#[test]
fn test_map_db_err() {
    assert!(matches!(
        map_db_err(DbErr::RecordNotUpdated),
        RepoError::NotFound
    ));
    assert!(matches!(
        map_db_err(DbErr::Conn(RuntimeErr::Internal("refused".into()))),
        RepoError::Connection(_)
    ));
    assert!(matches!(
        map_db_err(DbErr::Custom("boom".into())),
        RepoError::Query(_)
    ));
}

#[test]
fn test_constraint_violations_are_distinguished() {
    assert!(matches!(
        constraint_error(SqlErr::UniqueConstraintViolation("posts_slug_publish_date".into())),
        Some(RepoError::Duplicate(msg)) if msg == "posts_slug_publish_date"
    ));
    assert!(matches!(
        constraint_error(SqlErr::ForeignKeyConstraintViolation("fk_posts_author".into())),
        Some(RepoError::MissingReference(msg)) if msg == "fk_posts_author"
    ));
}
