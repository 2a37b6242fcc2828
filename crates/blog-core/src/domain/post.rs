use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PostStatus, Slug};
use crate::error::DomainError;

/// Maximum title length in characters.
pub const TITLE_MAX_LEN: usize = 259;

/// Post entity - represents one blog article.
///
/// `created` is fixed when the post is built and `updated` is refreshed by
/// every mutator, never moving backwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PostRecord")]
pub struct Post {
    id: Uuid,
    author_id: Uuid,
    title: String,
    slug: Slug,
    body: String,
    publish: DateTime<Utc>,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
    status: PostStatus,
}

/// Flat representation of a stored post, used to rehydrate a [`Post`].
#[derive(Debug, Clone, Deserialize)]
pub struct PostRecord {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub publish: DateTime<Utc>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub status: PostStatus,
}

impl Post {
    /// Create a new draft post published "now".
    pub fn new(
        author_id: Uuid,
        title: impl Into<String>,
        slug: Slug,
        body: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        validate_title(&title)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            slug,
            body: body.into(),
            publish: now,
            created: now,
            updated: now,
            status: PostStatus::default(),
        })
    }

    /// Override the publication time at construction.
    pub fn with_publish(mut self, publish: DateTime<Utc>) -> Self {
        self.publish = publish;
        self
    }

    /// Override the status at construction.
    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    /// Rebuild a post from storage without touching its timestamps.
    pub fn restore(record: PostRecord) -> Self {
        Self {
            id: record.id,
            author_id: record.author_id,
            title: record.title,
            slug: Slug::from_stored(record.slug),
            body: record.body,
            publish: record.publish,
            created: record.created,
            updated: record.updated,
            status: record.status,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn author_id(&self) -> Uuid {
        self.author_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn publish(&self) -> DateTime<Utc> {
        self.publish
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn updated(&self) -> DateTime<Utc> {
        self.updated
    }

    pub fn status(&self) -> PostStatus {
        self.status
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Calendar day (UTC) of `publish`; slugs are unique per day.
    pub fn publish_date(&self) -> NaiveDate {
        self.publish.date_naive()
    }

    /// Canonical URL path, e.g. `/blog/2024/01/01/hello/`.
    pub fn absolute_path(&self) -> String {
        let date = self.publish_date();
        format!(
            "/blog/{}/{:02}/{:02}/{}/",
            date.year(),
            date.month(),
            date.day(),
            self.slug
        )
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), DomainError> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        self.touch();
        Ok(())
    }

    pub fn set_slug(&mut self, slug: Slug) {
        self.slug = slug;
        self.touch();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
        self.touch();
    }

    pub fn set_publish(&mut self, publish: DateTime<Utc>) {
        self.publish = publish;
        self.touch();
    }

    pub fn set_status(&mut self, status: PostStatus) {
        self.status = status;
        self.touch();
    }

    /// Mark the post published as of now.
    pub fn publish_now(&mut self) {
        self.publish = Utc::now();
        self.status = PostStatus::Published;
        self.touch();
    }

    /// Refresh `updated`. Clock skew never moves it backwards.
    pub fn touch(&mut self) {
        self.updated = Utc::now().max(self.updated);
    }

    pub fn into_record(self) -> PostRecord {
        PostRecord {
            id: self.id,
            author_id: self.author_id,
            title: self.title,
            slug: self.slug.into_inner(),
            body: self.body,
            publish: self.publish,
            created: self.created,
            updated: self.updated,
            status: self.status,
        }
    }
}

/// Checked rehydration for records that did not come from our own storage.
impl TryFrom<PostRecord> for Post {
    type Error = DomainError;

    fn try_from(record: PostRecord) -> Result<Self, Self::Error> {
        validate_title(&record.title)?;
        Slug::parse(record.slug.as_str())?;
        if record.updated < record.created {
            return Err(DomainError::Validation(
                "updated must not precede created".to_string(),
            ));
        }
        Ok(Self::restore(record))
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::empty("title"));
    }
    let len = title.chars().count();
    if len > TITLE_MAX_LEN {
        return Err(DomainError::too_long("title", TITLE_MAX_LEN, len));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn hello(author_id: Uuid) -> Post {
        Post::new(author_id, "Hello", Slug::parse("hello").unwrap(), "...").unwrap()
    }

    #[test]
    fn test_new_post_defaults() {
        let post = hello(Uuid::new_v4());

        assert_eq!(post.status(), PostStatus::Draft);
        assert_eq!(post.created(), post.updated());
        assert_eq!(post.publish(), post.created());
        assert!(!post.is_published());
    }

    #[test]
    fn test_display_renders_title() {
        let post = hello(Uuid::new_v4());
        assert_eq!(post.to_string(), "Hello");
    }

    #[test]
    fn test_title_validation() {
        let author = Uuid::new_v4();
        let slug = Slug::parse("t").unwrap();

        assert!(Post::new(author, "x".repeat(TITLE_MAX_LEN), slug.clone(), "").is_ok());
        assert!(Post::new(author, "x".repeat(TITLE_MAX_LEN + 1), slug.clone(), "").is_err());
        assert!(Post::new(author, "   ", slug, "").is_err());
    }

    #[test]
    fn test_title_length_counts_characters() {
        let title = "é".repeat(TITLE_MAX_LEN);
        assert!(Post::new(Uuid::new_v4(), title, Slug::parse("e").unwrap(), "").is_ok());
    }

    #[test]
    fn test_mutation_keeps_created_and_refreshes_updated() {
        let mut post = hello(Uuid::new_v4());
        let created = post.created();
        let mut last = post.updated();

        post.set_body("new body");
        assert_eq!(post.created(), created);
        assert!(post.updated() >= last);
        last = post.updated();

        post.set_title("Hello again").unwrap();
        post.set_status(PostStatus::Published);
        assert_eq!(post.created(), created);
        assert!(post.updated() >= last);
        assert_eq!(post.to_string(), "Hello again");
    }

    #[test]
    fn test_failed_title_update_leaves_post_untouched() {
        let mut post = hello(Uuid::new_v4());
        let before = post.clone();

        assert!(post.set_title("").is_err());
        assert_eq!(post, before);
    }

    #[test]
    fn test_updated_never_moves_backwards() {
        let future = Utc::now() + chrono::Duration::days(1);
        let mut post = Post::restore(PostRecord {
            updated: future,
            ..hello(Uuid::new_v4()).into_record()
        });

        post.set_body("edited");
        assert_eq!(post.updated(), future);
    }

    #[test]
    fn test_publish_date_and_absolute_path() {
        let publish = Utc.with_ymd_and_hms(2024, 1, 2, 23, 59, 0).unwrap();
        let post = hello(Uuid::new_v4()).with_publish(publish);

        assert_eq!(
            post.publish_date(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
        assert_eq!(post.absolute_path(), "/blog/2024/01/02/hello/");
    }

    #[test]
    fn test_publish_now() {
        let mut post = hello(Uuid::new_v4())
            .with_publish(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        post.publish_now();

        assert!(post.is_published());
        assert!(post.publish() >= post.created());
    }

    #[test]
    fn test_deserialize_validates_fields() {
        let post = hello(Uuid::new_v4());
        let json = serde_json::to_value(&post).unwrap();
        let back: Post = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back, post);

        let mut empty_title = json.clone();
        empty_title["title"] = serde_json::json!("");
        assert!(serde_json::from_value::<Post>(empty_title).is_err());

        let mut long_title = json.clone();
        long_title["title"] = serde_json::json!("x".repeat(1000));
        assert!(serde_json::from_value::<Post>(long_title).is_err());

        let mut bad_slug = json;
        bad_slug["slug"] = serde_json::json!("not a slug");
        assert!(serde_json::from_value::<Post>(bad_slug).is_err());
    }

    #[test]
    fn test_restore_round_trips_timestamps() {
        let post = hello(Uuid::new_v4()).with_status(PostStatus::Published);
        let restored = Post::restore(post.clone().into_record());
        assert_eq!(restored, post);
    }
}
