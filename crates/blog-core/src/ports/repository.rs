use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{Post, PostStatus, Slug, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Persist changes to an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
///
/// Deleting a user deletes every post they authored.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}

/// Default page size for post listings.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Filter and pagination for post listings.
#[derive(Debug, Clone)]
pub struct PostQuery {
    pub status: Option<PostStatus>,
    pub limit: u64,
    pub offset: u64,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            status: None,
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl PostQuery {
    /// Only published posts.
    pub fn published() -> Self {
        Self {
            status: Some(PostStatus::Published),
            ..Self::default()
        }
    }
}

/// Post repository.
///
/// Listings are ordered by `publish`, most recent first. Inserts and updates
/// fail with [`RepoError::Duplicate`] when another post has the same slug on
/// the same publish date, and with [`RepoError::MissingReference`] when the
/// author does not exist.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    async fn list(&self, query: PostQuery) -> Result<Vec<Post>, RepoError>;

    /// Posts written by one user ("blog_posts").
    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError>;

    /// Canonical lookup by publish date and slug.
    async fn find_by_date_and_slug(
        &self,
        date: NaiveDate,
        slug: &Slug,
    ) -> Result<Option<Post>, RepoError>;
}
