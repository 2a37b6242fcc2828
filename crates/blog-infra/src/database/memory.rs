//! In-memory repositories - used as fallback when no database is configured.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{Post, PostRecord, Slug, User};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostQuery, PostRepository, UserRepository};

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    posts: HashMap<Uuid, Post>,
}

impl Tables {
    fn check_username(&self, user: &User) -> Result<(), RepoError> {
        let taken = self
            .users
            .values()
            .any(|u| u.id != user.id && u.username == user.username);
        if taken {
            return Err(RepoError::Duplicate(format!(
                "username {:?} already exists",
                user.username
            )));
        }
        Ok(())
    }

    /// Author must exist and `(slug, publish_date)` must be free.
    fn check_post(&self, post: &Post) -> Result<(), RepoError> {
        if !self.users.contains_key(&post.author_id()) {
            return Err(RepoError::MissingReference(format!(
                "author {} does not exist",
                post.author_id()
            )));
        }

        let date = post.publish_date();
        let clash = self.posts.values().any(|p| {
            p.id() != post.id() && p.slug() == post.slug() && p.publish_date() == date
        });
        if clash {
            return Err(RepoError::Duplicate(format!(
                "slug {:?} already used on {}",
                post.slug().as_str(),
                date
            )));
        }
        Ok(())
    }

    fn sorted_posts<'a>(posts: impl Iterator<Item = &'a Post>) -> Vec<Post> {
        let mut posts: Vec<Post> = posts.cloned().collect();
        posts.sort_by(|a, b| b.publish().cmp(&a.publish()));
        posts
    }
}

/// Shared in-memory tables so that user deletion can cascade to posts.
///
/// Note: Data is lost on process restart.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> InMemoryUserRepository {
        InMemoryUserRepository {
            store: self.clone(),
        }
    }

    pub fn posts(&self) -> InMemoryPostRepository {
        InMemoryPostRepository {
            store: self.clone(),
        }
    }
}

/// In-memory user repository.
#[derive(Clone)]
pub struct InMemoryUserRepository {
    store: InMemoryStore,
}

/// In-memory post repository.
#[derive(Clone)]
pub struct InMemoryPostRepository {
    store: InMemoryStore,
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.users.get(&id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut tables = self.store.tables.write().await;
        if tables.users.contains_key(&user.id) {
            return Err(RepoError::Duplicate(format!("user {} already exists", user.id)));
        }
        tables.check_username(&user)?;
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let mut tables = self.store.tables.write().await;
        if !tables.users.contains_key(&user.id) {
            return Err(RepoError::NotFound);
        }
        tables.check_username(&user)?;
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        if tables.users.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }

        let before = tables.posts.len();
        tables.posts.retain(|_, post| post.author_id() != id);
        let removed = before - tables.posts.len();
        if removed > 0 {
            tracing::debug!(user_id = %id, removed, "Cascade-deleted posts");
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.posts.get(&id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut tables = self.store.tables.write().await;
        if tables.posts.contains_key(&post.id()) {
            return Err(RepoError::Duplicate(format!("post {} already exists", post.id())));
        }
        tables.check_post(&post)?;
        tables.posts.insert(post.id(), post.clone());
        Ok(post)
    }

    /// Keeps the stored `created` and stamps `updated` with the write time,
    /// never earlier than the stored value.
    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut tables = self.store.tables.write().await;
        let (created, updated) = tables
            .posts
            .get(&post.id())
            .map(|stored| (stored.created(), stored.updated()))
            .ok_or(RepoError::NotFound)?;

        let post = Post::restore(PostRecord {
            created,
            updated: Utc::now().max(updated),
            ..post.into_record()
        });
        tables.check_post(&post)?;
        tables.posts.insert(post.id(), post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        tables
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self, query: PostQuery) -> Result<Vec<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        let matching = tables
            .posts
            .values()
            .filter(|p| query.status.is_none_or(|s| p.status() == s));

        Ok(Tables::sorted_posts(matching)
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect())
    }

    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(Tables::sorted_posts(
            tables.posts.values().filter(|p| p.author_id() == author_id),
        ))
    }

    async fn find_by_date_and_slug(
        &self,
        date: NaiveDate,
        slug: &Slug,
    ) -> Result<Option<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .posts
            .values()
            .find(|p| p.publish_date() == date && p.slug() == slug)
            .cloned())
    }
}
