//! Post handlers.

use actix_web::{HttpResponse, http::header, web};
use chrono::NaiveDate;
use uuid::Uuid;

use blog_core::domain::{Post, PostStatus, Slug};
use blog_core::error::DomainError;
use blog_core::ports::{DEFAULT_PAGE_SIZE, PostQuery};
use blog_shared::dto::{CreatePostRequest, ListPostsQuery, PostResponse, UpdatePostRequest};
use blog_shared::{ApiResponse, Page};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const MAX_PAGE_SIZE: u64 = 100;

pub(crate) fn to_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id(),
        author_id: post.author_id(),
        title: post.title().to_string(),
        slug: post.slug().to_string(),
        body: post.body().to_string(),
        publish: post.publish(),
        created: post.created(),
        updated: post.updated(),
        status: post.status().to_string(),
        url: post.absolute_path(),
    }
}

fn not_found(id: Uuid) -> AppError {
    DomainError::NotFound {
        entity_type: "Post",
        id,
    }
    .into()
}

/// GET /api/posts?status=&limit=&offset=
///
/// Most recently published first.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    let status = query
        .status
        .as_deref()
        .map(str::parse::<PostStatus>)
        .transpose()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let offset = query.offset.unwrap_or(0);

    let posts = state
        .posts
        .list(PostQuery {
            status,
            limit,
            offset,
        })
        .await?;
    let items: Vec<PostResponse> = posts.iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(Page::new(items, limit, offset))))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let slug = match req.slug {
        Some(slug) => Slug::parse(slug)?,
        None => Slug::from_title(&req.title)?,
    };

    let mut post = Post::new(req.author_id, req.title, slug, req.body)?;
    if let Some(publish) = req.publish {
        post = post.with_publish(publish);
    }
    if let Some(status) = req.status {
        post = post.with_status(status.parse()?);
    }

    let saved = state.posts.insert(post).await?;
    tracing::info!(post_id = %saved.id(), slug = %saved.slug(), "Post created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/posts/{}", saved.id())))
        .json(to_response(&saved)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.posts.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(to_response(&post)))
}

/// GET /api/posts/{year}/{month}/{day}/{slug}
pub async fn get_post_by_date(
    state: web::Data<AppState>,
    path: web::Path<(i32, u32, u32, String)>,
) -> AppResult<HttpResponse> {
    let (year, month, day, slug) = path.into_inner();

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        AppError::BadRequest(format!("{year:04}-{month:02}-{day:02} is not a valid date"))
    })?;
    let slug = Slug::parse(slug).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let post = state
        .posts
        .find_by_date_and_slug(date, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no post {:?} on {}", slug.as_str(), date)))?;

    Ok(HttpResponse::Ok().json(to_response(&post)))
}

/// PATCH /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    if req.is_empty() {
        return Err(AppError::BadRequest("no fields to update".to_string()));
    }

    let mut post = state.posts.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

    if let Some(title) = req.title {
        post.set_title(title)?;
    }
    if let Some(slug) = req.slug {
        post.set_slug(Slug::parse(slug)?);
    }
    if let Some(body) = req.body {
        post.set_body(body);
    }
    if let Some(publish) = req.publish {
        post.set_publish(publish);
    }
    if let Some(status) = req.status {
        post.set_status(status.parse()?);
    }

    let saved = state.posts.update(post).await?;
    tracing::debug!(post_id = %saved.id(), "Post updated");

    Ok(HttpResponse::Ok().json(to_response(&saved)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id).await?;
    tracing::info!(post_id = %id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
