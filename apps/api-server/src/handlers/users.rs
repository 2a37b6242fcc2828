//! User handlers. Users only exist here so posts have an author.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::User;
use blog_core::error::DomainError;
use blog_shared::ApiResponse;
use blog_shared::dto::{CreateUserRequest, UserResponse};

use super::posts::to_response;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn user_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        created_at: user.created_at,
    }
}

/// POST /api/users
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if !req.email.contains('@') {
        return Err(AppError::Validation(vec![
            "email must be a valid address".to_string(),
        ]));
    }

    let user = User::new(req.username, req.email)?;
    let saved = state.users.insert(user).await?;
    tracing::info!(user_id = %saved.id, "User created");

    Ok(HttpResponse::Created().json(user_response(saved)))
}

/// GET /api/users/{id}
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "User",
            id,
        })?;

    Ok(HttpResponse::Ok().json(user_response(user)))
}

/// DELETE /api/users/{id} - also deletes every post the user wrote.
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.users.delete(id).await?;
    tracing::info!(user_id = %id, "User deleted with their posts");

    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/users/{id}/posts
pub async fn list_user_posts(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if state.users.find_by_id(id).await?.is_none() {
        return Err(AppError::NotFound(format!("user {} not found", id)));
    }

    let posts = state.posts.find_by_author(id).await?;
    let items: Vec<_> = posts.iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(items)))
}
