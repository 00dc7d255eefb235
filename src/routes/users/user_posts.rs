use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use serde::Deserialize;
use sqlx::PgPool;

use crate::domain::{
    CreatePostPayload, DeletedPostResponse, NewPost, PostContent, PostId, PostResponse,
    PostWithCountsResponse, UpdatePostPayload, UserId,
};
use crate::repository;
use crate::routes::{PostError, publish_post};
use crate::utils::{
    INTERNAL_ERROR_MESSAGE, build_error_response, build_response, error_chain_fmt,
};

#[derive(thiserror::Error)]
pub enum UserError {
    #[error("{0}")]
    ValidationError(String),

    #[error("User not found")]
    NotFound,

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for UserError {
    fn status_code(&self) -> StatusCode {
        match self {
            UserError::ValidationError(_) => StatusCode::BAD_REQUEST,
            UserError::NotFound => StatusCode::NOT_FOUND,
            UserError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            UserError::UnexpectedError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        };

        build_error_response(self.status_code(), message)
    }
}

#[derive(Deserialize, Debug)]
pub struct UserPathParams {
    pub user_id: String,
}

#[tracing::instrument(skip(pool), fields(user_id = %path.user_id))]
pub async fn get_user_posts(
    path: web::Path<UserPathParams>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, UserError> {
    let user_id = UserId::parse(&path.user_id).map_err(UserError::ValidationError)?;

    if !repository::user_exists(user_id, &pool).await? {
        return Err(UserError::NotFound);
    }

    let posts: Vec<PostWithCountsResponse> = repository::get_posts_by_user(user_id, &pool)
        .await?
        .into_iter()
        .map(PostWithCountsResponse::from)
        .collect();

    Ok(build_response(StatusCode::OK, "Posts fetched successfully!", posts))
}

#[derive(Deserialize, Debug)]
pub struct UserPostPathParams {
    pub user_id: String,
    pub post_id: String,
}

impl UserPostPathParams {
    fn ids(&self) -> Result<(UserId, PostId), PostError> {
        let user_id = UserId::parse(&self.user_id).map_err(PostError::ValidationError)?;
        let post_id = PostId::parse(&self.post_id).map_err(PostError::ValidationError)?;
        Ok((user_id, post_id))
    }
}

async fn ensure_user_exists(user_id: UserId, pool: &PgPool) -> Result<(), PostError> {
    if !repository::user_exists(user_id, pool).await? {
        return Err(PostError::UserNotFound);
    }
    Ok(())
}

/// The post must exist and belong to `user_id`.
async fn ensure_owner(user_id: UserId, post_id: PostId, pool: &PgPool) -> Result<(), PostError> {
    match repository::get_post_author(post_id, pool).await? {
        None => Err(PostError::NotFound),
        Some(author) if author != user_id.value() => Err(PostError::Forbidden),
        Some(_) => Ok(()),
    }
}

#[tracing::instrument(
    skip(payload, pool),
    fields(
        user_id = %path.user_id,
        parent_id = ?payload.parent_id,
        is_comment = tracing::field::Empty
    )
)]
pub async fn create_user_post(
    path: web::Path<UserPathParams>,
    payload: web::Json<CreatePostPayload>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, PostError> {
    let user_id = UserId::parse(&path.user_id).map_err(PostError::ValidationError)?;
    let post: NewPost = payload.into_inner().try_into().map_err(PostError::ValidationError)?;

    ensure_user_exists(user_id, &pool).await?;

    publish_post(&post, user_id, &pool).await
}

#[tracing::instrument(
    skip(payload, pool),
    fields(user_id = %path.user_id, post_id = %path.post_id)
)]
pub async fn update_user_post(
    path: web::Path<UserPostPathParams>,
    payload: web::Json<UpdatePostPayload>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, PostError> {
    let (user_id, post_id) = path.ids()?;
    let content = PostContent::parse_optional(payload.into_inner().content)
        .map_err(PostError::ValidationError)?;

    ensure_user_exists(user_id, &pool).await?;
    ensure_owner(user_id, post_id, &pool).await?;

    let updated = repository::update_post_content(post_id, &content, &pool)
        .await?
        .ok_or(PostError::NotFound)?;

    Ok(build_response(
        StatusCode::OK,
        "Post updated successfully!",
        PostResponse::from(updated),
    ))
}

#[tracing::instrument(skip(pool), fields(user_id = %path.user_id, post_id = %path.post_id))]
pub async fn delete_user_post(
    path: web::Path<UserPostPathParams>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, PostError> {
    let (user_id, post_id) = path.ids()?;

    ensure_user_exists(user_id, &pool).await?;
    ensure_owner(user_id, post_id, &pool).await?;

    if !repository::delete_post(post_id, &pool).await? {
        return Err(PostError::NotFound);
    }

    Ok(build_response(
        StatusCode::OK,
        "Post deleted successfully!",
        DeletedPostResponse {
            id: post_id.value(),
        },
    ))
}
