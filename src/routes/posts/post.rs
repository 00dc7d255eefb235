use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use serde::Deserialize;
use sqlx::PgPool;

use crate::domain::{
    CreatePostPayload, DeletedPostResponse, ListPostsQuery, NewPost, PostContent, PostId,
    PostResponse, PostWithCountsResponse, Sort, UpdatePostPayload, UserId,
};
use crate::repository;
use crate::startup::AnonymousAuthor;
use crate::utils::{
    INTERNAL_ERROR_MESSAGE, build_error_response, build_response, error_chain_fmt,
};

#[derive(thiserror::Error)]
pub enum PostError {
    #[error("{0}")]
    ValidationError(String),

    #[error("Post not found")]
    NotFound,

    #[error("Parent post not found")]
    ParentNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Not authorized to modify this post")]
    Forbidden,

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for PostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for PostError {
    fn status_code(&self) -> StatusCode {
        match self {
            PostError::ValidationError(_) => StatusCode::BAD_REQUEST,
            PostError::NotFound | PostError::ParentNotFound | PostError::UserNotFound => {
                StatusCode::NOT_FOUND
            }
            PostError::Forbidden => StatusCode::FORBIDDEN,
            PostError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            PostError::UnexpectedError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        };

        build_error_response(self.status_code(), message)
    }
}

#[derive(Deserialize, Debug)]
pub struct PostPathParams {
    pub post_id: String,
}

impl PostPathParams {
    pub fn post_id(&self) -> Result<PostId, String> {
        PostId::parse(&self.post_id)
    }
}

#[tracing::instrument(skip(pool, query), fields(sort = %query.sort, order = %query.order))]
pub async fn get_all_posts(
    query: web::Query<ListPostsQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, PostError> {
    let sort: Sort = query.into_inner().try_into().map_err(PostError::ValidationError)?;

    let posts: Vec<PostWithCountsResponse> = repository::get_all_posts(&sort, &pool)
        .await?
        .into_iter()
        .map(PostWithCountsResponse::from)
        .collect();

    Ok(build_response(StatusCode::OK, "Posts fetched successfully!", posts))
}

#[tracing::instrument(skip_all, fields(post_id = %path.post_id))]
pub async fn get_post(
    path: web::Path<PostPathParams>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, PostError> {
    let post_id = path.post_id().map_err(PostError::ValidationError)?;

    let post = repository::get_post(post_id, &pool)
        .await?
        .map(PostWithCountsResponse::from)
        .ok_or(PostError::NotFound)?;

    Ok(build_response(StatusCode::OK, "Post fetched successfully!", post))
}

#[tracing::instrument(
    skip(payload, pool, author),
    fields(parent_id = ?payload.parent_id, is_comment = tracing::field::Empty)
)]
pub async fn create_post(
    payload: web::Json<CreatePostPayload>,
    pool: web::Data<PgPool>,
    author: web::Data<AnonymousAuthor>,
) -> Result<HttpResponse, PostError> {
    let post: NewPost = payload.into_inner().try_into().map_err(PostError::ValidationError)?;

    publish_post(&post, author.0, &pool).await
}

/// Stores `post` under `author`. A missing parent is a 404, caught by the foreign key
/// so a parent deleted mid-request is handled the same way.
pub async fn publish_post(
    post: &NewPost,
    author: UserId,
    pool: &PgPool,
) -> Result<HttpResponse, PostError> {
    tracing::Span::current().record("is_comment", post.is_comment());

    let record = repository::insert_post(post, author, pool).await?;

    Ok(build_response(
        StatusCode::CREATED,
        "Post created successfully!",
        PostResponse::from(record),
    ))
}

#[tracing::instrument(skip(payload, pool), fields(post_id = %path.post_id))]
pub async fn update_post(
    path: web::Path<PostPathParams>,
    payload: web::Json<UpdatePostPayload>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, PostError> {
    let post_id = path.post_id().map_err(PostError::ValidationError)?;
    let content = PostContent::parse_optional(payload.into_inner().content)
        .map_err(PostError::ValidationError)?;

    let updated = repository::update_post_content(post_id, &content, &pool)
        .await?
        .ok_or(PostError::NotFound)?;

    Ok(build_response(
        StatusCode::OK,
        "Post updated successfully!",
        PostResponse::from(updated),
    ))
}

#[tracing::instrument(skip(pool), fields(post_id = %path.post_id))]
pub async fn delete_post(
    path: web::Path<PostPathParams>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, PostError> {
    let post_id = path.post_id().map_err(PostError::ValidationError)?;

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
