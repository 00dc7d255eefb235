use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use sqlx::PgPool;

use crate::domain::{LikeSummaryResponse, Reaction, ReactionPayload};
use crate::repository;
use crate::routes::PostPathParams;
use crate::utils::{INTERNAL_ERROR_MESSAGE, build_error_response, build_response, error_chain_fmt};

#[derive(thiserror::Error)]
pub enum LikeError {
    #[error("{0}")]
    ValidationError(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Post not found")]
    PostNotFound,

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for LikeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for LikeError {
    fn status_code(&self) -> StatusCode {
        match self {
            LikeError::ValidationError(_) => StatusCode::BAD_REQUEST,
            LikeError::UserNotFound | LikeError::PostNotFound => StatusCode::NOT_FOUND,
            LikeError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            LikeError::UnexpectedError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        };

        build_error_response(self.status_code(), message)
    }
}

#[tracing::instrument(
    skip(payload, pool),
    fields(post_id = %path.post_id, user_id = ?payload.user_id)
)]
pub async fn like_post(
    path: web::Path<PostPathParams>,
    payload: web::Json<ReactionPayload>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, LikeError> {
    let post_id = path.post_id().map_err(LikeError::ValidationError)?;
    let reaction =
        Reaction::like(post_id, payload.into_inner()).map_err(LikeError::ValidationError)?;

    react_to_post(reaction, &pool).await
}

#[tracing::instrument(
    skip(payload, pool),
    fields(post_id = %path.post_id, user_id = ?payload.user_id)
)]
pub async fn dislike_post(
    path: web::Path<PostPathParams>,
    payload: web::Json<ReactionPayload>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, LikeError> {
    let post_id = path.post_id().map_err(LikeError::ValidationError)?;
    let reaction =
        Reaction::dislike(post_id, payload.into_inner()).map_err(LikeError::ValidationError)?;

    react_to_post(reaction, &pool).await
}

async fn react_to_post(reaction: Reaction, pool: &PgPool) -> Result<HttpResponse, LikeError> {
    if !repository::user_exists(reaction.user_id, pool).await? {
        return Err(LikeError::UserNotFound);
    }

    if !repository::post_exists(reaction.post_id, pool).await? {
        return Err(LikeError::PostNotFound);
    }

    // The checks above can race with a delete; the upsert reports that as a 404 itself.
    repository::upsert_reaction(&reaction, pool).await?;
    let counts = repository::count_reactions(reaction.post_id, pool).await?;

    Ok(build_response(
        StatusCode::OK,
        reaction.success_message(),
        LikeSummaryResponse::new(reaction.post_id.value(), counts),
    ))
}
