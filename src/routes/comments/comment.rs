use std::fmt::{self, Debug, Formatter};

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use sqlx::PgPool;

use crate::{
    domain::PostResponse,
    repository,
    routes::PostPathParams,
    utils::{self, INTERNAL_ERROR_MESSAGE},
};

#[derive(thiserror::Error)]
pub enum CommentError {
    #[error("{0}")]
    ValidationError(String),

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for CommentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

impl ResponseError for CommentError {
    fn status_code(&self) -> StatusCode {
        match self {
            CommentError::ValidationError(_) => StatusCode::BAD_REQUEST,
            CommentError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            CommentError::ValidationError(message) => message.clone(),
            CommentError::UnexpectedError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        };

        utils::build_error_response(self.status_code(), message)
    }
}

/// Replies are posts whose `parent_id` points at this post. Any `page` query parameter is ignored.
#[tracing::instrument(skip(pool), fields(post_id = %path.post_id))]
pub async fn show_comments_for_post(
    path: web::Path<PostPathParams>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, CommentError> {
    let post_id = path.post_id().map_err(CommentError::ValidationError)?;

    let comments: Vec<PostResponse> = repository::get_comments_for_post(post_id, &pool)
        .await?
        .into_iter()
        .map(PostResponse::from)
        .collect();

    Ok(utils::build_response(
        StatusCode::OK,
        "Comments loaded successfully!",
        comments,
    ))
}
