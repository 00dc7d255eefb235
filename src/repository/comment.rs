use anyhow::Context;
use sqlx::PgPool;

use crate::domain::{PostId, PostRecord};

#[tracing::instrument(skip(pool), fields(post_id=%post_id))]
pub async fn get_comments_for_post(
    post_id: PostId,
    pool: &PgPool,
) -> Result<Vec<PostRecord>, anyhow::Error> {
    sqlx::query_as::<_, PostRecord>(
        r#"
        SELECT id, user_id, content, parent_id, created_at, updated_at
        FROM posts
        WHERE parent_id = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(post_id.value())
    .fetch_all(pool)
    .await
    .context("Failed to load comments for post")
}
