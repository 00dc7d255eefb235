use anyhow::Context;
use sqlx::PgPool;

use crate::domain::{LikeCounts, PostId, Reaction};
use crate::repository::violated_foreign_key;
use crate::routes::LikeError;

const POST_FOREIGN_KEY: &str = "likes_post_id_fkey";
const USER_FOREIGN_KEY: &str = "likes_user_id_fkey";

/// Inserts the reaction or flips the existing row for the same (post, user).
///
/// The `UNIQUE (post_id, user_id)` constraint makes this a single atomic statement,
/// so concurrent requests for one pair cannot leave two rows behind. A post or user
/// deleted in the meantime surfaces as the matching not-found error.
#[tracing::instrument(
    skip(pool),
    fields(post_id=%reaction.post_id, user_id=%reaction.user_id, is_like=reaction.is_like)
)]
pub async fn upsert_reaction(reaction: &Reaction, pool: &PgPool) -> Result<(), LikeError> {
    sqlx::query(
        r#"
        INSERT INTO likes (post_id, user_id, is_like)
        VALUES ($1, $2, $3)
        ON CONFLICT (post_id, user_id)
        DO UPDATE SET is_like = EXCLUDED.is_like, updated_at = now()
        "#,
    )
    .bind(reaction.post_id.value())
    .bind(reaction.user_id.value())
    .bind(reaction.is_like)
    .execute(pool)
    .await
    .map_err(|e| {
        let missing = match violated_foreign_key(&e) {
            Some(POST_FOREIGN_KEY) => Some(LikeError::PostNotFound),
            Some(USER_FOREIGN_KEY) => Some(LikeError::UserNotFound),
            _ => None,
        };
        missing.unwrap_or_else(|| {
            LikeError::UnexpectedError(anyhow::Error::new(e).context("Failed to upsert like"))
        })
    })?;

    Ok(())
}

#[tracing::instrument(skip(pool), fields(post_id=%post_id))]
pub async fn count_reactions(post_id: PostId, pool: &PgPool) -> Result<LikeCounts, anyhow::Error> {
    sqlx::query_as::<_, LikeCounts>(
        r#"
        SELECT COUNT(*) FILTER (WHERE is_like) AS like_count,
               COUNT(*) FILTER (WHERE NOT is_like) AS dislike_count
        FROM likes
        WHERE post_id = $1
        "#,
    )
    .bind(post_id.value())
    .fetch_one(pool)
    .await
    .context("Failed to count likes")
}
