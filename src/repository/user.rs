use anyhow::Context;
use sqlx::PgPool;

use crate::domain::UserId;

#[tracing::instrument(skip(pool), fields(user_id=%user_id))]
pub async fn user_exists(user_id: UserId, pool: &PgPool) -> Result<bool, anyhow::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
        .bind(user_id.value())
        .fetch_one(pool)
        .await
        .context("Failed to check if user exists")
}
