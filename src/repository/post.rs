use anyhow::Context;
use sqlx::PgPool;
use tracing::Span;

use crate::domain::{NewPost, PostContent, PostId, PostRecord, PostWithCountsRecord, Sort, UserId};
use crate::repository::violated_foreign_key;
use crate::routes::PostError;

const PARENT_FOREIGN_KEY: &str = "posts_parent_id_fkey";
const AUTHOR_FOREIGN_KEY: &str = "posts_user_id_fkey";

const POSTS_WITH_COUNTS: &str = r#"
    SELECT p.id, p.user_id, p.content, p.parent_id, p.created_at, p.updated_at,
           COUNT(l.id) FILTER (WHERE l.is_like) AS like_count,
           COUNT(l.id) FILTER (WHERE NOT l.is_like) AS dislike_count
    FROM posts p
    LEFT JOIN likes l ON l.post_id = p.id
"#;

#[tracing::instrument(skip(pool))]
pub async fn get_all_posts(
    sort: &Sort,
    pool: &PgPool,
) -> Result<Vec<PostWithCountsRecord>, anyhow::Error> {
    let query = format!(
        "{POSTS_WITH_COUNTS} GROUP BY p.id ORDER BY {}",
        sort.to_sql()
    );

    sqlx::query_as::<_, PostWithCountsRecord>(&query)
        .fetch_all(pool)
        .await
        .context("Failed to fetch posts")
}

#[tracing::instrument(skip(pool), fields(user_id=%user_id))]
pub async fn get_posts_by_user(
    user_id: UserId,
    pool: &PgPool,
) -> Result<Vec<PostWithCountsRecord>, anyhow::Error> {
    let query = format!(
        "{POSTS_WITH_COUNTS} WHERE p.user_id = $1 GROUP BY p.id ORDER BY {}",
        Sort::newest_first().to_sql()
    );

    sqlx::query_as::<_, PostWithCountsRecord>(&query)
        .bind(user_id.value())
        .fetch_all(pool)
        .await
        .context("Failed to fetch posts of user")
}

#[tracing::instrument(skip(pool), fields(post_id=%id))]
pub async fn get_post(
    id: PostId,
    pool: &PgPool,
) -> Result<Option<PostWithCountsRecord>, anyhow::Error> {
    let query = format!("{POSTS_WITH_COUNTS} WHERE p.id = $1 GROUP BY p.id");

    sqlx::query_as::<_, PostWithCountsRecord>(&query)
        .bind(id.value())
        .fetch_optional(pool)
        .await
        .context("Failed to fetch post")
}

#[tracing::instrument(skip(pool), fields(post_id=%id))]
pub async fn post_exists(id: PostId, pool: &PgPool) -> Result<bool, anyhow::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
        .bind(id.value())
        .fetch_one(pool)
        .await
        .context("Failed to check if post exists")
}

/// A parent or author that vanished before the insert is reported as missing, not as a 500.
#[tracing::instrument(
    skip_all,
    fields(post_id=tracing::field::Empty, parent_id=?post.parent_id, author=%author)
)]
pub async fn insert_post(
    post: &NewPost,
    author: UserId,
    pool: &PgPool,
) -> Result<PostRecord, PostError> {
    let record = sqlx::query_as::<_, PostRecord>(
        r#"
        INSERT INTO posts (user_id, content, parent_id)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, content, parent_id, created_at, updated_at
        "#,
    )
    .bind(author.value())
    .bind(post.content.as_ref())
    .bind(post.parent_id.map(|id| id.value()))
    .fetch_one(pool)
    .await
    .map_err(|e| {
        let missing = match violated_foreign_key(&e) {
            Some(PARENT_FOREIGN_KEY) => Some(PostError::ParentNotFound),
            Some(AUTHOR_FOREIGN_KEY) => Some(PostError::UserNotFound),
            _ => None,
        };
        missing.unwrap_or_else(|| {
            PostError::UnexpectedError(anyhow::Error::new(e).context("Failed to insert new post"))
        })
    })?;

    Span::current().record("post_id", tracing::field::display(&record.id));
    Ok(record)
}

/// `None` when the post does not exist.
#[tracing::instrument(skip(pool), fields(post_id=%id))]
pub async fn get_post_author(id: PostId, pool: &PgPool) -> Result<Option<i64>, anyhow::Error> {
    sqlx::query_scalar::<_, i64>("SELECT user_id FROM posts WHERE id = $1")
        .bind(id.value())
        .fetch_optional(pool)
        .await
        .context("Failed to fetch author of post")
}

/// Returns `None` when no post has this id; nothing is written in that case.
#[tracing::instrument(skip_all, fields(post_id=%id))]
pub async fn update_post_content(
    id: PostId,
    content: &PostContent,
    pool: &PgPool,
) -> Result<Option<PostRecord>, anyhow::Error> {
    sqlx::query_as::<_, PostRecord>(
        r#"
        UPDATE posts
        SET content = $1, updated_at = now()
        WHERE id = $2
        RETURNING id, user_id, content, parent_id, created_at, updated_at
        "#,
    )
    .bind(content.as_ref())
    .bind(id.value())
    .fetch_optional(pool)
    .await
    .context("Failed to execute update query")
}

// Likes and replies go with the post (ON DELETE CASCADE).
#[tracing::instrument(skip(pool), fields(post_id=%id))]
pub async fn delete_post(id: PostId, pool: &PgPool) -> Result<bool, anyhow::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id.value())
        .execute(pool)
        .await
        .context("Failed to delete post")?;

    Ok(result.rows_affected() > 0)
}
