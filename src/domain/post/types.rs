use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::NewPost;

#[derive(sqlx::FromRow, Debug)]
pub struct PostRecord {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub parent_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow, Debug)]
pub struct PostWithCountsRecord {
    #[sqlx(flatten)]
    pub post: PostRecord,
    pub like_count: i64,
    pub dislike_count: i64,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub parent_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostRecord> for PostResponse {
    fn from(record: PostRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            content: record.content,
            parent_id: record.parent_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostWithCountsResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub like_count: i64,
    pub dislike_count: i64,
}

impl From<PostWithCountsRecord> for PostWithCountsResponse {
    fn from(record: PostWithCountsRecord) -> Self {
        Self {
            post: PostResponse::from(record.post),
            like_count: record.like_count,
            dislike_count: record.dislike_count,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct DeletedPostResponse {
    pub id: i64,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostPayload {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

impl TryFrom<CreatePostPayload> for NewPost {
    type Error = String;

    fn try_from(payload: CreatePostPayload) -> Result<Self, Self::Error> {
        NewPost::new(payload.content, payload.parent_id)
    }
}

#[derive(Deserialize, Debug)]
pub struct UpdatePostPayload {
    #[serde(default)]
    pub content: Option<String>,
}
