use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReactionPayload {
    #[serde(default)]
    pub is_like: Option<bool>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

#[derive(sqlx::FromRow, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeCounts {
    pub like_count: i64,
    pub dislike_count: i64,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LikeSummaryResponse {
    pub post_id: i64,
    pub like_count: i64,
    pub dislike_count: i64,
}

impl LikeSummaryResponse {
    pub fn new(post_id: i64, counts: LikeCounts) -> Self {
        Self {
            post_id,
            like_count: counts.like_count,
            dislike_count: counts.dislike_count,
        }
    }
}
