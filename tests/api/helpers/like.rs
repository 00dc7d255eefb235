use crate::helpers::TestApp;
use reqwest::Response;
use serde_json::{Value, json};
use std::fmt::Display;

impl TestApp {
    pub async fn like_post(&self, post_id: impl Display, payload: &Value) -> Response {
        self.send_post(&format!("api/posts/{post_id}/like"), payload)
            .await
    }

    pub async fn dislike_post(&self, post_id: impl Display, payload: &Value) -> Response {
        self.send_post(&format!("api/posts/{post_id}/dislike"), payload)
            .await
    }

    /// Reacts through the like endpoint (`is_like = false` stores a dislike)
    /// and returns the response body.
    pub async fn react_as(&self, post_id: i64, user_id: i64, is_like: bool) -> Value {
        let response = self
            .like_post(post_id, &json!({ "isLike": is_like, "userId": user_id }))
            .await;
        assert_eq!(response.status().as_u16(), 200, "Failed to react to post");
        response.json().await.unwrap()
    }

    /// Rows stored for (post, user) as `is_like` values.
    pub async fn stored_reactions(&self, post_id: i64, user_id: i64) -> Vec<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT is_like FROM likes WHERE post_id = $1 AND user_id = $2",
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_all(&self.db_pool)
        .await
        .expect("Failed to fetch likes")
    }
}
