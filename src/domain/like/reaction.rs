use crate::domain::{PostId, ReactionPayload, UserId};

/// One user's like or dislike of one post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reaction {
    pub post_id: PostId,
    pub user_id: UserId,
    pub is_like: bool,
}

impl Reaction {
    /// Like endpoint: stores whatever `isLike` the client sent.
    pub fn like(post_id: PostId, payload: ReactionPayload) -> Result<Self, String> {
        let user_id = payload
            .user_id
            .ok_or_else(|| "Invalid user ID".to_string())
            .and_then(UserId::try_from)?;
        let is_like = payload
            .is_like
            .ok_or_else(|| "Invalid request body".to_string())?;

        Ok(Self {
            post_id,
            user_id,
            is_like,
        })
    }

    /// Dislike endpoint: `isLike` must be present but the stored value is always `false`.
    pub fn dislike(post_id: PostId, payload: ReactionPayload) -> Result<Self, String> {
        let invalid = || "Invalid request body".to_string();

        // validated, never stored
        payload.is_like.ok_or_else(invalid)?;
        let user_id = payload
            .user_id
            .ok_or_else(invalid)
            .and_then(|id| UserId::try_from(id).map_err(|_| invalid()))?;

        Ok(Self {
            post_id,
            user_id,
            is_like: false,
        })
    }

    pub fn success_message(&self) -> &'static str {
        if self.is_like {
            "Post liked successfully!"
        } else {
            "Post disliked successfully!"
        }
    }
}
