use crate::domain::{PostContent, PostId};

/// A validated post ready to be inserted.
#[derive(Debug)]
pub struct NewPost {
    pub content: PostContent,
    pub parent_id: Option<PostId>,
}

impl NewPost {
    pub fn new(content: Option<String>, parent_id: Option<i64>) -> Result<Self, String> {
        let content = PostContent::parse_optional(content)?;

        // 0 is what clients send for "no parent"
        let parent_id = match parent_id {
            None | Some(0) => None,
            Some(id) => Some(PostId::try_from(id).map_err(|_| "Invalid parent ID".to_string())?),
        };

        Ok(Self { content, parent_id })
    }

    pub fn is_comment(&self) -> bool {
        self.parent_id.is_some()
    }
}
