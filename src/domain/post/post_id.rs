/// Positive surrogate key of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostId(i64);

impl PostId {
    /// Parses a path segment such as the `{post_id}` in `/api/posts/{post_id}`.
    pub fn parse(s: &str) -> Result<Self, String> {
        let id = s
            .trim()
            .parse::<i64>()
            .map_err(|_| "Invalid post ID".to_string())?;
        Self::try_from(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for PostId {
    type Error = String;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        if id <= 0 {
            return Err("Invalid post ID".to_string());
        }
        Ok(Self(id))
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
