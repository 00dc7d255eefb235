use unicode_segmentation::UnicodeSegmentation;

const MAX_CONTENT_GRAPHEMES: usize = 5000;

#[derive(Debug)]
pub struct PostContent(String);

impl PostContent {
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err("Content is required".to_string());
        }

        if trimmed.graphemes(true).count() > MAX_CONTENT_GRAPHEMES {
            return Err(format!(
                "Content cannot exceed {MAX_CONTENT_GRAPHEMES} characters"
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// A missing `content` field is reported the same way as an empty one.
    pub fn parse_optional(s: Option<String>) -> Result<Self, String> {
        Self::parse(s.unwrap_or_default())
    }
}

impl AsRef<str> for PostContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
