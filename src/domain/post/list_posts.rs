use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    UserId,
    Content,
    ParentId,
    CreatedAt,
    UpdatedAt,
    LikeCount,
    DislikeCount,
}

impl SortField {
    fn parse(s: &str) -> Result<Self, String> {
        match s {
            "id" => Ok(Self::Id),
            "userId" => Ok(Self::UserId),
            "content" => Ok(Self::Content),
            "parentId" => Ok(Self::ParentId),
            "createdAt" => Ok(Self::CreatedAt),
            "updatedAt" => Ok(Self::UpdatedAt),
            "likeCount" => Ok(Self::LikeCount),
            "dislikeCount" => Ok(Self::DislikeCount),
            other => Err(format!("Invalid sort field: {other}")),
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::Id => "p.id",
            Self::UserId => "p.user_id",
            Self::Content => "p.content",
            Self::ParentId => "p.parent_id",
            Self::CreatedAt => "p.created_at",
            Self::UpdatedAt => "p.updated_at",
            Self::LikeCount => "like_count",
            Self::DislikeCount => "dislike_count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn parse(s: &str) -> Result<Self, String> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(format!("Invalid sort order: {s}")),
        }
    }

    fn keyword(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Allow-listed ordering for post listings. Only fixed SQL fragments leave this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Sort {
    pub fn parse(field: &str, order: &str) -> Result<Self, String> {
        Ok(Self {
            field: SortField::parse(field.trim())?,
            direction: SortDirection::parse(order.trim())?,
        })
    }

    pub fn newest_first() -> Self {
        Self {
            field: SortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }

    /// ORDER BY body; `p.id` breaks ties so equal keys come back in a stable order.
    pub fn to_sql(&self) -> String {
        let direction = self.direction.keyword();
        let nulls = match (self.field, self.direction) {
            (SortField::ParentId, SortDirection::Asc) => " NULLS FIRST",
            (SortField::ParentId, SortDirection::Desc) => " NULLS LAST",
            _ => "",
        };

        if self.field == SortField::Id {
            return format!("p.id {direction}");
        }

        format!("{} {direction}{nulls}, p.id {direction}", self.field.column())
    }
}

#[derive(Deserialize, Debug)]
pub struct ListPostsQuery {
    #[serde(default = "default_sort")]
    pub sort: String,
    #[serde(default = "default_order")]
    pub order: String,
}

fn default_sort() -> String {
    "createdAt".to_string()
}

fn default_order() -> String {
    "desc".to_string()
}

impl TryFrom<ListPostsQuery> for Sort {
    type Error = String;

    /// Blank `sort` or `order` values (`?sort=&order=`) fall back to the defaults.
    fn try_from(query: ListPostsQuery) -> Result<Self, Self::Error> {
        let sort = or_default(query.sort, default_sort);
        let order = or_default(query.order, default_order);
        Sort::parse(&sort, &order)
    }
}

fn or_default(value: String, default: fn() -> String) -> String {
    if value.trim().is_empty() {
        default()
    } else {
        value
    }
}
