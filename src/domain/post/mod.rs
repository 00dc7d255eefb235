mod list_posts;
mod new_post;
mod post_content;
mod post_id;
mod types;

pub use list_posts::*;
pub use new_post::NewPost;
pub use post_content::PostContent;
pub use post_id::PostId;
pub use types::*;
