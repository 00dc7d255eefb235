mod routes;
mod user_posts;

pub use routes::user_routes;
pub use user_posts::*;
