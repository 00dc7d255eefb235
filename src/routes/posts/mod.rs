mod post;
mod routes;

pub use post::*;
pub use routes::post_routes;
