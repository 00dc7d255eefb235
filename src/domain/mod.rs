mod like;
mod post;
mod user;

pub use like::*;
pub use post::*;
pub use user::*;
