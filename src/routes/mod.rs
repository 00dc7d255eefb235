mod comments;
mod health_check;
mod likes;
mod posts;
mod users;

pub use comments::*;
pub use health_check::*;
pub use likes::*;
pub use posts::*;
pub use users::*;
