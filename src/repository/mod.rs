mod comment;
mod like;
mod post;
mod user;

pub use comment::*;
pub use like::*;
pub use post::*;
pub use user::*;

const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Name of the foreign key constraint the statement tripped over, if that is why it failed.
pub(crate) fn violated_foreign_key(e: &sqlx::Error) -> Option<&str> {
    match e {
        sqlx::Error::Database(db) if db.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
            db.constraint()
        }
        _ => None,
    }
}
