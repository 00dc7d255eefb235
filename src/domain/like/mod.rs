mod reaction;
mod types;

pub use reaction::Reaction;
pub use types::*;
