mod like;

pub use like::*;
