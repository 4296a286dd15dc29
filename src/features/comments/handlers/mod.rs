pub mod comment_handler;

pub use comment_handler::{__path_add_comment, add_comment};
