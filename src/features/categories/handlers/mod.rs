pub mod category_handler;

pub use category_handler::{
    __path_browse_categories, __path_create_category, __path_delete_category, browse_categories,
    create_category, delete_category,
};
